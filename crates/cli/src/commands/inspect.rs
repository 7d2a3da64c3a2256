use anyhow::Result;
use clusterweight::{AttributeKind, RelevanceConfig, RelevanceFilter};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::path::Path;

use crate::io::load_dataset;

pub fn run(input: &Path) -> Result<()> {
    let dataset = load_dataset(input)?;
    let schema = &dataset.schema;
    let filter = RelevanceFilter::new(RelevanceConfig::default());

    println!("\n{}", filter.global_info());
    println!("--------------------");
    println!("Records:  {}", dataset.len());
    println!("Features: {}", schema.num_features());
    match schema.label() {
        Some(attr) => println!("Label:    {}", attr.name),
        None => println!("Label:    (none)"),
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Attribute", "Kind", "Role"]);

    for (i, attr) in schema.attributes.iter().enumerate() {
        let kind = match &attr.kind {
            AttributeKind::Numeric => "numeric".to_string(),
            AttributeKind::Nominal(values) => format!("nominal ({} values)", values.len()),
        };
        let role = if Some(i) == schema.label_index { "label" } else { "feature" };
        table.add_row(vec![i.to_string(), attr.name.clone(), kind, role.to_string()]);
    }
    println!("{table}\n");

    let caps = filter.capabilities();
    let mut cap_table = Table::new();
    cap_table
        .load_preset(UTF8_FULL)
        .set_header(vec!["Capability", "Supported"]);
    for (name, supported) in [
        ("Numeric attributes", caps.numeric_attributes),
        ("Nominal attributes", caps.nominal_attributes),
        ("Numeric label", caps.numeric_label),
        ("Nominal label", caps.nominal_label),
        ("No label", caps.no_label),
    ] {
        cap_table.add_row(vec![name.to_string(), if supported { "yes" } else { "no" }.to_string()]);
    }
    println!("{cap_table}\n");

    Ok(())
}
