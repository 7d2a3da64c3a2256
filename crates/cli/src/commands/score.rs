use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use clusterweight::{Dataset, Normalization, RelevanceConfig, RelevanceFilter};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};
use std::path::PathBuf;

use crate::io::{load_config, load_dataset, write_dataset};

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum NormalizationArg {
    /// w / (min + epsilon)
    Offset,
    /// (w + epsilon) / (min + epsilon)
    Shifted,
}

impl From<NormalizationArg> for Normalization {
    fn from(arg: NormalizationArg) -> Self {
        match arg {
            NormalizationArg::Offset => Normalization::Offset,
            NormalizationArg::Shifted => Normalization::Shifted,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct ScoreArgs {
    /// Dataset JSON file
    #[arg(long, short)]
    pub input: PathBuf,

    /// Where to write the weighted dataset (stdout if omitted)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// JSON config file; flags below override its fields
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub min_clusters: Option<usize>,

    #[arg(long)]
    pub max_clusters: Option<usize>,

    #[arg(long)]
    pub max_iterations: Option<usize>,

    #[arg(long)]
    pub epsilon: Option<f64>,

    #[arg(long, value_enum)]
    pub normalization: Option<NormalizationArg>,

    /// Print a table of the final weights
    #[arg(long)]
    pub table: bool,
}

impl ScoreArgs {
    /// Config file (or defaults) with command-line overrides applied.
    pub fn resolve_config(&self) -> Result<RelevanceConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => RelevanceConfig::default(),
        };
        if let Some(v) = self.min_clusters {
            config.min_clusters = v;
        }
        if let Some(v) = self.max_clusters {
            config.max_clusters = v;
        }
        if let Some(v) = self.max_iterations {
            config.max_iterations = v;
        }
        if let Some(v) = self.epsilon {
            config.epsilon = v;
        }
        if let Some(v) = self.normalization {
            config.normalization = v.into();
        }
        config.validate()?;
        Ok(config)
    }
}

/// Loads, weights and returns the dataset without writing anything.
pub fn score_file(args: &ScoreArgs) -> Result<Dataset> {
    let config = args.resolve_config()?;
    let mut dataset = load_dataset(&args.input)?;

    RelevanceFilter::new(config)
        .process(&mut dataset)
        .with_context(|| format!("Failed to score {:?}", args.input))?;
    Ok(dataset)
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let dataset = score_file(args)?;

    match &args.output {
        Some(path) => {
            write_dataset(path, &dataset)?;
            tracing::info!("Wrote {} weighted records to {:?}", dataset.len(), path);
        }
        None => println!("{}", serde_json::to_string_pretty(&dataset)?),
    }

    if args.table {
        eprintln!("{}", weights_table(&dataset));
    }
    eprintln!("Weight digest: {}", hex::encode(dataset.weight_digest()));
    Ok(())
}

fn weights_table(dataset: &Dataset) -> Table {
    let label = dataset.schema.label_index;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Row", "Label", "Weight"]);

    for (i, record) in dataset.records.iter().enumerate() {
        let label_text = label
            .and_then(|idx| record.values.get(idx))
            .map(|v| match v {
                clusterweight::Value::Numeric(n) => n.to_string(),
                clusterweight::Value::Nominal(s) => s.clone(),
            })
            .unwrap_or_else(|| "-".to_string());
        table.add_row(vec![i.to_string(), label_text, format!("{:.6}", record.weight)]);
    }
    table
}
