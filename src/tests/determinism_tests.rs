use super::{numeric_dataset, Pcg32};
use crate::cluster::FixedCentroids;
use crate::config::RelevanceConfig;
use crate::filter::RelevanceFilter;
use crate::types::Dataset;

fn random_dataset(seed: u64, rows: usize, dim: usize) -> Dataset {
    let mut rng = Pcg32::new(seed);
    let data: Vec<Vec<f64>> = (0..rows)
        .map(|_| (0..dim).map(|_| rng.next_f64() * 100.0).collect())
        .collect();
    let refs: Vec<&[f64]> = data.iter().map(|r| r.as_slice()).collect();
    numeric_dataset(&refs)
}

#[test]
fn test_fixed_centroids_bit_identical() {
    let preset = FixedCentroids::from_rows(vec![vec![10.0, 10.0, 10.0], vec![80.0, 20.0, 50.0]]);
    let filter = RelevanceFilter::with_discoverer(RelevanceConfig::default(), &preset);

    let mut first = random_dataset(7, 200, 3);
    let mut second = first.clone();
    filter.process(&mut first).unwrap();
    filter.process(&mut second).unwrap();

    for (a, b) in first.weights().iter().zip(second.weights()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
    assert_eq!(first.weight_digest(), second.weight_digest());
}

#[test]
fn test_xmeans_pipeline_bit_identical() {
    let filter = RelevanceFilter::new(RelevanceConfig { max_clusters: 16, ..Default::default() });

    let mut first = random_dataset(42, 150, 4);
    let mut second = first.clone();
    filter.process(&mut first).unwrap();
    filter.process(&mut second).unwrap();

    assert_eq!(first.weight_digest(), second.weight_digest());
}

#[test]
fn test_digest_tracks_weights() {
    let mut dataset = random_dataset(1, 10, 2);
    let before = dataset.weight_digest();
    dataset.records[3].weight = 2.0;
    assert_ne!(before, dataset.weight_digest());
}
