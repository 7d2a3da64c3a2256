use crate::cluster::kmeans::deterministic_kmeans;
use crate::cluster::xmeans::bic;
use crate::cluster::{validate_centroids, ClusterDiscoverer, FixedCentroids, XMeans};
use crate::error::RelevanceError;
use crate::types::{Centroid, FeatureMatrix};

/// Ten evenly spaced 1-D points starting at each offset.
fn blobs_1d(offsets: &[f64]) -> FeatureMatrix {
    let mut rows = Vec::new();
    for &offset in offsets {
        for i in 0..10 {
            rows.push(vec![offset + i as f64 * 0.1]);
        }
    }
    FeatureMatrix::new(1, rows).unwrap()
}

fn blobs_2d(centers: &[(f64, f64)]) -> FeatureMatrix {
    let mut rows = Vec::new();
    for &(x, y) in centers {
        for i in 0..6 {
            let jitter = (i as f64 - 2.5) * 0.05;
            rows.push(vec![x + jitter, y - jitter]);
        }
    }
    FeatureMatrix::new(2, rows).unwrap()
}

fn sorted_first_coords(centroids: &[Centroid]) -> Vec<f64> {
    let mut xs: Vec<f64> = centroids.iter().map(|c| c.as_slice()[0]).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs
}

#[test]
fn test_kmeans_bit_identical() {
    let data: Vec<Vec<f64>> = (0..100)
        .map(|i| {
            let val = i as f64 / 100.0;
            vec![val, 1.0 - val]
        })
        .collect();
    let rows: Vec<&[f64]> = data.iter().map(|r| r.as_slice()).collect();

    let fit1 = deterministic_kmeans(&rows, 5, 10);
    let fit2 = deterministic_kmeans(&rows, 5, 10);

    assert_eq!(fit1.centroids.len(), 5);
    for (i, c1) in fit1.centroids.iter().enumerate() {
        for (j, v1) in c1.iter().enumerate() {
            let v2 = fit2.centroids[i][j];
            assert_eq!(v1.to_bits(), v2.to_bits(), "Mismatch at centroid {} dim {}", i, j);
        }
    }
    assert_eq!(fit1.assignments, fit2.assignments);
}

#[test]
fn test_kmeans_separates_obvious_groups() {
    let view = blobs_1d(&[0.0, 100.0]);
    let rows: Vec<&[f64]> = view.iter().collect();
    let fit = deterministic_kmeans(&rows, 2, 50);

    assert!(fit.converged);
    assert_eq!(fit.cluster_sizes(), vec![10, 10]);
    assert!(fit.sse(&rows) < 2.0);
}

#[test]
fn test_bic_prefers_true_split() {
    let view = blobs_1d(&[0.0, 100.0]);
    let rows: Vec<&[f64]> = view.iter().collect();

    let one = vec![vec![50.45]];
    let two = vec![vec![0.45], vec![100.45]];
    let one_assign = vec![0; rows.len()];
    let two_assign: Vec<usize> = (0..rows.len()).map(|i| i / 10).collect();

    assert!(bic(&rows, &two, &two_assign) > bic(&rows, &one, &one_assign));
}

#[test]
fn test_bic_undefined_without_spare_rows() {
    let data = vec![vec![0.0], vec![1.0]];
    let rows: Vec<&[f64]> = data.iter().map(|r| r.as_slice()).collect();
    assert_eq!(bic(&rows, &[vec![0.0], vec![1.0]], &[0, 1]), f64::NEG_INFINITY);
}

#[test]
fn test_xmeans_discovers_two_groups() {
    let view = blobs_1d(&[0.0, 100.0]);
    let centroids = XMeans::new().discover(&view, 1, 10, 100).unwrap();

    assert_eq!(centroids.len(), 2);
    let xs = sorted_first_coords(&centroids);
    assert!((xs[0] - 0.45).abs() < 1e-9);
    assert!((xs[1] - 100.45).abs() < 1e-9);
}

#[test]
fn test_xmeans_fixed_range() {
    let view = blobs_2d(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);
    let centroids = XMeans::new().discover(&view, 3, 3, 100).unwrap();

    assert_eq!(centroids.len(), 3);
    let xs = sorted_first_coords(&centroids);
    assert!(xs[0].abs() < 1.0);
    assert!((xs[1] - 50.0).abs() < 1.0);
    assert!((xs[2] - 100.0).abs() < 1.0);
}

#[test]
fn test_xmeans_respects_max_k() {
    let view = blobs_2d(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0), (0.0, 100.0)]);
    let centroids = XMeans::new().discover(&view, 1, 2, 100).unwrap();
    assert!(!centroids.is_empty());
    assert!(centroids.len() <= 2);
}

#[test]
fn test_xmeans_identical_rows_yield_one_centroid() {
    let view = FeatureMatrix::new(2, vec![vec![3.0, 3.0]; 5]).unwrap();
    let centroids = XMeans::new().discover(&view, 2, 10, 100).unwrap();
    assert_eq!(centroids, vec![Centroid::new(vec![3.0, 3.0])]);
}

#[test]
fn test_xmeans_rejects_bad_input() {
    let empty = FeatureMatrix::new(1, Vec::new()).unwrap();
    assert!(matches!(
        XMeans::new().discover(&empty, 1, 2, 10),
        Err(RelevanceError::Clustering(_))
    ));

    let view = blobs_1d(&[0.0]);
    assert!(matches!(
        XMeans::new().discover(&view, 3, 2, 10),
        Err(RelevanceError::Clustering(_))
    ));
    assert!(matches!(
        XMeans::new().discover(&view, 1, 2, 0),
        Err(RelevanceError::Clustering(_))
    ));
}

#[test]
fn test_xmeans_deterministic() {
    let view = blobs_2d(&[(0.0, 0.0), (10.0, 10.0), (20.0, 0.0)]);
    let a = XMeans::new().discover(&view, 2, 20, 100).unwrap();
    let b = XMeans::new().discover(&view, 2, 20, 100).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_fixed_centroids_returned_verbatim() {
    let preset = FixedCentroids::from_rows(vec![vec![1.0], vec![2.0]]);
    let view = blobs_1d(&[0.0]);
    let out = preset.discover(&view, 5, 6, 1).unwrap();
    assert_eq!(out, vec![Centroid::new(vec![1.0]), Centroid::new(vec![2.0])]);
}

#[test]
fn test_validate_centroids() {
    let ok = vec![Centroid::new(vec![0.0, 0.0])];
    assert!(validate_centroids(&ok, 2, 1).is_ok());

    assert!(matches!(validate_centroids(&[], 2, 4), Err(RelevanceError::Clustering(_))));

    let too_many = vec![Centroid::new(vec![0.0, 0.0]); 3];
    assert!(matches!(validate_centroids(&too_many, 2, 2), Err(RelevanceError::Clustering(_))));

    let narrow = vec![Centroid::new(vec![0.0])];
    assert_eq!(
        validate_centroids(&narrow, 2, 4).unwrap_err(),
        RelevanceError::DimensionMismatch { expected: 2, found: 1 }
    );

    let nan = vec![Centroid::new(vec![0.0, f64::NAN])];
    assert!(matches!(validate_centroids(&nan, 2, 4), Err(RelevanceError::Clustering(_))));
}
