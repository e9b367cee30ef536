use rand::prelude::*;

use crate::math::matrix::Matrix;

/// Labeled 2-D sample cloud: `labels[i]` is the cluster index (0.0 or 1.0)
/// of `points[i]`, usable directly as a membership weight in the estimators.
#[derive(Debug, Clone)]
pub struct BlobData {
    pub points: Vec<[f64; 2]>,
    pub labels: Vec<f64>,
}

/// Generates `num_samples` points forming two Gaussian blobs on the plane.
///
/// The two cluster centers are drawn uniformly from the square
/// `[center_box.0, center_box.1]²`; samples alternate between the clusters
/// and scatter around their center with per-cluster standard deviation
/// `cluster_std`.
pub fn make_blobs(num_samples: usize, cluster_std: [f64; 2], center_box: (f64, f64)) -> BlobData {
    let mut rng = rand::thread_rng();

    let centers: [[f64; 2]; 2] = [
        [rng.gen_range(center_box.0..center_box.1), rng.gen_range(center_box.0..center_box.1)],
        [rng.gen_range(center_box.0..center_box.1), rng.gen_range(center_box.0..center_box.1)],
    ];

    let mut points = Vec::with_capacity(num_samples);
    let mut labels = Vec::with_capacity(num_samples);

    for i in 0..num_samples {
        let cluster = i % 2;
        let center = centers[cluster];
        let std = cluster_std[cluster];
        points.push([
            center[0] + std * Matrix::sample_standard_normal(&mut rng),
            center[1] + std * Matrix::sample_standard_normal(&mut rng),
        ]);
        labels.push(cluster as f64);
    }

    BlobData { points, labels }
}

/// Flips cluster membership: 0.0 becomes 1.0 and vice versa, so the same
/// sample cloud can be fit against the other blob.
pub fn invert_labels(labels: &[f64]) -> Vec<f64> {
    labels.iter().map(|l| 1.0 - l).collect()
}
