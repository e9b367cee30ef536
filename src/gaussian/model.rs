use serde::{Serialize, Deserialize};

use crate::gaussian::estimator::{adapt_mean, estimate_covariance, estimate_mean, density};
use crate::math::matrix::Matrix;

/// A single-component 2-D Gaussian with a diagonal covariance matrix.
///
/// Estimates are recomputed from scratch on every fit; there is no
/// incremental update path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gaussian2d {
    pub mean: [f64; 2],
    pub covariance: Matrix,
}

impl Gaussian2d {
    pub fn new(mean: [f64; 2], covariance: Matrix) -> Gaussian2d {
        assert!(covariance.rows == 2 && covariance.cols == 2, "covariance must be 2x2");
        Gaussian2d { mean, covariance }
    }

    /// Maximum-likelihood fit: weighted mean, then weighted per-dimension
    /// variance around it. Labels are the 0/1 cluster membership weights.
    pub fn fit_mle(points: &[[f64; 2]], labels: &[f64]) -> Gaussian2d {
        let mean = estimate_mean(points, labels);
        let covariance = estimate_covariance(points, mean, labels);
        Gaussian2d { mean, covariance }
    }

    /// MAP adaptation toward `new_points`: the mean shrinks toward this
    /// model's mean with weight `tau`, the covariance is carried over
    /// unchanged (its MAP update is not implemented).
    pub fn adapt_map(&self, new_points: &[[f64; 2]], new_labels: &[f64], tau: f64) -> Gaussian2d {
        let mean = adapt_mean(new_points, self.mean, new_labels, tau);
        Gaussian2d { mean, covariance: self.covariance.clone() }
    }

    /// Density of `x` under this Gaussian.
    ///
    /// # Panics
    /// Panics when the covariance is singular.
    pub fn density(&self, x: [f64; 2]) -> f64 {
        density(x, self.mean, &self.covariance)
    }

    /// Serializes the parameters to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes parameters from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Gaussian2d> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
