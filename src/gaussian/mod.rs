pub mod estimator;
pub mod model;

pub use estimator::{estimate_mean, estimate_covariance, adapt_mean, adapt_covariance, density};
pub use model::Gaussian2d;
