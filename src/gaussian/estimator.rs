use std::f64::consts::PI;

use crate::math::matrix::Matrix;

/// Weighted empirical mean of the labeled points:
///
/// μ_d = Σₙ γₙ·xₙ_d / Σₙ γₙ
///
/// where γₙ is the 0/1 cluster label acting as a weight. With an all-zero
/// label vector the division yields NaN, which propagates to the caller.
pub fn estimate_mean(points: &[[f64; 2]], labels: &[f64]) -> [f64; 2] {
    assert_eq!(points.len(), labels.len(), "points and labels must have equal length");

    let label_mass: f64 = labels.iter().sum();
    let mut sums = [0.0, 0.0];
    for (p, &gamma) in points.iter().zip(labels.iter()) {
        sums[0] += gamma * p[0];
        sums[1] += gamma * p[1];
    }

    [sums[0] / label_mass, sums[1] / label_mass]
}

/// Weighted per-dimension variance around `mean`, returned as a 2x2 diagonal
/// matrix:
///
/// σ²_d = Σₙ γₙ·(xₙ_d − μ_d)² / Σₙ γₙ
///
/// The dimensions are treated as independent; off-diagonal entries are
/// always zero, so this is not a full covariance estimate.
pub fn estimate_covariance(points: &[[f64; 2]], mean: [f64; 2], labels: &[f64]) -> Matrix {
    assert_eq!(points.len(), labels.len(), "points and labels must have equal length");

    let label_mass: f64 = labels.iter().sum();
    let mut sums = [0.0, 0.0];
    for (p, &gamma) in points.iter().zip(labels.iter()) {
        let dx = p[0] - mean[0];
        let dy = p[1] - mean[1];
        sums[0] += gamma * dx * dx;
        sums[1] += gamma * dy * dy;
    }

    Matrix::diag(&[sums[0] / label_mass, sums[1] / label_mass])
}

/// MAP estimate of the mean: a convex combination of the prior mean and the
/// weighted mean of the adaptation data, with `tau` weighing the prior
/// against the label mass:
///
/// μ_d = (τ·μ_prior_d + Σₙ γₙ·xₙ_d) / (τ + Σₙ γₙ)
///
/// τ = 0 reduces to the plain weighted mean of the new data; τ → ∞
/// approaches the prior.
pub fn adapt_mean(
    new_points: &[[f64; 2]],
    prior_mean: [f64; 2],
    new_labels: &[f64],
    tau: f64,
) -> [f64; 2] {
    assert_eq!(new_points.len(), new_labels.len(), "points and labels must have equal length");

    let label_mass: f64 = new_labels.iter().sum();
    let mut sums = [0.0, 0.0];
    for (p, &gamma) in new_points.iter().zip(new_labels.iter()) {
        sums[0] += gamma * p[0];
        sums[1] += gamma * p[1];
    }

    [
        (tau * prior_mean[0] + sums[0]) / (tau + label_mass),
        (tau * prior_mean[1] + sums[1]) / (tau + label_mass),
    ]
}

/// MAP update of the covariance, after Gauvain and later Shinoda:
///
/// Σ = (Σ_prior + τ·(μ_prior − μ_new)² + Σₙ γₙ·(xₙ − μ_new)²) / ((α − p) + Σₙ γₙ)
///
/// Not implemented: the reference formula is quoted for completeness but the
/// update itself is out of scope and this function always panics.
pub fn adapt_covariance(
    _new_points: &[[f64; 2]],
    _prior_covariance: &Matrix,
    _prior_mean: [f64; 2],
    _new_mean: [f64; 2],
    _new_labels: &[f64],
    _tau: f64,
) -> Matrix {
    unimplemented!("MAP covariance update is not implemented")
}

/// Multivariate normal density of `x` under the given mean and covariance:
///
/// p(x) = (2π)^(−D/2)·det(Σ)^(−1/2)·exp(−½·(x−μ)ᵀ·Σ⁻¹·(x−μ))
///
/// # Panics
/// Panics when the covariance is singular (the inverse is undefined).
pub fn density(x: [f64; 2], mean: [f64; 2], covariance: &Matrix) -> f64 {
    let det = covariance.determinant();
    assert!(det > 0.0, "covariance must be positive definite");

    let inv = covariance.inverse();
    let dx = [x[0] - mean[0], x[1] - mean[1]];
    let quad = dx[0] * (inv.data[0][0] * dx[0] + inv.data[0][1] * dx[1])
             + dx[1] * (inv.data[1][0] * dx[0] + inv.data[1][1] * dx[1]);

    (-0.5 * quad).exp() / ((2.0 * PI).powi(2) * det).sqrt()
}
