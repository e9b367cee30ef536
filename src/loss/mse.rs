pub struct MseLoss;

impl MseLoss {
    /// Scalar MSE: mean((predicted - expected)²)
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>() / n
    }

    /// Per-output gradient: predicted - expected
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted.iter().zip(expected.iter())
            .map(|(a, b)| a - b)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_zero_on_exact_match() {
        assert_eq!(MseLoss::loss(&[0.25, 0.75], &[0.25, 0.75]), 0.0);
    }

    #[test]
    fn loss_averages_squared_errors() {
        // (1 + 4) / 2
        assert!((MseLoss::loss(&[1.0, 0.0], &[0.0, 2.0]) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn derivative_is_signed_residual() {
        let d = MseLoss::derivative(&[0.9, 0.1], &[1.0, 0.0]);
        assert!((d[0] + 0.1).abs() < 1e-12);
        assert!((d[1] - 0.1).abs() < 1e-12);
    }
}
