use serde::{Serialize, Deserialize};
use std::f64::consts::E;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    Identity,
}

impl ActivationFunction {
    /// Element-wise activation.
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Identity => x,
        }
    }

    /// Element-wise derivative of the activation.
    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            },
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::Identity => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_range_and_midpoint() {
        let s = ActivationFunction::Sigmoid;
        assert!((s.function(0.0) - 0.5).abs() < 1e-12);
        for &x in &[-50.0, -3.0, 0.0, 3.0, 50.0] {
            let y = s.function(x);
            assert!(y > 0.0 && y < 1.0);
        }
    }

    #[test]
    fn sigmoid_derivative_matches_identity() {
        // sigma'(x) = sigma(x) * (1 - sigma(x))
        let s = ActivationFunction::Sigmoid;
        for &x in &[-2.0, -0.5, 0.0, 0.5, 2.0] {
            let fx = s.function(x);
            assert!((s.derivative(x) - fx * (1.0 - fx)).abs() < 1e-12);
        }
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let h = 1e-6;
        for act in [ActivationFunction::Sigmoid, ActivationFunction::Tanh, ActivationFunction::Identity] {
            for &x in &[-1.0, 0.0, 0.7] {
                let numeric = (act.function(x + h) - act.function(x - h)) / (2.0 * h);
                assert!((act.derivative(x) - numeric).abs() < 1e-6);
            }
        }
    }
}
