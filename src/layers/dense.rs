use serde::{Serialize, Deserialize};
use crate::{math::matrix::Matrix, activation::activation::ActivationFunction};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layer{
    pub size: usize,
    pub neurons: Matrix,
    pre_neurons: Matrix,  // pre-activation values (z = xW + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction
}

impl Layer {
    pub fn new(size: usize, input_size: usize, activation: ActivationFunction) -> Layer {
        let neurons = Matrix::zeros(1, size);
        let pre_neurons = Matrix::zeros(1, size);
        // Gaussian-sampled initial parameters, scaled by fan-in.
        let weights = Matrix::xavier(input_size, size);
        let biases = Matrix::xavier(1, size);

        Layer {
            size,
            neurons,
            pre_neurons,
            weights,
            biases,
            activator: activation
        }
    }

    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::from_data(vec![input]) * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data[0].clone()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is ∂L/∂a for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) = σ'(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        // δ = error ⊙ σ'(z)
        let layer_delta = next_layer_delta.hadamard(&act_derivative);

        // ∂C/∂W is the outer product of the incoming activation and δ.
        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, lr: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|x| x * lr);
        self.biases = self.biases.clone() - biases_grad.map(|x| x * lr);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_layer() -> Layer {
        let mut layer = Layer::new(2, 2, ActivationFunction::Sigmoid);
        layer.weights = Matrix::from_data(vec![vec![0.3, -0.2], vec![0.1, 0.4]]);
        layer.biases = Matrix::from_data(vec![vec![0.0, 0.1]]);
        layer
    }

    #[test]
    fn feed_from_outputs_sigmoid_range() {
        let mut layer = fixed_layer();
        let out = layer.feed_from(vec![5.0, -7.0]);
        assert_eq!(out.len(), 2);
        for v in out {
            assert!(v > 0.0 && v < 1.0);
        }
    }

    #[test]
    fn gradient_shapes_match_parameters() {
        let mut layer = fixed_layer();
        let input = vec![1.0, 2.0];
        layer.feed_from(input.clone());

        let delta = Matrix::from_data(vec![vec![0.5, -0.5]]);
        let inputs = Matrix::from_data(vec![input]);
        let (w_grad, b_grad) = layer.compute_gradients(delta, &inputs);

        assert_eq!((w_grad.rows, w_grad.cols), (layer.weights.rows, layer.weights.cols));
        assert_eq!((b_grad.rows, b_grad.cols), (layer.biases.rows, layer.biases.cols));
    }

    #[test]
    fn weight_gradient_matches_finite_difference() {
        let mut layer = fixed_layer();
        let input = vec![0.8, -0.3];
        let target = [1.0, 0.0];

        // Quadratic loss of the layer output against a fixed target.
        let loss = |layer: &mut Layer| {
            let out = layer.feed_from(input.clone());
            out.iter().zip(target.iter()).map(|(a, y)| (a - y) * (a - y)).sum::<f64>()
        };

        let base_out = layer.feed_from(input.clone());
        // dL/da = 2 (a - y) for the summed quadratic loss above.
        let delta = Matrix::from_data(vec![
            base_out.iter().zip(target.iter()).map(|(a, y)| 2.0 * (a - y)).collect()
        ]);
        let inputs = Matrix::from_data(vec![input.clone()]);
        let (w_grad, _) = layer.compute_gradients(delta, &inputs);

        let h = 1e-6;
        let analytic = w_grad.data[0][1];
        layer.weights.data[0][1] += h;
        let up = loss(&mut layer);
        layer.weights.data[0][1] -= 2.0 * h;
        let down = loss(&mut layer);
        let numeric = (up - down) / (2.0 * h);

        assert!((analytic - numeric).abs() < 1e-6);
    }

    #[test]
    fn apply_gradients_moves_against_gradient() {
        let mut layer = fixed_layer();
        let before = layer.weights.data[0][0];
        let w_grad = Matrix::from_data(vec![vec![1.0, 0.0], vec![0.0, 0.0]]);
        let b_grad = Matrix::zeros(1, 2);
        layer.apply_gradients(w_grad, b_grad, 0.5);
        assert!((layer.weights.data[0][0] - (before - 0.5)).abs() < 1e-12);
    }
}
