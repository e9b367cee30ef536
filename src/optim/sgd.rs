use crate::{math::matrix::Matrix, layers::dense::Layer};

pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update to a layer given its pre-computed gradients.
    pub fn step(&self, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        layer.apply_gradients(weights_grad, biases_grad, self.learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;

    #[test]
    fn step_scales_gradients_by_learning_rate() {
        let mut layer = Layer::new(2, 2, ActivationFunction::Sigmoid);
        layer.weights = Matrix::zeros(2, 2);
        layer.biases = Matrix::zeros(1, 2);

        let optimizer = Sgd::new(0.1);
        let w_grad = Matrix::from_data(vec![vec![1.0, -2.0], vec![0.0, 4.0]]);
        let b_grad = Matrix::from_data(vec![vec![3.0, -1.0]]);
        optimizer.step(&mut layer, w_grad, b_grad);

        assert!((layer.weights.data[0][0] + 0.1).abs() < 1e-12);
        assert!((layer.weights.data[0][1] - 0.2).abs() < 1e-12);
        assert!((layer.weights.data[1][1] + 0.4).abs() < 1e-12);
        assert!((layer.biases.data[0][0] + 0.3).abs() < 1e-12);
        assert!((layer.biases.data[0][1] - 0.1).abs() < 1e-12);
    }
}
