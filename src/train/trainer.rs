use crate::{
    math::matrix::Matrix,
    network::network::Network,
    loss::mse::MseLoss,
    optim::sgd::Sgd,
};

/// One full training step on a single example: forward pass, output error,
/// backward pass, in-place SGD update. Returns the example's loss *before*
/// the update.
pub fn train_example(
    network: &mut Network,
    input: &[f64],
    expected: &[f64],
    optimizer: &Sgd,
) -> f64 {
    // Forward pass
    let output = network.forward(input.to_vec());

    let loss = MseLoss::loss(&output, expected);

    // Initial delta: ∂L/∂a_output (error in output activation space)
    let error = MseLoss::derivative(&output, expected);
    let mut delta = Matrix::from_data(vec![error]);

    // Backward pass
    for i in (0..network.layers.len()).rev() {
        let input_for_layer = if i == 0 {
            Matrix::from_data(vec![input.to_vec()])
        } else {
            network.layers[i - 1].neurons.clone()
        };

        // Borrow-checker ordering: compute gradients → compute next delta → apply step
        let (w_grad, b_grad) = network.layers[i].compute_gradients(delta.clone(), &input_for_layer);

        if i > 0 {
            // Propagate δ_i through weights to get ∂L/∂a_{i-1}
            delta = b_grad.clone() * network.layers[i].weights.transpose();
        }

        optimizer.step(&mut network.layers[i], w_grad, b_grad);
    }

    loss
}

/// One pass over a whole dataset in order; returns the mean loss.
pub fn train_network(
    network: &mut Network,
    inputs: &[Vec<f64>],
    expected_outputs: &[Vec<f64>],
    optimizer: &Sgd,
) -> f64 {
    let mut total_loss = 0.0;

    for (input, expected) in inputs.iter().zip(expected_outputs.iter()) {
        total_loss += train_example(network, input, expected, optimizer);
    }

    total_loss / inputs.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::activation::ActivationFunction;

    fn fixed_network() -> Network {
        let mut network = Network::new(vec![
            (3, 3, ActivationFunction::Sigmoid),
            (3, 3, ActivationFunction::Sigmoid),
        ]);
        // Deterministic parameters so the test cannot hit a zero-gradient fluke.
        network.layers[0].weights = Matrix::from_data(vec![
            vec![0.20, -0.10, 0.05],
            vec![-0.30, 0.15, 0.10],
            vec![0.08, 0.12, -0.20],
        ]);
        network.layers[0].biases = Matrix::from_data(vec![vec![0.01, -0.02, 0.03]]);
        network.layers[1].weights = Matrix::from_data(vec![
            vec![0.10, 0.25, -0.15],
            vec![-0.05, 0.20, 0.30],
            vec![0.12, -0.22, 0.18],
        ]);
        network.layers[1].biases = Matrix::from_data(vec![vec![-0.01, 0.02, 0.00]]);
        network
    }

    #[test]
    fn one_step_decreases_loss_on_that_example() {
        let mut network = fixed_network();
        let input = vec![4.0, 7.0, 1.0];
        let expected = vec![0.0, 1.0, 0.0];
        let optimizer = Sgd::new(0.01);

        let before = train_example(&mut network, &input, &expected, &optimizer);
        let out_after = network.forward(input.clone());
        let after = MseLoss::loss(&out_after, &expected);

        assert!(after < before, "loss did not decrease: {before} -> {after}");
    }

    #[test]
    fn repeated_passes_drive_loss_down() {
        let mut network = fixed_network();
        let inputs = vec![vec![1.0, 0.0, 0.0], vec![0.0, 9.0, 9.0]];
        let labels = vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 1.0]];
        let optimizer = Sgd::new(0.5);

        let first = train_network(&mut network, &inputs, &labels, &optimizer);
        let mut last = first;
        for _ in 0..200 {
            last = train_network(&mut network, &inputs, &labels, &optimizer);
        }
        assert!(last < first, "loss did not improve: {first} -> {last}");
    }
}
