use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use serde::{Serialize, Deserialize};

#[derive(Serialize, Deserialize)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    pub fn new(layer_specs: Vec<(usize, usize, ActivationFunction)>) -> Network {
        let layers = layer_specs.into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation))
            .collect();
        Network { layers }
    }

    /// Forward pass; stores activations in each layer for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    /// Serializes the network weights to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a network from a JSON file previously written by `save_json`.
    pub fn load_json(path: &str) -> std::io::Result<Network> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_output_stays_in_sigmoid_range() {
        let mut network = Network::new(vec![
            (3, 3, ActivationFunction::Sigmoid),
            (3, 3, ActivationFunction::Sigmoid),
        ]);
        for input in [vec![0.0, 0.0, 0.0], vec![9.0, 9.0, 9.0], vec![-40.0, 5.0, 100.0]] {
            let out = network.forward(input);
            assert_eq!(out.len(), 3);
            for v in out {
                assert!(v > 0.0 && v < 1.0);
            }
        }
    }

    #[test]
    fn save_and_load_round_trip_preserves_outputs() {
        let mut network = Network::new(vec![
            (3, 3, ActivationFunction::Sigmoid),
            (3, 3, ActivationFunction::Sigmoid),
        ]);
        let input = vec![1.0, 2.0, 3.0];
        let before = network.forward(input.clone());

        let path = std::env::temp_dir().join("hematite_network_roundtrip.json");
        let path = path.to_str().unwrap().to_owned();
        network.save_json(&path).unwrap();
        let mut restored = Network::load_json(&path).unwrap();
        let after = restored.forward(input);
        let _ = std::fs::remove_file(&path);

        for (a, b) in before.iter().zip(after.iter()) {
            assert!((a - b).abs() < 1e-12);
        }
    }
}
