use serde::Serialize;

use hematite_ml::{ActivationFunction, Network, Sgd, TrainConfig, train_loop};
use hematite_ml::data::digits::three_digit_table;

/// One table entry's activations, as consumed by the 3-D scatter.
#[derive(Serialize)]
struct ActivationRow {
    input: Vec<f64>,
    hidden: Vec<f64>,
    output: Vec<f64>,
    class: usize,
}

fn main() {
    let table = three_digit_table();

    // 3 digit features -> 3 hidden sigmoid units -> 3 one-hot classes.
    let mut network = Network::new(vec![
        (3, 3, ActivationFunction::Sigmoid),
        (3, 3, ActivationFunction::Sigmoid),
    ]);

    let optimizer = Sgd::new(0.001);
    let rounds = 20;
    let steps_per_round = 10_000;

    for round in 1..=rounds {
        let config = TrainConfig::new(steps_per_round, steps_per_round);
        let loss = train_loop(&mut network, &table.inputs, &table.labels, &optimizer, &config);
        println!("step {:>7}: mean loss = {loss:.6}", round * steps_per_round);
    }

    // Argmax accuracy over the whole table.
    let correct = table.inputs.iter().zip(table.labels.iter())
        .filter(|(input, label)| {
            let out = network.forward((*input).clone());
            argmax(&out) == argmax(label)
        })
        .count();
    println!("table accuracy: {}/1000", correct);

    for input in [vec![0.0, 4.0, 2.0], vec![5.0, 0.0, 0.0], vec![9.0, 8.0, 1.0]] {
        let out = network.forward(input.clone());
        println!("{input:?} -> class {} ({out:.3?})", argmax(&out));
    }

    // Dump the activation clouds the way the 3-D scatter wants them: one
    // (x, y, z, class) row per table entry, for inputs and both layers.
    let mut rows: Vec<ActivationRow> = Vec::with_capacity(1000);
    for (i, input) in table.inputs.iter().enumerate() {
        network.forward(input.clone());
        let hidden = network.layers[0].neurons.data[0].clone();
        let output = network.layers[1].neurons.data[0].clone();
        rows.push(ActivationRow {
            input: input.clone(),
            hidden,
            output,
            class: table.labels[i].iter().position(|&v| v == 1.0).unwrap_or(0),
        });
    }
    let json = serde_json::to_string_pretty(&rows).expect("failed to encode activations");
    std::fs::write("activations.json", json).expect("failed to write activations.json");
    println!("wrote activations.json");

    network.save_json("digits_network.json").expect("failed to write digits_network.json");
    println!("wrote digits_network.json");
}


fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0)
}
