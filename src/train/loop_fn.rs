use std::sync::atomic::Ordering;
use std::time::Instant;

use rand::Rng;

use crate::network::network::Network;
use crate::optim::sgd::Sgd;
use crate::train::step_stats::StepStats;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_example;

/// Trains `network` for `config.iterations` single-example steps, drawing one
/// example uniformly at random from the table on every step, and returns the
/// mean training loss of the **last completed reporting window**.
///
/// There is no convergence check and no early stopping beyond the explicit
/// termination conditions below; the loop runs its fixed step budget.
///
/// # Arguments
/// - `network`   — mutable reference to the network; modified in place
/// - `inputs`    — example table inputs, each a `Vec<f64>` of the input width
/// - `labels`    — corresponding one-hot targets, same length as `inputs`
/// - `optimizer` — SGD optimizer (carries learning rate)
/// - `config`    — step budget, reporting cadence, optional progress channel,
///                 optional stop flag
///
/// # Early termination
/// The loop breaks at a window boundary if:
/// - the `progress_tx` receiver has been dropped, **or**
/// - `config.stop_flag` is set to `true`.
///
/// # Panics
/// Panics if `inputs` is empty, lengths mismatch, or `report_every == 0`.
pub fn train_loop(
    network: &mut Network,
    inputs: &[Vec<f64>],
    labels: &[Vec<f64>],
    optimizer: &Sgd,
    config: &TrainConfig,
) -> f64 {
    assert!(!inputs.is_empty(), "inputs must not be empty");
    assert_eq!(
        inputs.len(),
        labels.len(),
        "inputs and labels must have equal length"
    );
    assert!(config.report_every > 0, "report_every must be at least 1");

    let mut rng = rand::thread_rng();

    let mut window_loss = 0.0;
    let mut window_count = 0usize;
    let mut last_window_mean = 0.0;
    let mut t_window = Instant::now();

    for step in 1..=config.iterations {
        // Sample one example uniformly at random from the table.
        let idx = rng.gen_range(0..inputs.len());
        window_loss += train_example(network, &inputs[idx], &labels[idx], optimizer);
        window_count += 1;

        if step % config.report_every != 0 && step != config.iterations {
            continue;
        }

        // ── Window boundary ────────────────────────────────────────────────
        last_window_mean = window_loss / window_count as f64;
        let elapsed_ms = t_window.elapsed().as_millis() as u64;

        let stats = StepStats {
            step,
            total_steps: config.iterations,
            mean_loss: last_window_mean,
            elapsed_ms,
        };

        if let Some(ref tx) = config.progress_tx {
            // If the receiver has been dropped, stop training.
            if tx.send(stats).is_err() {
                break;
            }
        }

        if let Some(ref flag) = config.stop_flag {
            if flag.load(Ordering::Relaxed) {
                break;
            }
        }

        window_loss = 0.0;
        window_count = 0;
        t_window = Instant::now();
    }

    last_window_mean
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;
    use std::sync::{Arc, atomic::AtomicBool};
    use crate::activation::activation::ActivationFunction;
    use crate::data::digits::three_digit_table;

    #[test]
    fn loop_reports_once_per_window() {
        let table = three_digit_table();
        let mut network = Network::new(vec![(3, 3, ActivationFunction::Sigmoid)]);
        let optimizer = Sgd::new(0.001);

        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(500, 100);
        config.progress_tx = Some(tx);

        train_loop(&mut network, &table.inputs, &table.labels, &optimizer, &config);

        let reports: Vec<StepStats> = rx.try_iter().collect();
        assert_eq!(reports.len(), 5);
        assert_eq!(reports[0].step, 100);
        assert_eq!(reports[4].step, 500);
        for r in &reports {
            assert_eq!(r.total_steps, 500);
            assert!(r.mean_loss.is_finite());
        }
    }

    #[test]
    fn stop_flag_halts_at_window_boundary() {
        let table = three_digit_table();
        let mut network = Network::new(vec![(3, 3, ActivationFunction::Sigmoid)]);
        let optimizer = Sgd::new(0.001);

        let flag = Arc::new(AtomicBool::new(true));
        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(10_000, 10);
        config.stop_flag = Some(flag);
        config.progress_tx = Some(tx);

        train_loop(&mut network, &table.inputs, &table.labels, &optimizer, &config);

        // Flag was already set, so only the first window ran.
        let reports: Vec<StepStats> = rx.try_iter().collect();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].step, 10);
    }

    #[test]
    fn training_improves_over_the_table() {
        let table = three_digit_table();
        let mut network = Network::new(vec![
            (3, 3, ActivationFunction::Sigmoid),
            (3, 3, ActivationFunction::Sigmoid),
        ]);
        let optimizer = Sgd::new(0.05);

        let (tx, rx) = mpsc::channel();
        let mut config = TrainConfig::new(20_000, 1000);
        config.progress_tx = Some(tx);

        train_loop(&mut network, &table.inputs, &table.labels, &optimizer, &config);

        let reports: Vec<StepStats> = rx.try_iter().collect();
        let first = reports.first().unwrap().mean_loss;
        let last = reports.last().unwrap().mean_loss;
        assert!(last < first, "mean loss did not improve: {first} -> {last}");
    }
}
