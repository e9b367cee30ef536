use std::io::{Cursor, Read};
use std::sync::{Arc, atomic::{AtomicBool, Ordering}, mpsc};
use std::time::Instant;

use serde::Serialize;
use tiny_http::{Request, Response};

use hematite_ml::{ActivationFunction, Network, Sgd, StepStats, TrainConfig, train_loop};
use hematite_ml::data::digits::three_digit_table;

use crate::routes::{error_response, json_response, redirect};
use crate::state::{SharedState, TrainingStatus};
use crate::util::query::Params;

// ---------------------------------------------------------------------------
// POST /train/start
// ---------------------------------------------------------------------------

pub fn handle_start(request: &mut Request, state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut body = String::new();
    let _ = request.as_reader().read_to_string(&mut body);
    let params = Params::parse(&body);

    let mut st = state.lock().unwrap();
    if matches!(st.training, TrainingStatus::Running { .. }) {
        return error_response(409, "training is already running");
    }

    let learning_rate = params
        .get_f64("learning_rate", st.hyperparams.learning_rate)
        .clamp(1e-6, 10.0);
    let iterations = params
        .get_usize("iterations", st.hyperparams.iterations)
        .clamp(1, 10_000_000);
    st.hyperparams.learning_rate = learning_rate;
    st.hyperparams.iterations = iterations;
    let report_every = st.hyperparams.report_every.min(iterations);

    let stop_flag = Arc::new(AtomicBool::new(false));
    let (tx, rx) = mpsc::channel();

    st.stats_rx = Some(rx);
    st.step_history.clear();
    st.trained_network = None;
    st.training = TrainingStatus::Running { stop_flag: stop_flag.clone() };
    drop(st);

    let state_clone = state.clone();
    std::thread::spawn(move || {
        let table = three_digit_table();
        let mut network = Network::new(vec![
            (3, 3, ActivationFunction::Sigmoid),
            (3, 3, ActivationFunction::Sigmoid),
        ]);
        let optimizer = Sgd::new(learning_rate);

        let mut config = TrainConfig::new(iterations, report_every);
        config.progress_tx = Some(tx);
        config.stop_flag = Some(stop_flag.clone());

        let t_start = Instant::now();
        let final_loss = train_loop(&mut network, &table.inputs, &table.labels, &optimizer, &config);
        let elapsed_total_ms = t_start.elapsed().as_millis() as u64;

        let mut st = state_clone.lock().unwrap();
        st.trained_network = Some(network);
        st.training = TrainingStatus::Done {
            final_loss,
            elapsed_total_ms,
            was_stopped: stop_flag.load(Ordering::Relaxed),
        };
    });

    redirect("/")
}

// ---------------------------------------------------------------------------
// POST /train/stop
// ---------------------------------------------------------------------------

pub fn handle_stop(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let st = state.lock().unwrap();
    if let TrainingStatus::Running { stop_flag } = &st.training {
        stop_flag.store(true, Ordering::Relaxed);
    }
    drop(st);

    redirect("/")
}

// ---------------------------------------------------------------------------
// GET /api/train/status
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct StatusJson<'a> {
    status: &'static str,
    history: &'a [StepStats],
    final_loss: Option<f64>,
    elapsed_total_ms: Option<u64>,
    was_stopped: Option<bool>,
}

pub fn handle_status(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    st.drain_stats();

    let (status, final_loss, elapsed_total_ms, was_stopped) = match &st.training {
        TrainingStatus::Idle => ("idle", None, None, None),
        TrainingStatus::Running { .. } => ("running", None, None, None),
        TrainingStatus::Done { final_loss, elapsed_total_ms, was_stopped } => {
            ("done", Some(*final_loss), Some(*elapsed_total_ms), Some(*was_stopped))
        }
    };

    let payload = StatusJson {
        status,
        history: &st.step_history,
        final_loss,
        elapsed_total_ms,
        was_stopped,
    };
    match serde_json::to_string(&payload) {
        Ok(json) => json_response(json),
        Err(_) => error_response(500, "failed to encode status"),
    }
}

// ---------------------------------------------------------------------------
// GET /api/activations
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ActivationRow {
    input: Vec<f64>,
    hidden: Vec<f64>,
    output: Vec<f64>,
    class: usize,
}

/// Runs every table entry through the trained network and returns the
/// (input, hidden, output, class) rows the in-browser 3-D scatter consumes.
pub fn handle_activations(state: SharedState) -> Response<Cursor<Vec<u8>>> {
    let mut st = state.lock().unwrap();
    let network = match st.trained_network.as_mut() {
        Some(n) => n,
        None => return error_response(404, "no trained network yet"),
    };

    let table = three_digit_table();
    let mut rows = Vec::with_capacity(table.inputs.len());
    for (input, label) in table.inputs.iter().zip(table.labels.iter()) {
        network.forward(input.clone());
        rows.push(ActivationRow {
            input: input.clone(),
            hidden: network.layers[0].neurons.data[0].clone(),
            output: network.layers[1].neurons.data[0].clone(),
            class: label.iter().position(|&v| v == 1.0).unwrap_or(0),
        });
    }
    drop(st);

    match serde_json::to_string(&rows) {
        Ok(json) => json_response(json),
        Err(_) => error_response(500, "failed to encode activations"),
    }
}
