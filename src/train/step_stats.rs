use serde::{Serialize, Deserialize};

/// Windowed training statistics emitted by `train_loop`.
///
/// When a `progress_tx` channel is configured in `TrainConfig`, the training
/// loop sends one `StepStats` value every `report_every` completed steps.
/// Receivers (e.g. the viewer's status endpoint) use this to drive live loss
/// readouts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepStats {
    /// 1-based step number at the end of this reporting window.
    pub step: usize,
    /// Total steps requested for this run.
    pub total_steps: usize,
    /// Mean loss over the samples drawn in this window.
    pub mean_loss: f64,
    /// Wall-clock duration of this window in milliseconds.
    pub elapsed_ms: u64,
}
