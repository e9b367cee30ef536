use std::sync::mpsc;
use std::sync::{Arc, atomic::AtomicBool};
use crate::train::step_stats::StepStats;

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `iterations`   — total number of single-example training steps
/// - `report_every` — steps per reporting window; stats are emitted and the
///                    stop flag is checked at window boundaries
/// - `progress_tx`  — optional channel sender; one `StepStats` is sent per
///                    completed window.  If the receiver is dropped the loop
///                    terminates early (clean shutdown).
/// - `stop_flag`    — optional atomic flag; when set to `true` from another
///                    thread the loop terminates at the next window boundary.
pub struct TrainConfig {
    pub iterations: usize,
    pub report_every: usize,
    pub progress_tx: Option<mpsc::Sender<StepStats>>,
    pub stop_flag: Option<Arc<AtomicBool>>,
}

impl TrainConfig {
    /// Creates a minimal `TrainConfig` with no progress channel and no stop flag.
    pub fn new(iterations: usize, report_every: usize) -> Self {
        TrainConfig {
            iterations,
            report_every,
            progress_tx: None,
            stop_flag: None,
        }
    }
}
