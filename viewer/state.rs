use std::sync::{Arc, Mutex, atomic::AtomicBool, mpsc};

use hematite_ml::{Gaussian2d, Network, StepStats};
use hematite_ml::data::blobs::{BlobData, invert_labels, make_blobs};

// ---------------------------------------------------------------------------
// Hyperparams
// ---------------------------------------------------------------------------

/// Digit-trainer hyperparameters, editable from the page.
#[derive(Debug, Clone)]
pub struct Hyperparams {
    pub learning_rate: f64,
    pub iterations: usize,
    pub report_every: usize,
}

impl Default for Hyperparams {
    fn default() -> Self {
        Hyperparams { learning_rate: 0.001, iterations: 200_000, report_every: 2_000 }
    }
}

// ---------------------------------------------------------------------------
// Gaussian scene
// ---------------------------------------------------------------------------

/// The current blob sample and everything estimated from it.
pub struct SceneState {
    pub blobs: BlobData,
    pub fit_cluster1: Gaussian2d,
    pub fit_cluster0: Gaussian2d,
    /// Most recent MAP adaptation of cluster 1, with the tau that produced it.
    pub adapted: Option<(f64, Gaussian2d)>,
}

impl SceneState {
    /// Draws a fresh two-blob sample and fits both clusters by MLE.
    pub fn generate(num_samples: usize, cluster_std: f64) -> SceneState {
        let blobs = make_blobs(num_samples, [cluster_std, cluster_std], (-2.0, 2.0));
        let labels_0 = invert_labels(&blobs.labels);
        let fit_cluster1 = Gaussian2d::fit_mle(&blobs.points, &blobs.labels);
        let fit_cluster0 = Gaussian2d::fit_mle(&blobs.points, &labels_0);
        SceneState { blobs, fit_cluster1, fit_cluster0, adapted: None }
    }
}

// ---------------------------------------------------------------------------
// Training status
// ---------------------------------------------------------------------------

pub enum TrainingStatus {
    /// No training has been started yet.
    Idle,
    /// Training is running in a background thread.
    Running {
        stop_flag: Arc<AtomicBool>,
    },
    /// Training completed (naturally or via Stop).
    /// `was_stopped` is true when Stop was clicked before the step budget ran out.
    Done {
        final_loss: f64,
        elapsed_total_ms: u64,
        was_stopped: bool,
    },
}

// ---------------------------------------------------------------------------
// Main state struct
// ---------------------------------------------------------------------------

pub struct ViewerState {
    /// Blob sample plus fitted/adapted Gaussians.
    pub scene: SceneState,
    /// Digit-trainer hyperparameters.
    pub hyperparams: Hyperparams,
    /// Current training lifecycle state.
    pub training: TrainingStatus,
    /// Receiver side of the trainer's progress channel; drained by the
    /// status endpoint into `step_history`.
    pub stats_rx: Option<mpsc::Receiver<StepStats>>,
    /// All stats received from the most recent training run.
    pub step_history: Vec<StepStats>,
    /// The trained digit network (available after training completes).
    pub trained_network: Option<Network>,
}

impl ViewerState {
    pub fn new() -> Self {
        ViewerState {
            scene: SceneState::generate(100, 0.5),
            hyperparams: Hyperparams::default(),
            training: TrainingStatus::Idle,
            stats_rx: None,
            step_history: Vec::new(),
            trained_network: None,
        }
    }

    /// Moves everything the progress channel has buffered into the history.
    pub fn drain_stats(&mut self) {
        if let Some(rx) = &self.stats_rx {
            self.step_history.extend(rx.try_iter());
        }
    }
}

/// Shared state type — an `Arc<Mutex<ViewerState>>` passed to every handler.
pub type SharedState = Arc<Mutex<ViewerState>>;
