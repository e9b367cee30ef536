pub mod trainer;
pub mod step_stats;
pub mod train_config;
pub mod loop_fn;

pub use trainer::{train_example, train_network};
pub use step_stats::StepStats;
pub use train_config::TrainConfig;
pub use loop_fn::train_loop;
