pub mod math;
pub mod gaussian;
pub mod activation;
pub mod layers;
pub mod network;
pub mod loss;
pub mod optim;
pub mod train;
pub mod data;
pub mod plot;

// Convenience re-exports
pub use math::matrix::Matrix;
pub use gaussian::model::Gaussian2d;
pub use activation::activation::ActivationFunction;
pub use layers::dense::Layer;
pub use network::network::Network;
pub use loss::mse::MseLoss;
pub use optim::sgd::Sgd;
pub use train::trainer::{train_example, train_network};
pub use train::loop_fn::train_loop;
pub use train::step_stats::StepStats;
pub use train::train_config::TrainConfig;
