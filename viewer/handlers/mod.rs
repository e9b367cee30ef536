pub mod scene;
pub mod train;
