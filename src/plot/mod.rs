pub mod scatter;

pub use scatter::{scatter_plot, density_plot, encode_png, CLASS_COLORS};
