pub mod blobs;
pub mod digits;

pub use blobs::{BlobData, make_blobs, invert_labels};
pub use digits::{DigitTable, three_digit_table};
