// This binary crate is intentionally minimal.
// All estimation and network logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example gaussian_adapt
//   cargo run --example digits
fn main() {
    println!("hematite-ml: Gaussian estimation and a from-scratch neural network trainer in Rust.");
    println!("Run `cargo run --example gaussian_adapt` or `cargo run --example digits`.");
    println!("Run `cargo run --bin viewer` for the browser viewer.");
}
