//! Generator adapters - implementations of the `NumberGenerator` port.

pub mod fixed;
pub mod rng;

pub use fixed::FixedGenerator;
pub use rng::RngGenerator;
