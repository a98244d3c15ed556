//! Infrastructure adapters for the lottery game.
//!
//! This crate implements the ports defined in
//! `lotto_core::application::ports`. It contains the external dependencies
//! (here, the random number generator) so the core stays pure.

pub mod generator;

// Re-export commonly used adapters
pub use generator::{FixedGenerator, RngGenerator};
