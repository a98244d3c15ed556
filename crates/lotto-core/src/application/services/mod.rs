//! Application services - use case orchestration.

pub mod game_service;

pub use game_service::{GameOutcome, GameService};
