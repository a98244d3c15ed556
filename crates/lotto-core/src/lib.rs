//! Lotto Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the lottery
//! number game, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            lotto-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │             (GameService)               │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │       (Driven: NumberGenerator)         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     lotto-adapters (Infrastructure)     │
//! │      (RngGenerator, FixedGenerator)     │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │     (DrawConfig, NumberSet, Rank)       │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lotto_core::{
//!     application::GameService,
//!     domain::{DrawConfig, NumberSet},
//! };
//!
//! // 1. Pick a configuration and validate the player's numbers
//! let config = DrawConfig::default();
//! let picks = NumberSet::from_values(&[1, 9, 17, 25, 33, 41], &config).unwrap();
//!
//! // 2. Use the application service (with an injected generator adapter)
//! let mut service = GameService::new(generator);
//! let outcome = service.play(&config, picks).unwrap();
//! println!("{}: {} matches", outcome.rank, outcome.matches);
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{GameOutcome, GameService, ports::NumberGenerator};
    pub use crate::domain::{DomainError, DrawConfig, NumberSet, Rank};
    pub use crate::error::{LottoError, LottoResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
