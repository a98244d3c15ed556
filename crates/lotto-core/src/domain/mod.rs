// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for the lottery game.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! Randomness and I/O are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, terminal, or external calls
//! - **No randomness**: Drawing numbers happens behind a port
//! - **Immutable entities**: All domain objects are Clone + PartialEq
//! - **Rich domain model**: Invariants live in constructors, not services
//!
// Public API - what the world sees
pub mod draw;
pub mod error;
pub mod rank;

// Re-exports for convenience
pub use draw::{
    CLASSIC_MAX_NUMBER, CLASSIC_MIN_NUMBER, CLASSIC_PICK_COUNT, DrawConfig, NumberSet,
};
pub use error::{DomainError, ErrorCategory};
pub use rank::{MIN_WINNING_MATCHES, Rank};
