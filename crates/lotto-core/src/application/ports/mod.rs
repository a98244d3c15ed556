//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `lotto-adapters` implement
//! these.
//!
//! There is a single driven port here: something that can produce a winning
//! set for a draw configuration. Random drawing, preset numbers, and any
//! future source (a remote draw feed, a replayed round) all hide behind it.

use crate::domain::{DrawConfig, NumberSet};
use crate::error::LottoResult;

/// Port for producing a winning number set.
///
/// Implemented by:
/// - `lotto_adapters::RngGenerator` (uniform random draw, production)
/// - `lotto_adapters::FixedGenerator` (preset numbers, demos and tests)
///
/// ## Contract
///
/// A returned set satisfies every invariant of the supplied config: exactly
/// `config.count()` values, all distinct, all within `config.min()..=
/// config.max()`. Implementations take `&mut self` so stateful sources
/// (seeded RNGs) can advance between calls.
#[cfg_attr(test, mockall::automock)]
pub trait NumberGenerator: Send {
    /// Produce one winning set for the given configuration.
    fn generate(&mut self, config: &DrawConfig) -> LottoResult<NumberSet>;
}
