//! Game Service - main application orchestrator.
//!
//! This service coordinates one round of the game:
//! 1. Draw the winning set through the generator port
//! 2. Count matches between the draw and the player's set
//! 3. Classify the match count into a rank
//!
//! It implements the driving port (incoming) and uses the driven generator
//! port (outgoing).

use serde::Serialize;
use tracing::{info, instrument};

use crate::{
    application::{ApplicationError, ports::NumberGenerator},
    domain::{DrawConfig, NumberSet, Rank},
    error::LottoResult,
};

/// Everything a presentation layer needs to show one finished round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameOutcome {
    pub draw: NumberSet,
    pub picks: NumberSet,
    pub matches: usize,
    pub rank: Rank,
}

/// Main game service.
///
/// Orchestrates the draw → match → rank pipeline. The service itself holds
/// no game state; the only state is whatever the injected generator carries
/// (e.g. a seeded RNG advancing between rounds).
pub struct GameService {
    generator: Box<dyn NumberGenerator>,
}

impl GameService {
    /// Create a game service with the given generator adapter.
    pub fn new(generator: Box<dyn NumberGenerator>) -> Self {
        Self { generator }
    }

    /// Play one round against the given player picks.
    ///
    /// The picks must have been built under the same configuration; a
    /// mismatched size is structural misuse and fails fast rather than
    /// producing a meaningless match count.
    #[instrument(skip_all, fields(config = %config))]
    pub fn play(&mut self, config: &DrawConfig, picks: NumberSet) -> LottoResult<GameOutcome> {
        if picks.len() != config.count() {
            return Err(ApplicationError::ConfigMismatch {
                expected: config.count(),
                actual: picks.len(),
            }
            .into());
        }

        let draw = self.generator.generate(config)?;
        info!(draw = %draw, "winning numbers drawn");

        let matches = draw.match_count(&picks);
        let rank = Rank::classify(matches, config);
        info!(matches, rank = %rank, "round complete");

        Ok(GameOutcome {
            draw,
            picks,
            matches,
            rank,
        })
    }

    /// Draw a winning set without playing a round.
    ///
    /// Exposed for the standalone `draw` use case; delegates straight to
    /// the generator port.
    #[instrument(skip_all, fields(config = %config))]
    pub fn draw(&mut self, config: &DrawConfig) -> LottoResult<NumberSet> {
        self.generator.generate(config)
    }
}
