//! Preset winning numbers.

use lotto_core::{
    application::ports::NumberGenerator,
    domain::{DrawConfig, NumberSet},
    error::LottoResult,
};

/// Always "draws" the same caller-supplied numbers.
///
/// Useful for demos, deterministic CLI runs (`--winning`), and tests.
/// Construction validates the values eagerly so a typo surfaces before the
/// round starts; each `generate` call re-validates against the config it is
/// handed, since a fixed set built for 6-from-45 is not a valid draw for
/// 5-from-50.
pub struct FixedGenerator {
    values: Vec<u32>,
}

impl FixedGenerator {
    pub fn new(values: Vec<u32>, config: &DrawConfig) -> LottoResult<Self> {
        NumberSet::from_values(&values, config)?;
        Ok(Self { values })
    }
}

impl NumberGenerator for FixedGenerator {
    fn generate(&mut self, config: &DrawConfig) -> LottoResult<NumberSet> {
        Ok(NumberSet::from_values(&self.values, config)?)
    }
}
