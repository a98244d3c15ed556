//! Uniform random draw backed by `rand`.

use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use lotto_core::{
    application::ports::NumberGenerator,
    domain::{DrawConfig, NumberSet},
    error::LottoResult,
};

/// Draws candidates uniformly from the configured range, rejecting values
/// already held, until the set is full.
///
/// Termination is guaranteed by `DrawConfig`: a config that asks for more
/// unique numbers than the range holds cannot be constructed, so every
/// rejection loop eventually fills up.
///
/// Entropy-seeded by default; [`RngGenerator::seeded`] gives reproducible
/// draws for demos and tests.
pub struct RngGenerator {
    rng: StdRng,
}

impl RngGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A generator whose draws are a pure function of the seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RngGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl NumberGenerator for RngGenerator {
    fn generate(&mut self, config: &DrawConfig) -> LottoResult<NumberSet> {
        let mut numbers: Vec<u32> = Vec::with_capacity(config.count());

        let mut rejected = 0usize;
        while numbers.len() < config.count() {
            let candidate = self.rng.gen_range(config.min()..=config.max());
            if numbers.contains(&candidate) {
                rejected += 1;
                continue;
            }
            numbers.push(candidate);
        }
        debug!(drawn = numbers.len(), rejected, "draw finished");

        // The loop upholds every invariant already; constructing through
        // `from_values` keeps the NumberSet type the single source of truth.
        Ok(NumberSet::from_values(&numbers, config)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_set_satisfies_the_config() {
        let config = DrawConfig::default();
        let mut generator = RngGenerator::seeded(7);

        let set = generator.generate(&config).unwrap();

        assert_eq!(set.len(), config.count());
        // distinct by construction; bounds checked explicitly
        for &n in set.numbers() {
            assert!(config.contains(n), "{n} escaped the range");
        }
    }

    #[test]
    fn invariants_hold_across_configurations() {
        let configs = [
            DrawConfig::new(1, 1, 1).unwrap(),
            DrawConfig::new(3, 5, 9).unwrap(),
            DrawConfig::new(6, 1, 45).unwrap(),
            DrawConfig::new(10, 100, 200).unwrap(),
        ];
        let mut generator = RngGenerator::seeded(42);

        for config in &configs {
            let set = generator.generate(config).unwrap();
            assert_eq!(set.len(), config.count());
            for &n in set.numbers() {
                assert!(config.contains(n));
            }
        }
    }

    #[test]
    fn same_seed_draws_the_same_numbers() {
        let config = DrawConfig::default();
        let a = RngGenerator::seeded(99).generate(&config).unwrap();
        let b = RngGenerator::seeded(99).generate(&config).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn consecutive_draws_advance_the_rng() {
        let config = DrawConfig::default();
        let mut generator = RngGenerator::seeded(1);
        let first = generator.generate(&config).unwrap();
        let second = generator.generate(&config).unwrap();
        // 45-choose-6 outcomes; a seeded collision would be a bug, not luck
        assert_ne!(first, second);
    }

    #[test]
    fn exhausting_the_whole_range_terminates() {
        // count == range size: the draw must produce exactly 1..=6
        let config = DrawConfig::new(6, 1, 6).unwrap();
        let mut generator = RngGenerator::seeded(3);

        let set = generator.generate(&config).unwrap();
        assert_eq!(set.numbers(), &[1, 2, 3, 4, 5, 6]);
    }
}
