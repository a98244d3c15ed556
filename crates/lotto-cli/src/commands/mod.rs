//! Command handlers.  Each submodule owns one subcommand's `execute`.

pub mod completions;
pub mod draw;
pub mod play;

use lotto_core::domain::DrawConfig;

use crate::{
    cli::ShapeArgs,
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Resolve the round's draw shape: CLI flags win over the config file,
/// which wins over the classic 6-from-45 defaults.
///
/// The combination is validated once here; a degenerate shape (e.g.
/// `--count 50` on a 45-number range) fails fast before any drawing or
/// prompting starts.
pub(crate) fn resolve_draw_config(shape: &ShapeArgs, config: &AppConfig) -> CliResult<DrawConfig> {
    let count = shape.count.unwrap_or(config.game.count);
    let min = shape.min.unwrap_or(config.game.min);
    let max = shape.max.unwrap_or(config.game.max);

    DrawConfig::new(count, min, max).map_err(|e| CliError::Core(e.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_flags() -> ShapeArgs {
        ShapeArgs {
            count: None,
            min: None,
            max: None,
        }
    }

    #[test]
    fn defaults_come_from_the_config_file() {
        let mut config = AppConfig::default();
        config.game.count = 7;
        config.game.max = 49;

        let resolved = resolve_draw_config(&no_flags(), &config).unwrap();
        assert_eq!(resolved.count(), 7);
        assert_eq!(resolved.max(), 49);
    }

    #[test]
    fn flags_override_the_config_file() {
        let shape = ShapeArgs {
            count: Some(5),
            min: None,
            max: Some(50),
        };
        let resolved = resolve_draw_config(&shape, &AppConfig::default()).unwrap();
        assert_eq!(resolved.count(), 5);
        assert_eq!(resolved.min(), 1);
        assert_eq!(resolved.max(), 50);
    }

    #[test]
    fn degenerate_shape_fails_fast() {
        let shape = ShapeArgs {
            count: Some(50),
            min: None,
            max: None,
        };
        let err = resolve_draw_config(&shape, &AppConfig::default()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }
}
