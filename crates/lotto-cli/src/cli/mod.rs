//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here — the one
//! exception is [`parse_number_list`], the shared "1,2,3" → `Vec<u32>`
//! parser, which belongs to the argument layer because the list syntax is
//! a CLI concern.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

use crate::error::{CliError, CliResult};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "lotto",
    bin_name = "lotto",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{1f3b1} Lottery numbers: draw, match, rank",
    long_about = "Lotto draws a set of unique numbers, compares it against \
                  your picks, and reports the match count and rank.",
    after_help = "EXAMPLES:\n\
        \x20 lotto play\n\
        \x20 lotto play --picks 1,9,17,25,33,41\n\
        \x20 lotto play --picks 1,2,3,4,5,6 --winning 1,2,3,4,5,6\n\
        \x20 lotto draw --count 6 --min 1 --max 45 --seed 7\n\
        \x20 lotto completions bash > /usr/share/bash-completion/completions/lotto",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Play one round: draw, match against your picks, rank.
    #[command(
        visible_alias = "p",
        about = "Play one round",
        after_help = "EXAMPLES:\n\
            \x20 lotto play                              # prompts for picks\n\
            \x20 lotto play --picks 1,9,17,25,33,41\n\
            \x20 lotto play --picks 1,2,3,4,5,6 --seed 7 # reproducible draw\n\
            \x20 lotto play --picks 1,2,3,4,5,6 --winning 4,5,6,7,8,9"
    )]
    Play(PlayArgs),

    /// Draw a winning set without playing.
    #[command(
        visible_alias = "d",
        about = "Draw a winning set",
        after_help = "EXAMPLES:\n\
            \x20 lotto draw\n\
            \x20 lotto draw --count 7 --min 1 --max 49\n\
            \x20 lotto draw --seed 7 --output-format json"
    )]
    Draw(DrawArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 lotto completions bash > ~/.local/share/bash-completion/completions/lotto\n\
            \x20 lotto completions zsh  > ~/.zfunc/_lotto\n\
            \x20 lotto completions fish > ~/.config/fish/completions/lotto.fish"
    )]
    Completions(CompletionsArgs),
}

// ── play ──────────────────────────────────────────────────────────────────────

/// Arguments for `lotto play`.
#[derive(Debug, Args)]
pub struct PlayArgs {
    /// Your numbers, comma-separated.  Omit to be prompted interactively.
    #[arg(
        short = 'p',
        long = "picks",
        value_name = "LIST",
        help = "Your numbers, comma-separated (e.g. 1,9,17,25,33,41)"
    )]
    pub picks: Option<String>,

    /// Preset winning numbers instead of a random draw.
    #[arg(
        long = "winning",
        value_name = "LIST",
        conflicts_with = "seed",
        help = "Preset winning numbers (skips the random draw)"
    )]
    pub winning: Option<String>,

    /// Seed for a reproducible draw.
    #[arg(long = "seed", value_name = "N", help = "Seed the random draw")]
    pub seed: Option<u64>,

    /// Shared draw-shape flags.
    #[command(flatten)]
    pub shape: ShapeArgs,
}

// ── draw ──────────────────────────────────────────────────────────────────────

/// Arguments for `lotto draw`.
#[derive(Debug, Args)]
pub struct DrawArgs {
    /// Seed for a reproducible draw.
    #[arg(long = "seed", value_name = "N", help = "Seed the random draw")]
    pub seed: Option<u64>,

    /// Shared draw-shape flags.
    #[command(flatten)]
    pub shape: ShapeArgs,
}

/// How many numbers to draw and from which range.  Defaults come from the
/// configuration file, falling back to the classic 6-from-45 game.
#[derive(Debug, Args)]
pub struct ShapeArgs {
    /// How many numbers per set.
    #[arg(short = 'n', long = "count", value_name = "N", help = "Numbers per set")]
    pub count: Option<usize>,

    /// Smallest drawable number.
    #[arg(long = "min", value_name = "N", help = "Smallest drawable number")]
    pub min: Option<u32>,

    /// Largest drawable number.
    #[arg(long = "max", value_name = "N", help = "Largest drawable number")]
    pub max: Option<u32>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `lotto completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── number-list parsing ───────────────────────────────────────────────────────

/// Parse a comma-separated number list ("1, 9,17") into integers.
///
/// Only the syntax is checked here; count/bounds/uniqueness are the
/// domain's job via `NumberSet::from_values`.
pub fn parse_number_list(raw: &str) -> CliResult<Vec<u32>> {
    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<u32>().map_err(|e| CliError::InvalidInput {
                message: format!("'{part}' is not a number"),
                source: Some(Box::new(e)),
            })
        })
        .collect()
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_play_command() {
        let cli = Cli::parse_from(["lotto", "play", "--picks", "1,2,3,4,5,6", "--seed", "7"]);
        assert!(matches!(cli.command, Commands::Play(_)));
    }

    #[test]
    fn play_alias() {
        let cli = Cli::parse_from(["lotto", "p", "-p", "1,2,3,4,5,6"]);
        if let Commands::Play(args) = cli.command {
            assert_eq!(args.picks.as_deref(), Some("1,2,3,4,5,6"));
        } else {
            panic!("expected Play command");
        }
    }

    #[test]
    fn parse_draw_shape_flags() {
        let cli = Cli::parse_from(["lotto", "draw", "-n", "7", "--min", "1", "--max", "49"]);
        if let Commands::Draw(args) = cli.command {
            assert_eq!(args.shape.count, Some(7));
            assert_eq!(args.shape.min, Some(1));
            assert_eq!(args.shape.max, Some(49));
        } else {
            panic!("expected Draw command");
        }
    }

    #[test]
    fn winning_conflicts_with_seed() {
        let result = Cli::try_parse_from([
            "lotto", "play", "--winning", "1,2,3,4,5,6", "--seed", "7",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["lotto", "--quiet", "--verbose", "draw"]);
        assert!(result.is_err());
    }

    #[test]
    fn number_list_accepts_spaces() {
        assert_eq!(
            parse_number_list("1, 9,17 ,25").unwrap(),
            vec![1, 9, 17, 25]
        );
    }

    #[test]
    fn number_list_rejects_garbage() {
        assert!(parse_number_list("1,two,3").is_err());
        assert!(parse_number_list("").is_err());
        assert!(parse_number_list("1,,3").is_err());
        assert!(parse_number_list("-4,5").is_err());
    }
}
