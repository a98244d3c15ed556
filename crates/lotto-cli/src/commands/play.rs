//! Implementation of the `lotto play` command.
//!
//! Responsibility: translate CLI arguments into a `DrawConfig`, a generator
//! adapter and a validated pick set, call the core game service, and display
//! the outcome. No game logic lives here.

use tracing::{debug, info, instrument};

use lotto_adapters::{FixedGenerator, RngGenerator};
use lotto_core::{
    application::{GameOutcome, GameService, ports::NumberGenerator},
    domain::NumberSet,
};

use crate::{
    cli::{OutputFormat, PlayArgs, global::GlobalArgs, parse_number_list},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
    prompt,
};

/// Execute the `lotto play` command.
///
/// Dispatch sequence:
/// 1. Resolve the draw shape (flags > config file > classic defaults)
/// 2. Build the generator adapter (`--winning` > `--seed` > entropy)
/// 3. Obtain picks (`--picks`, or the interactive prompt loop)
/// 4. Play the round via `GameService`
/// 5. Render the outcome (human or JSON)
#[instrument(skip_all)]
pub fn execute(
    args: PlayArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Draw shape
    let draw_config = super::resolve_draw_config(&args.shape, &config)?;
    debug!(config = %draw_config, "draw shape resolved");

    // 2. Generator adapter
    let generator: Box<dyn NumberGenerator> = match (&args.winning, args.seed) {
        (Some(raw), _) => {
            let values = parse_number_list(raw)?;
            Box::new(FixedGenerator::new(values, &draw_config).map_err(CliError::Core)?)
        }
        (None, Some(seed)) => Box::new(RngGenerator::seeded(seed)),
        (None, None) => Box::new(RngGenerator::new()),
    };

    // 3. Player picks
    let picks = match &args.picks {
        Some(raw) => {
            let values = parse_number_list(raw)?;
            NumberSet::from_values(&values, &draw_config)
                .map_err(|e| CliError::Core(e.into()))?
        }
        // Bad interactive input re-prompts instead of failing; only I/O
        // trouble escapes the loop.
        None => prompt::collect_picks(&draw_config, &output)?,
    };
    debug!(picks = %picks, "picks accepted");

    // 4. Play
    let mut service = GameService::new(generator);
    let outcome = service.play(&draw_config, picks).map_err(CliError::Core)?;
    info!(matches = outcome.matches, rank = %outcome.rank, "round played");

    // 5. Render
    render(&outcome, &output)
}

/// Render one finished round.
fn render(outcome: &GameOutcome, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        // JSON goes straight to stdout (bypasses OutputManager because it
        // must stay parseable in non-TTY pipes and under --quiet).
        let json = serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".into());
        println!("{json}");
        return Ok(());
    }

    output.header("Round result")?;
    output.print(&format!("  winning : {}", outcome.draw))?;
    output.print(&format!("  picks   : {}", outcome.picks))?;
    output.print(&format!("  matches : {}", outcome.matches))?;

    if outcome.rank.is_winning() {
        output.success(&format!("rank    : {}", outcome.rank))?;
    } else {
        output.print(&format!("  rank    : {}", outcome.rank))?;
    }

    Ok(())
}
