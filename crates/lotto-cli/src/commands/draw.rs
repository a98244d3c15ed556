//! Implementation of the `lotto draw` command.
//!
//! Draws one winning set and prints it, with no picks and no rank. Handy
//! for running an office draw or piping numbers into another tool.

use tracing::{debug, instrument};

use lotto_adapters::RngGenerator;
use lotto_core::application::{GameService, ports::NumberGenerator};

use crate::{
    cli::{DrawArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `lotto draw` command.
#[instrument(skip_all)]
pub fn execute(
    args: DrawArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let draw_config = super::resolve_draw_config(&args.shape, &config)?;
    debug!(config = %draw_config, "draw shape resolved");

    let generator: Box<dyn NumberGenerator> = match args.seed {
        Some(seed) => Box::new(RngGenerator::seeded(seed)),
        None => Box::new(RngGenerator::new()),
    };

    let mut service = GameService::new(generator);
    let set = service.draw(&draw_config).map_err(CliError::Core)?;

    if output.format() == OutputFormat::Json {
        // Parseable even when piped or --quiet.
        let json = serde_json::to_string(&set).unwrap_or_else(|_| "[]".into());
        println!("{json}");
        return Ok(());
    }

    output.print(&set.to_string())?;
    Ok(())
}
