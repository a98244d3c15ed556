//! Interactive pick collection.
//!
//! The re-prompt-until-valid loop lives here, not in the core: the core
//! validates once and reports which constraint failed; retrying is CLI
//! policy. Each rejection echoes the domain error and its suggestions so
//! the player knows exactly what to fix.

use lotto_core::domain::{DrawConfig, NumberSet};

use crate::error::CliResult;
use crate::output::OutputManager;

/// Prompt until the entered numbers form a valid set for `config`.
#[cfg(feature = "interactive")]
pub fn collect_picks(config: &DrawConfig, output: &OutputManager) -> CliResult<NumberSet> {
    use dialoguer::Input;

    use crate::cli::parse_number_list;
    use crate::error::CliError;

    let prompt = format!(
        "Enter {} numbers ({}-{}), comma-separated",
        config.count(),
        config.min(),
        config.max()
    );

    loop {
        let raw: String = match Input::new().with_prompt(prompt.as_str()).interact_text() {
            Ok(raw) => raw,
            // Ctrl-D while typing: no round is played.
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => {
                return Err(CliError::Cancelled);
            }
            Err(e) => {
                return Err(CliError::IoError {
                    message: "failed to read picks from the terminal".into(),
                    source: std::io::Error::other(e),
                });
            }
        };

        let values = match parse_number_list(&raw) {
            Ok(values) => values,
            Err(e) => {
                output.warning(&e.to_string())?;
                continue;
            }
        };

        match NumberSet::from_values(&values, config) {
            Ok(set) => return Ok(set),
            Err(e) => {
                output.warning(&e.to_string())?;
                for suggestion in e.suggestions() {
                    output.print(&format!("  {suggestion}"))?;
                }
            }
        }
    }
}

/// Built without `interactive`: prompting is unavailable, `--picks` is the
/// only way in.
#[cfg(not(feature = "interactive"))]
pub fn collect_picks(_config: &DrawConfig, _output: &OutputManager) -> CliResult<NumberSet> {
    Err(crate::error::CliError::FeatureNotAvailable {
        feature: "interactive",
    })
}
