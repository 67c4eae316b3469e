//! Subcommand implementations.

pub mod cycle_base;
pub mod cycles;
pub mod sccs;

use std::io::Write;

use clap::ValueEnum;

use crate::error::CliError;

/// Output rendering selected with `--format`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per result, vertices joined by `->`.
    #[default]
    Human,
    /// A JSON array of vertex arrays.
    Json,
}

/// Writes a list of vertex sequences to stdout in the selected format.
///
/// `separator` joins the vertices of one sequence in human mode: `" -> "`
/// for cycles, `", "` for components.
pub(crate) fn print_sequences(
    sequences: &[Vec<String>],
    format: OutputFormat,
    separator: &str,
) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => {
            for sequence in sequences {
                writeln!(out, "{}", sequence.join(separator)).map_err(|e| CliError::WriteError {
                    detail: e.to_string(),
                })?;
            }
        }
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(sequences).map_err(|e| CliError::WriteError {
                    detail: e.to_string(),
                })?;
            writeln!(out, "{json}").map_err(|e| CliError::WriteError {
                detail: e.to_string(),
            })?;
        }
    }
    Ok(())
}

/// Writes a bare count to stdout.
pub(crate) fn print_count(count: usize) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{count}").map_err(|e| CliError::WriteError {
        detail: e.to_string(),
    })
}
