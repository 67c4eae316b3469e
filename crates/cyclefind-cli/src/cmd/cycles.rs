//! Implementation of `cyclefind cycles <file>`.
//!
//! Enumerates (or with `--count`, counts) the simple cycles of the
//! directed graph described by the input file, using the algorithm
//! selected with `--algorithm`.

use clap::ValueEnum;

use cyclefind_core::{
    JohnsonSimpleCycles, SimpleCycles, SzwarcfiterLauerSimpleCycles, TarjanSimpleCycles,
    TiernanSimpleCycles,
};

use crate::cmd::{print_count, print_sequences, OutputFormat};
use crate::error::CliError;
use crate::io::GraphFile;

/// Directed cycle algorithm selected with `--algorithm`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Tiernan's path-extension search.
    Tiernan,
    /// Tarjan's 1973 backtracking search.
    Tarjan,
    /// Johnson's blocked-set search (the usual default).
    #[default]
    Johnson,
    /// The Szwarcfiter–Lauer search.
    SzwarcfiterLauer,
}

/// Runs the `cycles` command.
pub fn run(
    file: &GraphFile,
    algorithm: Algorithm,
    count: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let graph = file.to_digraph();
    match algorithm {
        Algorithm::Tiernan => emit(&TiernanSimpleCycles::with_graph(&graph), count, format),
        Algorithm::Tarjan => emit(&TarjanSimpleCycles::with_graph(&graph), count, format),
        Algorithm::Johnson => emit(&JohnsonSimpleCycles::with_graph(&graph), count, format),
        Algorithm::SzwarcfiterLauer => {
            emit(&SzwarcfiterLauerSimpleCycles::with_graph(&graph), count, format)
        }
    }
}

fn emit<F: SimpleCycles<String>>(
    finder: &F,
    count: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    if count {
        let n = finder
            .count_simple_cycles()
            .map_err(|e| CliError::OperationFailed {
                detail: e.to_string(),
            })?;
        print_count(n)
    } else {
        let cycles = finder
            .find_simple_cycles()
            .map_err(|e| CliError::OperationFailed {
                detail: e.to_string(),
            })?;
        print_sequences(&cycles, format, " -> ")
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    fn triangle() -> GraphFile {
        serde_json::from_str(r#"{"edges": [["a", "b"], ["b", "c"], ["c", "a"]]}"#)
            .expect("valid graph JSON")
    }

    /// Every algorithm flag runs cleanly on a small cyclic input.
    #[test]
    fn all_algorithms_run() {
        let file = triangle();
        for algorithm in [
            Algorithm::Tiernan,
            Algorithm::Tarjan,
            Algorithm::Johnson,
            Algorithm::SzwarcfiterLauer,
        ] {
            run(&file, algorithm, false, OutputFormat::Human).expect("command should succeed");
            run(&file, algorithm, true, OutputFormat::Human).expect("count should succeed");
        }
    }

    /// JSON output mode succeeds as well.
    #[test]
    fn json_output_runs() {
        let file = triangle();
        run(&file, Algorithm::Johnson, false, OutputFormat::Json).expect("json should succeed");
    }
}
