//! Implementation of `cyclefind cycle-base <file>`.
//!
//! Treats the input as an undirected graph and prints a fundamental
//! cycle set: Paton's LIFO walk by default, the breadth-first variant
//! with `--simple`.

use cyclefind_core::{PatonCycleBase, PatonSimpleCycles};

use crate::cmd::{print_count, print_sequences, OutputFormat};
use crate::error::CliError;
use crate::io::GraphFile;

/// Runs the `cycle-base` command.
pub fn run(
    file: &GraphFile,
    simple: bool,
    count: bool,
    format: OutputFormat,
) -> Result<(), CliError> {
    let graph = file.to_ungraph();
    if simple {
        let finder = PatonSimpleCycles::with_graph(&graph);
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
    } else {
        let finder = PatonCycleBase::with_graph(&graph);
        if count {
            let n = finder
                .count_cycle_base()
                .map_err(|e| CliError::OperationFailed {
                    detail: e.to_string(),
                })?;
            print_count(n)
        } else {
            let cycles = finder
                .find_cycle_base()
                .map_err(|e| CliError::OperationFailed {
                    detail: e.to_string(),
                })?;
            print_sequences(&cycles, format, " -> ")
        }
    }
}
