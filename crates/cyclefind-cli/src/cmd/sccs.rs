//! Implementation of `cyclefind sccs <file>`.
//!
//! Prints the strongly connected components of the directed input graph:
//! non-trivial components by default, every component with `--all`.

use cyclefind_core::{count_all_sccs, count_sccs, find_all_sccs, find_sccs};

use crate::cmd::{print_count, print_sequences, OutputFormat};
use crate::error::CliError;
use crate::io::GraphFile;

/// Runs the `sccs` command.
pub fn run(file: &GraphFile, all: bool, count: bool, format: OutputFormat) -> Result<(), CliError> {
    let graph = file.to_digraph();
    if count {
        let n = if all {
            count_all_sccs(&graph)
        } else {
            count_sccs(&graph)
        };
        print_count(n)
    } else {
        let components = if all {
            find_all_sccs(&graph)
        } else {
            find_sccs(&graph)
        };
        print_sequences(&components, format, ", ")
    }
}
