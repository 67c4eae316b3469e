//! The `cyclefind` command-line harness.
//!
//! Thin argument handling over `cyclefind-core`: read a JSON graph file,
//! run the requested cycle or component operation, print the result.

mod cmd;
mod error;
mod io;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use cmd::cycles::Algorithm;
use cmd::OutputFormat;
use error::CliError;

#[derive(Parser)]
#[command(name = "cyclefind", about = "Enumerate simple cycles in graphs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Find the simple cycles of a directed graph
    Cycles {
        /// Graph file to read, or `-` for stdin
        file: PathBuf,
        /// Algorithm to run
        #[arg(long, value_enum, default_value = "johnson")]
        algorithm: Algorithm,
        /// Print only the number of cycles
        #[arg(long)]
        count: bool,
        /// Output rendering
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
    /// Find a fundamental cycle set of an undirected graph
    CycleBase {
        /// Graph file to read, or `-` for stdin
        file: PathBuf,
        /// Use the breadth-first walk instead of the LIFO cycle base
        #[arg(long)]
        simple: bool,
        /// Print only the number of cycles
        #[arg(long)]
        count: bool,
        /// Output rendering
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
    /// Find the strongly connected components of a directed graph
    Sccs {
        /// Graph file to read, or `-` for stdin
        file: PathBuf,
        /// Include trivial single-vertex components
        #[arg(long)]
        all: bool,
        /// Print only the number of components
        #[arg(long)]
        count: bool,
        /// Output rendering
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormat,
    },
    /// Print the cyclefind-core library version
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match dispatch(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err.message());
            ExitCode::from(err.exit_code() as u8)
        }
    }
}

fn dispatch(command: Command) -> Result<(), CliError> {
    match command {
        Command::Cycles {
            file,
            algorithm,
            count,
            format,
        } => {
            let parsed = io::read_graph_file(&file)?;
            cmd::cycles::run(&parsed, algorithm, count, format)
        }
        Command::CycleBase {
            file,
            simple,
            count,
            format,
        } => {
            let parsed = io::read_graph_file(&file)?;
            cmd::cycle_base::run(&parsed, simple, count, format)
        }
        Command::Sccs {
            file,
            all,
            count,
            format,
        } => {
            let parsed = io::read_graph_file(&file)?;
            cmd::sccs::run(&parsed, all, count, format)
        }
        Command::Version => {
            println!("{}", cyclefind_core::version());
            Ok(())
        }
    }
}
