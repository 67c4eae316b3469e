//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `cyclefind` binary.
//! Every variant maps to a stable exit code via [`CliError::exit_code`]:
//!
//! - Exit code **2** — input failure: the tool could not read or parse
//!   the graph file at all.
//! - Exit code **1** — logical failure: the tool ran but could not
//!   complete the operation (a write failure, or a library error
//!   propagated from `cyclefind-core`).

use std::path::PathBuf;

/// All error conditions the `cyclefind` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    /// A file argument could not be read from the filesystem.
    ReadError {
        /// The path that could not be read (`-` for stdin).
        path: PathBuf,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a valid graph description.
    InvalidGraphFile {
        /// A human-readable label for the source.
        source: String,
        /// The underlying parse error message.
        detail: String,
    },

    /// An I/O error occurred while writing results.
    WriteError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// The cycle library refused the requested operation.
    OperationFailed {
        /// The underlying library error message.
        detail: String,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ReadError { .. } | Self::InvalidGraphFile { .. } => 2,
            Self::WriteError { .. } | Self::OperationFailed { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for stderr.
    pub fn message(&self) -> String {
        match self {
            Self::ReadError { path, detail } => {
                format!("error: cannot read {}: {detail}", path.display())
            }
            Self::InvalidGraphFile { source, detail } => {
                format!("error: invalid graph file {source}: {detail}")
            }
            Self::WriteError { detail } => {
                format!("error: cannot write output: {detail}")
            }
            Self::OperationFailed { detail } => {
                format!("error: {detail}")
            }
        }
    }
}
