//! The error surface of the cycle-enumeration API.

use std::fmt;

/// Errors that a cycle finder can report.
///
/// There is exactly one failure mode at the public surface: asking a finder
/// to run without a graph bound to it. Everything else the algorithms rely
/// on is an internal invariant whose violation is a programming error, not
/// a recoverable condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleError {
    /// A cycle operation was invoked on a finder with no graph bound.
    ///
    /// Bind one with `set_graph` or construct the finder with `with_graph`.
    MissingGraph,
}

impl fmt::Display for CycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CycleError::MissingGraph => write!(f, "no graph bound to this finder"),
        }
    }
}

impl std::error::Error for CycleError {}
