//! Graph-file input for the CLI.
//!
//! The input format is a JSON object with an `edges` array and an
//! optional `vertices` array:
//!
//! ```json
//! {
//!   "vertices": ["a", "b", "c"],
//!   "edges": [["a", "b"], ["b", "c"], ["c", "a"]]
//! }
//! ```
//!
//! Listing a vertex is only required when it is isolated; edge endpoints
//! are inserted on first appearance. Insertion order — `vertices` first,
//! then endpoints in edge order — fixes the enumeration order of every
//! downstream result.

use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use cyclefind_core::{DiGraph, UnGraph};

use crate::error::CliError;

/// A parsed graph description, direction-agnostic.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphFile {
    /// Vertices to insert before any edge endpoints; optional.
    #[serde(default)]
    pub vertices: Vec<String>,
    /// Edges as `[source, target]` pairs (unordered for undirected use).
    pub edges: Vec<(String, String)>,
}

impl GraphFile {
    /// Builds a directed graph, preserving declaration order.
    pub fn to_digraph(&self) -> DiGraph<String> {
        let mut g = DiGraph::with_capacity(self.vertices.len(), self.edges.len());
        for v in &self.vertices {
            g.add_vertex(v.clone());
        }
        for (s, t) in &self.edges {
            g.add_edge(s.clone(), t.clone());
        }
        g
    }

    /// Builds an undirected graph, preserving declaration order.
    pub fn to_ungraph(&self) -> UnGraph<String> {
        let mut g = UnGraph::with_capacity(self.vertices.len(), self.edges.len());
        for v in &self.vertices {
            g.add_vertex(v.clone());
        }
        for (x, y) in &self.edges {
            g.add_edge(x.clone(), y.clone());
        }
        g
    }
}

/// Reads and parses a graph file from `path`, or from stdin when `path`
/// is `-`.
///
/// # Errors
///
/// [`CliError::ReadError`] when the source cannot be read;
/// [`CliError::InvalidGraphFile`] when it is not valid graph JSON.
pub fn read_graph_file(path: &Path) -> Result<GraphFile, CliError> {
    let (label, text) = if path == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| CliError::ReadError {
                path: PathBuf::from("-"),
                detail: e.to_string(),
            })?;
        ("<stdin>".to_owned(), buf)
    } else {
        let text = std::fs::read_to_string(path).map_err(|e| CliError::ReadError {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        (path.display().to_string(), text)
    };

    serde_json::from_str(&text).map_err(|e| CliError::InvalidGraphFile {
        source: label,
        detail: e.to_string(),
    })
}
