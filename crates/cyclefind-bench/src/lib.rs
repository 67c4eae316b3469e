//! Deterministic graph generation and benchmark utilities for cyclefind.
//!
//! Cycle counts explode combinatorially with edge density, so the
//! generator defaults keep random graphs sparse enough that full
//! enumeration stays tractable; the complete-graph builders provide the
//! classic dense workloads with known cycle counts.

pub mod generator;

pub use generator::{complete_digraph_with_loops, generate_digraph, generate_ungraph, GeneratorConfig, SizeTier};
