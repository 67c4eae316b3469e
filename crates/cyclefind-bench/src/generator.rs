//! Seeded random-graph generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cyclefind_core::{DiGraph, UnGraph};

/// Configuration for the random graph generator.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub vertices: usize,
    /// Probability of each ordered (directed) or unordered (undirected)
    /// vertex pair being an edge.
    pub edge_probability: f64,
    /// Probability of each vertex carrying a self-loop.
    pub self_loop_probability: f64,
}

/// Predefined size tiers for benchmarking.
///
/// Edge probabilities shrink with the vertex count to keep the expected
/// out-degree — and with it the cycle population — roughly constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 64 vertices, sparse.
    Small,
    /// 256 vertices, sparse.
    Medium,
    /// 1024 vertices, sparse.
    Large,
}

impl SizeTier {
    /// Returns the `GeneratorConfig` for this tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let vertices = match self {
            SizeTier::Small => 64,
            SizeTier::Medium => 256,
            SizeTier::Large => 1024,
        };
        GeneratorConfig {
            seed,
            vertices,
            edge_probability: 0.9 / vertices as f64,
            self_loop_probability: 0.02,
        }
    }
}

/// Generates a random directed graph with vertices `0..config.vertices`.
pub fn generate_digraph(config: &GeneratorConfig) -> DiGraph<u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.vertices;
    let mut g = DiGraph::with_capacity(n, (n as f64 * n as f64 * config.edge_probability) as usize);
    for v in 0..n as u32 {
        g.add_vertex(v);
    }
    for s in 0..n as u32 {
        for t in 0..n as u32 {
            let p = if s == t {
                config.self_loop_probability
            } else {
                config.edge_probability
            };
            if rng.gen_bool(p) {
                g.add_edge(s, t);
            }
        }
    }
    g
}

/// Generates a random undirected graph with vertices `0..config.vertices`.
pub fn generate_ungraph(config: &GeneratorConfig) -> UnGraph<u32> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.vertices;
    let mut g = UnGraph::with_capacity(n, (n as f64 * n as f64 * config.edge_probability) as usize);
    for v in 0..n as u32 {
        g.add_vertex(v);
    }
    for x in 0..n as u32 {
        for y in x..n as u32 {
            let p = if x == y {
                config.self_loop_probability
            } else {
                config.edge_probability
            };
            if rng.gen_bool(p) {
                g.add_edge(x, y);
            }
        }
    }
    g
}

/// Builds the complete directed graph with self-loops on `n` vertices —
/// the classic dense workload whose simple-cycle counts are known in
/// closed form for small `n`.
pub fn complete_digraph_with_loops(n: u32) -> DiGraph<u32> {
    let mut g = DiGraph::with_capacity(n as usize, (n * n) as usize);
    for v in 0..n {
        g.add_vertex(v);
    }
    for s in 0..n {
        for t in 0..n {
            g.add_edge(s, t);
        }
    }
    g
}
