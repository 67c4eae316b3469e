//! Graph containers consumed by the cycle-enumeration algorithms.
//!
//! Both containers wrap a `petgraph` graph with a `HashMap` from the
//! caller's vertex values to node indices, so vertices can be any type
//! with value equality and hashing. Vertices keep their insertion order
//! and every algorithm in this crate iterates out-neighbors (directed) or
//! incident edges (undirected) in edge insertion order — the enumeration
//! order of emitted cycles is a function of those two orders and nothing
//! else.
//!
//! # Multi-edges and self-loops
//!
//! Parallel edges between the same (ordered, for [`DiGraph`]; unordered,
//! for [`UnGraph`]) pair of vertices are silently coalesced: adding an
//! edge that already exists is a no-op. Self-loops are supported and each
//! contributes exactly one length-1 cycle to the enumeration results.
//!
//! # Mutability
//!
//! The containers are build-only: vertices and edges can be added but not
//! removed. A graph must not be mutated while a finder borrows it — the
//! borrow checker enforces exactly that.

pub mod traverse;

use std::collections::HashMap;
use std::hash::Hash;

use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;

// ---------------------------------------------------------------------------
// DiGraph
// ---------------------------------------------------------------------------

/// A directed graph over vertices of type `V`.
///
/// Backed by a [`petgraph::graph::DiGraph`] with unit edge weights plus a
/// vertex → index map for O(1) lookup by value.
#[derive(Debug, Clone)]
pub struct DiGraph<V> {
    graph: petgraph::graph::DiGraph<V, ()>,
    index_of: HashMap<V, NodeIndex>,
}

impl<V> DiGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty directed graph.
    pub fn new() -> Self {
        Self {
            graph: petgraph::graph::DiGraph::new(),
            index_of: HashMap::new(),
        }
    }

    /// Creates an empty directed graph with preallocated capacity.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: petgraph::graph::DiGraph::with_capacity(vertices, edges),
            index_of: HashMap::with_capacity(vertices),
        }
    }

    /// Adds a vertex, or returns the existing one with the same value.
    ///
    /// Insertion order is remembered and is the iteration order of
    /// [`DiGraph::vertices`].
    pub fn add_vertex(&mut self, vertex: V) -> NodeIndex {
        if let Some(&idx) = self.index_of.get(&vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.index_of.insert(vertex, idx);
        idx
    }

    /// Adds the directed edge `source → target`.
    ///
    /// Endpoints not yet present are inserted first (in source, target
    /// order). Adding an edge that already exists is a no-op.
    pub fn add_edge(&mut self, source: V, target: V) {
        let s = self.add_vertex(source);
        let t = self.add_vertex(target);
        self.graph.update_edge(s, t, ());
    }

    /// Returns `true` if a vertex with this value is present.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index_of.contains_key(vertex)
    }

    /// Returns `true` if the directed edge `source → target` is present.
    pub fn contains_edge(&self, source: &V, target: &V) -> bool {
        match (self.index_of.get(source), self.index_of.get(target)) {
            (Some(&s), Some(&t)) => self.graph.find_edge(s, t).is_some(),
            _ => false,
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of (distinct) edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.graph.node_indices().map(move |i| &self.graph[i])
    }

    /// Looks up the [`NodeIndex`] for a vertex value.
    pub fn index_of(&self, vertex: &V) -> Option<NodeIndex> {
        self.index_of.get(vertex).copied()
    }

    /// Returns the vertex value for the given index, or `None` if the
    /// index is out of bounds.
    pub fn vertex(&self, index: NodeIndex) -> Option<&V> {
        self.graph.node_weight(index)
    }

    /// Returns the out-neighbors of `vertex` in edge insertion order, or
    /// an empty vector for an unknown vertex.
    pub fn out_neighbors(&self, vertex: &V) -> Vec<&V> {
        let Some(&idx) = self.index_of.get(vertex) else {
            return Vec::new();
        };
        // petgraph iterates outgoing edges newest-first; reverse to get
        // insertion order.
        let mut out: Vec<&V> = self
            .graph
            .edges(idx)
            .map(|e| &self.graph[e.target()])
            .collect();
        out.reverse();
        out
    }

    /// Returns the vertex stored in insertion slot `slot`.
    ///
    /// Slots are dense (`0..vertex_count()`) because the container never
    /// removes nodes.
    pub(crate) fn vertex_at(&self, slot: usize) -> &V {
        &self.graph[NodeIndex::new(slot)]
    }

    /// Builds per-vertex out-neighbor lists, indexed by insertion slot,
    /// each list in edge insertion order.
    ///
    /// One pass over the edge slab; O(V + E).
    pub(crate) fn succ_lists(&self) -> Vec<Vec<usize>> {
        let mut succ: Vec<Vec<usize>> = vec![Vec::new(); self.graph.node_count()];
        for edge in self.graph.edge_references() {
            succ[edge.source().index()].push(edge.target().index());
        }
        succ
    }
}

impl<V> Default for DiGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// UnGraph
// ---------------------------------------------------------------------------

/// An undirected graph over vertices of type `V`.
///
/// The undirected counterpart of [`DiGraph`]: an edge `{x, y}` is stored
/// once and is incident to both endpoints.
#[derive(Debug, Clone)]
pub struct UnGraph<V> {
    graph: petgraph::graph::UnGraph<V, ()>,
    index_of: HashMap<V, NodeIndex>,
}

impl<V> UnGraph<V>
where
    V: Eq + Hash + Clone,
{
    /// Creates an empty undirected graph.
    pub fn new() -> Self {
        Self {
            graph: petgraph::graph::UnGraph::new_undirected(),
            index_of: HashMap::new(),
        }
    }

    /// Creates an empty undirected graph with preallocated capacity.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            graph: petgraph::graph::UnGraph::with_capacity(vertices, edges),
            index_of: HashMap::with_capacity(vertices),
        }
    }

    /// Adds a vertex, or returns the existing one with the same value.
    pub fn add_vertex(&mut self, vertex: V) -> NodeIndex {
        if let Some(&idx) = self.index_of.get(&vertex) {
            return idx;
        }
        let idx = self.graph.add_node(vertex.clone());
        self.index_of.insert(vertex, idx);
        idx
    }

    /// Adds the undirected edge `{x, y}`.
    ///
    /// Endpoints not yet present are inserted first. Adding an edge that
    /// already exists (in either orientation) is a no-op.
    pub fn add_edge(&mut self, x: V, y: V) {
        let a = self.add_vertex(x);
        let b = self.add_vertex(y);
        self.graph.update_edge(a, b, ());
    }

    /// Returns `true` if a vertex with this value is present.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index_of.contains_key(vertex)
    }

    /// Returns `true` if the edge `{x, y}` is present.
    pub fn contains_edge(&self, x: &V, y: &V) -> bool {
        match (self.index_of.get(x), self.index_of.get(y)) {
            (Some(&a), Some(&b)) => self.graph.find_edge(a, b).is_some(),
            _ => false,
        }
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of (distinct) edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Iterates vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.graph.node_indices().map(move |i| &self.graph[i])
    }

    /// Looks up the [`NodeIndex`] for a vertex value.
    pub fn index_of(&self, vertex: &V) -> Option<NodeIndex> {
        self.index_of.get(vertex).copied()
    }

    /// Returns the vertex value for the given index, or `None` if the
    /// index is out of bounds.
    pub fn vertex(&self, index: NodeIndex) -> Option<&V> {
        self.graph.node_weight(index)
    }

    /// Returns, for each edge incident to `vertex`, the *other* endpoint
    /// (the vertex itself for a self-loop), in edge insertion order.
    pub fn neighbors(&self, vertex: &V) -> Vec<&V> {
        let Some(&idx) = self.index_of.get(vertex) else {
            return Vec::new();
        };
        // One pass over the edge slab; petgraph's per-node edge walk mixes
        // the two adjacency directions, which would scramble insertion
        // order.
        self.graph
            .edge_references()
            .filter_map(|e| {
                if e.source() == idx {
                    Some(&self.graph[e.target()])
                } else if e.target() == idx {
                    Some(&self.graph[e.source()])
                } else {
                    None
                }
            })
            .collect()
    }

    /// Returns the vertex stored in insertion slot `slot`.
    pub(crate) fn vertex_at(&self, slot: usize) -> &V {
        &self.graph[NodeIndex::new(slot)]
    }

    /// Builds per-vertex incidence lists, indexed by insertion slot.
    ///
    /// Each entry is the other endpoint of one incident edge; a self-loop
    /// contributes its vertex exactly once. Lists are in edge insertion
    /// order.
    pub(crate) fn incidence_lists(&self) -> Vec<Vec<usize>> {
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); self.graph.node_count()];
        for edge in self.graph.edge_references() {
            let a = edge.source().index();
            let b = edge.target().index();
            adj[a].push(b);
            if a != b {
                adj[b].push(a);
            }
        }
        adj
    }
}

impl<V> Default for UnGraph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
