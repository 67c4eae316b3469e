//! Johnson's simple-cycle algorithm (1975).
//!
//! Processes start vertices in increasing number order. Each round runs
//! Tarjan's component scan over the subgraph induced on the vertices not
//! yet processed, picks the component holding the lowest number, and
//! searches it with the blocked / b-set discipline: a vertex stays
//! blocked after a fruitless visit until some descendant produces a
//! cycle, at which point the b-set chains cascade the unblocking. Runs in
//! O((V+E)·(C+1)).

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::cycles::{Numbered, SimpleCycles};
use crate::error::CycleError;
use crate::graph::DiGraph;
use crate::scc::strong_components;

/// Finds all simple cycles of a directed graph with Johnson's algorithm.
///
/// See D. B. Johnson, *Finding all the elementary circuits of a directed
/// graph*, SIAM J. Comput. 4 (1975), 77–84.
#[derive(Debug, Default)]
pub struct JohnsonSimpleCycles<'a, V> {
    graph: Option<&'a DiGraph<V>>,
}

impl<'a, V> JohnsonSimpleCycles<'a, V>
where
    V: Eq + Hash + Clone,
{
    /// Creates a finder with no graph bound.
    pub fn new() -> Self {
        Self { graph: None }
    }

    /// Creates a finder bound to `graph`.
    pub fn with_graph(graph: &'a DiGraph<V>) -> Self {
        Self { graph: Some(graph) }
    }

    /// Binds `graph` as the target of subsequent cycle operations.
    pub fn set_graph(&mut self, graph: &'a DiGraph<V>) {
        self.graph = Some(graph);
    }

    /// Returns the bound graph, if any.
    pub fn graph(&self) -> Option<&'a DiGraph<V>> {
        self.graph
    }

    /// Finds all simple cycles.
    ///
    /// # Errors
    ///
    /// [`CycleError::MissingGraph`] when no graph is bound.
    pub fn find_simple_cycles(&self) -> Result<Vec<Vec<V>>, CycleError> {
        let graph = self.graph.ok_or(CycleError::MissingGraph)?;
        let view = Numbered::new(graph);
        let mut cycles = Vec::new();
        scan(&view, |cycle| cycles.push(view.to_vertices(graph, cycle)));
        Ok(cycles)
    }

    /// Counts the simple cycles without materializing them.
    ///
    /// # Errors
    ///
    /// [`CycleError::MissingGraph`] when no graph is bound.
    pub fn count_simple_cycles(&self) -> Result<usize, CycleError> {
        let graph = self.graph.ok_or(CycleError::MissingGraph)?;
        let view = Numbered::new(graph);
        let mut count = 0;
        scan(&view, |_| count += 1);
        Ok(count)
    }
}

impl<V> SimpleCycles<V> for JohnsonSimpleCycles<'_, V>
where
    V: Eq + Hash + Clone,
{
    fn find_simple_cycles(&self) -> Result<Vec<Vec<V>>, CycleError> {
        JohnsonSimpleCycles::find_simple_cycles(self)
    }

    fn count_simple_cycles(&self) -> Result<usize, CycleError> {
        JohnsonSimpleCycles::count_simple_cycles(self)
    }
}

struct Search<F> {
    blocked: Vec<bool>,
    b_sets: Vec<HashSet<usize>>,
    stack: Vec<usize>,
    emit: F,
}

fn scan<F>(view: &Numbered, emit: F)
where
    F: FnMut(&[usize]),
{
    let n = view.len();
    let mut search = Search {
        blocked: vec![false; n],
        b_sets: vec![HashSet::new(); n],
        stack: Vec::new(),
        emit,
    };

    let mut start_index = 0;
    while start_index < n {
        let Some((start, scg)) = min_scc(view, start_index) else {
            break;
        };
        for &v in scg.keys() {
            search.blocked[v] = false;
            search.b_sets[v].clear();
        }
        search.circuit(start, start, &scg);
        start_index = start + 1;
    }
}

/// Computes the strongly connected components of the subgraph induced on
/// numbers `>= start_index` and returns the component containing the
/// lowest number, as that number plus the component's adjacency (each
/// list filtered to the component, preserving edge insertion order).
///
/// Returns `None` when the induced subgraph has no component with a
/// cycle left.
fn min_scc(view: &Numbered, start_index: usize) -> Option<(usize, HashMap<usize, Vec<usize>>)> {
    let mut components: Vec<Vec<usize>> = Vec::new();
    strong_components(&view.succ, start_index, false, |component| {
        components.push(component.to_vec());
    });

    let component = components
        .into_iter()
        .min_by_key(|component| component.iter().copied().min().unwrap_or(usize::MAX))?;
    let start = component.iter().copied().min()?;

    let members: HashSet<usize> = component.iter().copied().collect();
    let mut scg = HashMap::with_capacity(component.len());
    for &v in &component {
        let succs: Vec<usize> = view.succ[v]
            .iter()
            .copied()
            .filter(|w| members.contains(w))
            .collect();
        scg.insert(v, succs);
    }
    Some((start, scg))
}

impl<F> Search<F>
where
    F: FnMut(&[usize]),
{
    fn circuit(&mut self, start: usize, vertex: usize, scg: &HashMap<usize, Vec<usize>>) -> bool {
        let mut found_cycle = false;
        self.stack.push(vertex);
        self.blocked[vertex] = true;

        if let Some(succs) = scg.get(&vertex) {
            for &w in succs {
                if w == start {
                    found_cycle = true;
                    (self.emit)(&self.stack);
                } else if !self.blocked[w] {
                    found_cycle |= self.circuit(start, w, scg);
                }
            }
            if found_cycle {
                self.unblock(vertex);
            } else {
                for &w in succs {
                    self.b_sets[w].insert(vertex);
                }
            }
        }

        self.stack.pop();
        found_cycle
    }

    fn unblock(&mut self, vertex: usize) {
        self.blocked[vertex] = false;
        // Nothing on the unblock chain re-inserts into this b-set, so it
        // can be drained up front.
        let b_set = std::mem::take(&mut self.b_sets[vertex]);
        for w in b_set {
            if self.blocked[w] {
                self.unblock(w);
            }
        }
    }
}
