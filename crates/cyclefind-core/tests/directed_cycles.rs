//! Scenario tests for the four directed simple-cycle finders.
//!
//! The finders are exercised side by side: whatever the graph, all four
//! must report the same number of cycles, and `count_simple_cycles` must
//! match `find_simple_cycles().len()`.
#![allow(clippy::expect_used)]

use cyclefind_core::{
    DiGraph, JohnsonSimpleCycles, SimpleCycles, SzwarcfiterLauerSimpleCycles, TarjanSimpleCycles,
    TiernanSimpleCycles,
};

/// Expected simple-cycle counts for the complete directed graph with
/// self-loops on n = 0..=9 vertices.
const COMPLETE_WITH_LOOPS: [usize; 10] = [0, 1, 3, 8, 24, 89, 415, 2372, 16072, 125673];

fn check<F: SimpleCycles<i32>>(finder: &F, expected: usize) {
    let cycles = finder.find_simple_cycles().expect("graph is bound");
    assert_eq!(cycles.len(), expected, "find_simple_cycles length");
    let count = finder.count_simple_cycles().expect("graph is bound");
    assert_eq!(count, expected, "count_simple_cycles");
}

/// Runs every directed finder against `graph` and checks the count.
fn check_all(graph: &DiGraph<i32>, expected: usize) {
    check(&TiernanSimpleCycles::with_graph(graph), expected);
    check(&TarjanSimpleCycles::with_graph(graph), expected);
    check(&JohnsonSimpleCycles::with_graph(graph), expected);
    check(&SzwarcfiterLauerSimpleCycles::with_graph(graph), expected);
}

fn complete_with_loops(n: i32) -> DiGraph<i32> {
    let mut g = DiGraph::with_capacity(n as usize, (n * n) as usize);
    for i in 0..n {
        g.add_vertex(i);
    }
    for i in 0..n {
        for j in 0..n {
            g.add_edge(i, j);
        }
    }
    g
}

/// The 30-vertex graph of the large scenario: every vertex points at
/// {0, 4, 8, …, 28}, overlaid with two chains of reciprocal pairs.
fn large_union_graph() -> DiGraph<i32> {
    let mut g = DiGraph::new();
    for i in 0..30 {
        g.add_vertex(i);
    }
    for i in 0..30 {
        for j in 0..30 {
            if j % 4 == 0 {
                g.add_edge(i, j);
            }
        }
    }
    for (s, t) in [
        (0, 1),
        (1, 0),
        (1, 2),
        (2, 3),
        (3, 2),
        (4, 5),
        (5, 4),
        (5, 6),
        (6, 7),
        (7, 6),
    ] {
        g.add_edge(s, t);
    }
    g
}

/// Incrementally grown 7-vertex graph: self-loops, a reciprocal pair, a
/// long cycle, and an isolated self-loop.
#[test]
fn incremental_seven_vertex_scenario() {
    let mut g: DiGraph<i32> = DiGraph::new();
    for i in 0..7 {
        g.add_vertex(i);
    }

    g.add_edge(0, 0);
    check_all(&g, 1);

    g.add_edge(1, 1);
    check_all(&g, 2);

    g.add_edge(0, 1);
    g.add_edge(1, 0);
    check_all(&g, 3);

    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(3, 0);
    check_all(&g, 4);

    g.add_edge(6, 6);
    check_all(&g, 5);
}

/// Two disjoint reciprocal-pair chains over nine vertices: four cycles.
#[test]
fn two_disjoint_chains() {
    let mut g: DiGraph<i32> = DiGraph::new();
    for i in 0..9 {
        g.add_vertex(i);
    }
    g.add_edge(0, 1);
    g.add_edge(1, 0);
    g.add_edge(1, 2);
    g.add_edge(2, 3);
    g.add_edge(3, 2);
    check_all(&g, 2);

    g.add_edge(4, 5);
    g.add_edge(5, 4);
    g.add_edge(5, 6);
    g.add_edge(6, 7);
    g.add_edge(7, 6);
    check_all(&g, 4);
}

/// Complete directed graphs with self-loops up to eight vertices.
#[test]
fn complete_graphs_up_to_eight() {
    for n in 0..=8 {
        let g = complete_with_loops(n);
        check_all(&g, COMPLETE_WITH_LOOPS[n as usize]);
    }
}

#[test]
fn complete_nine_tiernan() {
    let g = complete_with_loops(9);
    let finder = TiernanSimpleCycles::with_graph(&g);
    assert_eq!(finder.count_simple_cycles().expect("bound"), COMPLETE_WITH_LOOPS[9]);
}

#[test]
fn complete_nine_tarjan() {
    let g = complete_with_loops(9);
    let finder = TarjanSimpleCycles::with_graph(&g);
    assert_eq!(finder.count_simple_cycles().expect("bound"), COMPLETE_WITH_LOOPS[9]);
}

#[test]
fn complete_nine_johnson() {
    let g = complete_with_loops(9);
    let finder = JohnsonSimpleCycles::with_graph(&g);
    assert_eq!(finder.count_simple_cycles().expect("bound"), COMPLETE_WITH_LOOPS[9]);
}

#[test]
fn complete_nine_szwarcfiter_lauer() {
    let g = complete_with_loops(9);
    let finder = SzwarcfiterLauerSimpleCycles::with_graph(&g);
    assert_eq!(finder.count_simple_cycles().expect("bound"), COMPLETE_WITH_LOOPS[9]);
}

#[test]
fn large_union_tarjan() {
    let g = large_union_graph();
    let finder = TarjanSimpleCycles::with_graph(&g);
    assert_eq!(finder.count_simple_cycles().expect("bound"), 203961);
}

#[test]
fn large_union_johnson() {
    let g = large_union_graph();
    let finder = JohnsonSimpleCycles::with_graph(&g);
    assert_eq!(finder.count_simple_cycles().expect("bound"), 203961);
}

#[test]
fn large_union_szwarcfiter_lauer() {
    let g = large_union_graph();
    let finder = SzwarcfiterLauerSimpleCycles::with_graph(&g);
    assert_eq!(finder.count_simple_cycles().expect("bound"), 203961);
}

/// Emitted cycles are simple, closed, and free of duplicate rotations.
#[test]
fn cycles_are_simple_closed_and_distinct() {
    let mut g: DiGraph<i32> = DiGraph::new();
    for i in 0..5 {
        g.add_vertex(i);
    }
    for i in 0..5 {
        for j in 0..5 {
            g.add_edge(i, j);
        }
    }

    let finder = JohnsonSimpleCycles::with_graph(&g);
    let cycles = finder.find_simple_cycles().expect("bound");
    assert_eq!(cycles.len(), COMPLETE_WITH_LOOPS[5]);

    let mut canonical: Vec<Vec<i32>> = Vec::new();
    for cycle in &cycles {
        // Distinct vertices.
        let mut sorted = cycle.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), cycle.len(), "repeated vertex in {cycle:?}");
        // Every consecutive pair and the wrap-around is an edge.
        for i in 0..cycle.len() {
            let a = cycle[i];
            let b = cycle[(i + 1) % cycle.len()];
            assert!(g.contains_edge(&a, &b), "({a}, {b}) missing for {cycle:?}");
        }
        // Canonical rotation: smallest vertex first.
        let min_pos = cycle
            .iter()
            .enumerate()
            .min_by_key(|&(_, v)| v)
            .map(|(i, _)| i)
            .expect("non-empty cycle");
        let mut rotated = cycle[min_pos..].to_vec();
        rotated.extend_from_slice(&cycle[..min_pos]);
        canonical.push(rotated);
    }
    let before = canonical.len();
    canonical.sort();
    canonical.dedup();
    assert_eq!(canonical.len(), before, "duplicate rotation emitted");
}
