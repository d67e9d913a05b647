//! Downstream analyses of a representative's graph.

use crate::code::BinaryMatrix;
use crate::graph::CayleyGraph;
use petgraph::algo::{connected_components, dinics};
use petgraph::graph::{DiGraph, NodeIndex};

/// Vertex-by-edge incidence matrix over GF(2), columns in edge insertion order.
///
/// A loop contributes a single 1; parallel edges give repeated columns.
pub fn incidence_matrix(graph: &CayleyGraph) -> BinaryMatrix {
    let mut m = BinaryMatrix::zeros(graph.node_count(), graph.edge_count());
    for (col, e) in graph.raw_edges().iter().enumerate() {
        m.set(e.source().index(), col, 1);
        m.set(e.target().index(), col, 1);
    }
    m
}

/// Simple adjacency: loops dropped, parallel edges merged.
fn simple_adjacency(graph: &CayleyGraph) -> Vec<Vec<bool>> {
    let n = graph.node_count();
    let mut adj = vec![vec![false; n]; n];
    for e in graph.raw_edges() {
        let (s, t) = (e.source().index(), e.target().index());
        if s != t {
            adj[s][t] = true;
            adj[t][s] = true;
        }
    }
    adj
}

/// Max number of internally vertex-disjoint s-t paths, for non-adjacent `s`, `t`.
///
/// Each vertex `v` is split into `2v -> 2v+1` with unit capacity (n for `s`
/// and `t`), and the local connectivity is the max flow from `2s+1` to `2t`.
fn local_connectivity(adj: &[Vec<bool>], s: usize, t: usize) -> usize {
    let n = adj.len();
    let mut net = DiGraph::<(), usize>::with_capacity(2 * n, n * n);
    let nodes: Vec<NodeIndex> = (0..2 * n).map(|_| net.add_node(())).collect();
    for v in 0..n {
        let capacity = if v == s || v == t { n } else { 1 };
        net.add_edge(nodes[2 * v], nodes[2 * v + 1], capacity);
        for u in 0..n {
            if adj[v][u] {
                net.add_edge(nodes[2 * v + 1], nodes[2 * u], n);
            }
        }
    }
    dinics(&net, nodes[2 * s + 1], nodes[2 * t]).0
}

/// Vertex connectivity of the underlying simple graph.
///
/// `K_m` has connectivity `m - 1`; a disconnected graph has 0.
pub fn vertex_connectivity(graph: &CayleyGraph) -> usize {
    let n = graph.node_count();
    if n <= 1 || connected_components(graph) > 1 {
        return 0;
    }
    let adj = simple_adjacency(graph);
    let mut best = n - 1;
    for s in 0..n {
        for t in s + 1..n {
            if !adj[s][t] {
                best = best.min(local_connectivity(&adj, s, t));
            }
        }
    }
    best
}
