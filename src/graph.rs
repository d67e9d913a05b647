use petgraph::Undirected;
use petgraph::graph::{Graph, NodeIndex};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The 4-regular multigraph on Z/nZ. Parallel edges and loops are kept.
pub type CayleyGraph = Graph<(), (), Undirected>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("modulus must be at least 1")]
    EmptyModulus,
}

/// Builds the multigraph where every `x` is joined to `x + a` and `x + b` (mod n).
///
/// Exactly `2n` edges are added, without deduplicating parallel edges or loops.
pub fn build(n: usize, a: i64, b: i64) -> Result<CayleyGraph, GraphError> {
    if n == 0 {
        return Err(GraphError::EmptyModulus);
    }
    let a = a.rem_euclid(n as i64) as usize;
    let b = b.rem_euclid(n as i64) as usize;

    let mut graph = CayleyGraph::with_capacity(n, 2 * n);
    let nodes: Vec<NodeIndex> = (0..n).map(|_| graph.add_node(())).collect();
    for x in 0..n {
        graph.add_edge(nodes[x], nodes[(x + a) % n], ());
        graph.add_edge(nodes[x], nodes[(x + b) % n], ());
    }
    Ok(graph)
}

/// Edge-list form of a graph for JSON output (0-indexed vertices).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableGraph {
    pub node_count: usize,
    pub edges: Vec<(usize, usize)>,
}

impl From<&CayleyGraph> for SerializableGraph {
    fn from(graph: &CayleyGraph) -> Self {
        let edges = graph
            .raw_edges()
            .iter()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        SerializableGraph {
            node_count: graph.node_count(),
            edges,
        }
    }
}
