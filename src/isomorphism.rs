//! Isomorphism oracles for labeled multigraphs.
//!
//! The enumerator only needs a yes/no answer, so any exact procedure can be
//! plugged in through [`IsomorphismOracle`]. Each graph is converted once into
//! the oracle's [`IsomorphismOracle::Prepared`] form; representatives keep that
//! form so repeated comparisons against them skip the conversion.

use crate::graph::CayleyGraph;
use petgraph::Undirected;
use petgraph::algo::is_isomorphic_matching;
use petgraph::graph::{Graph, NodeIndex};
use std::collections::BTreeMap;

/// Exact isomorphism decision for two multigraphs.
///
/// Implementations must behave as an equivalence relation and be deterministic.
pub trait IsomorphismOracle {
    /// Per-graph data computed once and reused across comparisons.
    type Prepared;

    fn prepare(&self, graph: &CayleyGraph) -> Self::Prepared;

    fn is_isomorphic_prepared(&self, g0: &Self::Prepared, g1: &Self::Prepared) -> bool;

    fn is_isomorphic(&self, g0: &CayleyGraph, g1: &CayleyGraph) -> bool {
        self.is_isomorphic_prepared(&self.prepare(g0), &self.prepare(g1))
    }
}

impl<O: IsomorphismOracle + ?Sized> IsomorphismOracle for &O {
    type Prepared = O::Prepared;

    fn prepare(&self, graph: &CayleyGraph) -> Self::Prepared {
        (**self).prepare(graph)
    }

    fn is_isomorphic_prepared(&self, g0: &Self::Prepared, g1: &Self::Prepared) -> bool {
        (**self).is_isomorphic_prepared(g0, g1)
    }
}

impl<O: IsomorphismOracle + ?Sized> IsomorphismOracle for Box<O> {
    type Prepared = O::Prepared;

    fn prepare(&self, graph: &CayleyGraph) -> Self::Prepared {
        (**self).prepare(graph)
    }

    fn is_isomorphic_prepared(&self, g0: &Self::Prepared, g1: &Self::Prepared) -> bool {
        (**self).is_isomorphic_prepared(g0, g1)
    }
}

/// Simple graph view: node weight = loop count, edge weight = multiplicity.
type WeightedGraph = Graph<usize, usize, Undirected>;

fn collapse(graph: &CayleyGraph) -> WeightedGraph {
    let n = graph.node_count();
    let mut loops = vec![0usize; n];
    let mut multiplicity: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for e in graph.raw_edges() {
        let (s, t) = (e.source().index(), e.target().index());
        if s == t {
            loops[s] += 1;
        } else {
            *multiplicity.entry((s.min(t), s.max(t))).or_default() += 1;
        }
    }

    let mut simple = WeightedGraph::with_capacity(n, multiplicity.len());
    let nodes: Vec<NodeIndex> = loops.iter().map(|&l| simple.add_node(l)).collect();
    for ((s, t), m) in multiplicity {
        simple.add_edge(nodes[s], nodes[t], m);
    }
    simple
}

/// Cheap invariants; unequal invariants mean non-isomorphic.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Invariants {
    node_count: usize,
    edge_count: usize,
    loops: Vec<usize>,
    multiplicities: Vec<usize>,
    degrees: Vec<usize>,
}

impl Invariants {
    fn of(graph: &WeightedGraph) -> Self {
        let mut loops: Vec<usize> = graph.node_weights().copied().collect();
        let mut multiplicities: Vec<usize> = graph.edge_weights().copied().collect();
        // Loops count twice towards the degree
        let mut degrees: Vec<usize> = graph.node_weights().map(|&l| 2 * l).collect();
        for e in graph.raw_edges() {
            degrees[e.source().index()] += e.weight;
            degrees[e.target().index()] += e.weight;
        }
        loops.sort_unstable();
        multiplicities.sort_unstable();
        degrees.sort_unstable();
        Invariants {
            node_count: graph.node_count(),
            edge_count: loops.iter().sum::<usize>() + multiplicities.iter().sum::<usize>(),
            loops,
            multiplicities,
            degrees,
        }
    }
}

/// A multigraph collapsed to a weighted simple graph, with its invariants.
#[derive(Debug, Clone)]
pub struct CollapsedGraph {
    simple: WeightedGraph,
    invariants: Invariants,
}

impl CollapsedGraph {
    pub fn new(graph: &CayleyGraph) -> Self {
        let simple = collapse(graph);
        let invariants = Invariants::of(&simple);
        CollapsedGraph { simple, invariants }
    }

    /// Vertex count of the original multigraph.
    pub fn node_count(&self) -> usize {
        self.invariants.node_count
    }

    /// Edge count of the original multigraph, loops and parallel edges included.
    pub fn edge_count(&self) -> usize {
        self.invariants.edge_count
    }
}

/// VF2 (petgraph) on the collapsed weighted simple graphs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Vf2Oracle;

impl IsomorphismOracle for Vf2Oracle {
    type Prepared = CollapsedGraph;

    fn prepare(&self, graph: &CayleyGraph) -> CollapsedGraph {
        CollapsedGraph::new(graph)
    }

    fn is_isomorphic_prepared(&self, g0: &CollapsedGraph, g1: &CollapsedGraph) -> bool {
        if g0.invariants != g1.invariants {
            return false;
        }
        is_isomorphic_matching(
            &g0.simple,
            &g1.simple,
            |x: &usize, y: &usize| x == y,
            |x: &usize, y: &usize| x == y,
        )
    }
}

/// Backtracking over all vertex bijections. Exponential; meant for small graphs
/// and for checking other oracles.
#[derive(Debug, Default, Clone, Copy)]
pub struct BruteForceOracle;

/// `m[u][v]` = number of edges between `u` and `v`; loops sit on the diagonal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultiplicityMatrix {
    edge_count: usize,
    m: Vec<Vec<usize>>,
}

impl MultiplicityMatrix {
    pub fn new(graph: &CayleyGraph) -> Self {
        let n = graph.node_count();
        let mut m = vec![vec![0usize; n]; n];
        for e in graph.raw_edges() {
            let (s, t) = (e.source().index(), e.target().index());
            m[s][t] += 1;
            if s != t {
                m[t][s] += 1;
            }
        }
        MultiplicityMatrix {
            edge_count: graph.edge_count(),
            m,
        }
    }

    pub fn node_count(&self) -> usize {
        self.m.len()
    }
}

fn extend_mapping(
    m0: &[Vec<usize>],
    m1: &[Vec<usize>],
    mapping: &mut Vec<usize>,
    used: &mut [bool],
) -> bool {
    let i = mapping.len();
    if i == m0.len() {
        return true;
    }
    for p in 0..m1.len() {
        if used[p] || m0[i][i] != m1[p][p] {
            continue;
        }
        let consistent = mapping.iter().enumerate().all(|(j, &q)| m0[i][j] == m1[p][q]);
        if !consistent {
            continue;
        }
        used[p] = true;
        mapping.push(p);
        if extend_mapping(m0, m1, mapping, used) {
            return true;
        }
        mapping.pop();
        used[p] = false;
    }
    false
}

impl IsomorphismOracle for BruteForceOracle {
    type Prepared = MultiplicityMatrix;

    fn prepare(&self, graph: &CayleyGraph) -> MultiplicityMatrix {
        MultiplicityMatrix::new(graph)
    }

    fn is_isomorphic_prepared(&self, g0: &MultiplicityMatrix, g1: &MultiplicityMatrix) -> bool {
        if g0.node_count() != g1.node_count() || g0.edge_count != g1.edge_count {
            return false;
        }
        let mut mapping = Vec::with_capacity(g0.node_count());
        let mut used = vec![false; g1.node_count()];
        extend_mapping(&g0.m, &g1.m, &mut mapping, &mut used)
    }
}
