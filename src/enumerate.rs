//! Representative enumeration: prune, build, deduplicate by isomorphism.

use crate::graph::{CayleyGraph, GraphError, build};
use crate::isomorphism::{IsomorphismOracle, Vf2Oracle};
use crate::pruning::{PruningIndex, candidate_pairs};
use indicatif::{ProgressBar, ProgressStyle};
use serde::{Deserialize, Serialize};

/// Parameter triplet `[n, a, b]` for the weight-2 polynomials `1+X^a`, `1+X^b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet {
    pub n: usize,
    pub a: usize,
    pub b: usize,
}

impl Triplet {
    pub fn graph(&self) -> Result<CayleyGraph, GraphError> {
        build(self.n, self.a as i64, self.b as i64)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Size of the unpruned candidate space, C(n-1, 2).
    pub candidates: usize,
    /// Candidates that survived pruning.
    pub admitted: usize,
    pub isomorphism_tests: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enumeration {
    pub n: usize,
    pub representatives: Vec<Triplet>,
    pub stats: EnumerationStats,
}

/// Accepted triplets and their graphs in prepared form, in acceptance order.
#[derive(Debug)]
struct RepresentativeSet<P> {
    triplets: Vec<Triplet>,
    graphs: Vec<P>,
}

impl<P> Default for RepresentativeSet<P> {
    fn default() -> Self {
        RepresentativeSet {
            triplets: Vec::new(),
            graphs: Vec::new(),
        }
    }
}

impl<P> RepresentativeSet<P> {
    /// Compares `graph` against every representative in acceptance order and
    /// appends it if none matches. Returns the number of oracle calls made.
    fn offer<O: IsomorphismOracle<Prepared = P>>(
        &mut self,
        oracle: &O,
        triplet: Triplet,
        graph: &CayleyGraph,
    ) -> (bool, usize) {
        let prepared = oracle.prepare(graph);
        let mut tests = 0;
        for existing in &self.graphs {
            tests += 1;
            if oracle.is_isomorphic_prepared(&prepared, existing) {
                return (false, tests);
            }
        }
        self.triplets.push(triplet);
        self.graphs.push(prepared);
        (true, tests)
    }
}

/// Drives the search for one modulus at a time.
pub struct Enumerator<O = Vf2Oracle> {
    oracle: O,
    progress: ProgressBar,
}

impl Default for Enumerator<Vf2Oracle> {
    fn default() -> Self {
        Enumerator::new(Vf2Oracle)
    }
}

impl<O: IsomorphismOracle> Enumerator<O> {
    pub fn new(oracle: O) -> Self {
        Enumerator {
            oracle,
            progress: ProgressBar::hidden(),
        }
    }

    /// Report per-candidate progress on `pb` (its length is reset per run).
    pub fn with_progress(mut self, pb: ProgressBar) -> Self {
        pb.set_style(
            ProgressStyle::with_template("[enum ] {pos}/{len} {elapsed_precise} {wide_msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▉▊▋▌▍▎▏  "),
        );
        self.progress = pb;
        self
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Non-isomorphic representatives for modulus `n`, in acceptance order.
    pub fn enumerate(&self, n: usize) -> Result<Enumeration, GraphError> {
        if n == 0 {
            return Err(GraphError::EmptyModulus);
        }
        let index = PruningIndex::new(n);
        let admitted: Vec<(usize, usize)> = candidate_pairs(n)
            .filter(|&(a, b)| index.admits(a, b))
            .collect();

        let mut stats = EnumerationStats {
            candidates: candidate_pairs(n).count(),
            admitted: admitted.len(),
            isomorphism_tests: 0,
        };

        self.progress.reset();
        self.progress.set_length(admitted.len() as u64);
        self.progress.set_message(format!("n = {n}"));

        let mut representatives: RepresentativeSet<O::Prepared> = RepresentativeSet::default();
        for (a, b) in admitted {
            let triplet = Triplet { n, a, b };
            let graph = triplet.graph()?;
            let (_, tests) = representatives.offer(&self.oracle, triplet, &graph);
            stats.isomorphism_tests += tests;
            self.progress.inc(1);
        }
        self
            .progress
            .set_message(format!("n = {n}: {} classes", representatives.triplets.len()));

        Ok(Enumeration {
            n,
            representatives: representatives.triplets,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::isomorphism::{BruteForceOracle, CollapsedGraph};
    use std::cell::Cell;

    /// Counts conversions and comparisons while delegating to VF2.
    #[derive(Default)]
    struct Counting {
        prepares: Cell<usize>,
        calls: Cell<usize>,
    }

    impl IsomorphismOracle for Counting {
        type Prepared = CollapsedGraph;

        fn prepare(&self, graph: &CayleyGraph) -> CollapsedGraph {
            self.prepares.set(self.prepares.get() + 1);
            Vf2Oracle.prepare(graph)
        }

        fn is_isomorphic_prepared(&self, g0: &CollapsedGraph, g1: &CollapsedGraph) -> bool {
            self.calls.set(self.calls.get() + 1);
            Vf2Oracle.is_isomorphic_prepared(g0, g1)
        }
    }

    fn pairs(e: &Enumeration) -> Vec<(usize, usize)> {
        e.representatives.iter().map(|t| (t.a, t.b)).collect()
    }

    #[test]
    fn zero_modulus_fails() {
        assert_eq!(Enumerator::new(Vf2Oracle).enumerate(0), Err(GraphError::EmptyModulus));
    }

    #[test]
    fn tiny_moduli_have_no_candidates() {
        for n in 1..3 {
            let e = Enumerator::new(Vf2Oracle).enumerate(n).unwrap();
            assert!(e.representatives.is_empty());
            assert_eq!(e.stats, EnumerationStats::default());
        }
    }

    #[test]
    fn small_moduli() {
        let enumerator = Enumerator::new(Vf2Oracle);
        assert_eq!(pairs(&enumerator.enumerate(3).unwrap()), vec![(1, 2)]);
        // n = 4: the 4-cycle plus doubled diagonals, and the doubled 4-cycle
        assert_eq!(pairs(&enumerator.enumerate(4).unwrap()), vec![(1, 2), (1, 3)]);
        // n = 5: K5, and the doubled 5-cycle
        assert_eq!(pairs(&enumerator.enumerate(5).unwrap()), vec![(1, 2), (1, 4)]);
    }

    #[test]
    fn stats_match_oracle_calls() {
        let enumerator = Enumerator::new(Counting::default());
        let e = enumerator.enumerate(12).unwrap();
        assert_eq!(e.stats.candidates, 55);
        assert_eq!(e.stats.isomorphism_tests, enumerator.oracle().calls.get());
        assert!(e.stats.admitted <= e.stats.candidates);
    }

    #[test]
    fn acceptance_costs_one_test_per_earlier_representative() {
        let enumerator = Enumerator::new(Counting::default());
        let e = enumerator.enumerate(5).unwrap();
        // (1,2) accepted free, (1,3) rejected after 1, (1,4) accepted after 1
        assert_eq!(e.stats.admitted, 3);
        assert_eq!(e.stats.isomorphism_tests, 2);
    }

    #[test]
    fn oracle_choice_does_not_change_result() {
        for n in 3..9 {
            let vf2 = Enumerator::new(Vf2Oracle).enumerate(n).unwrap();
            let brute = Enumerator::new(BruteForceOracle).enumerate(n).unwrap();
            assert_eq!(vf2, brute);
        }
    }

    #[test]
    fn each_candidate_is_prepared_once() {
        let enumerator = Enumerator::new(Counting::default());
        for n in [6, 12, 15] {
            let before = enumerator.oracle().prepares.get();
            let e = enumerator.enumerate(n).unwrap();
            // Representatives are never re-prepared, however many candidates follow
            assert_eq!(enumerator.oracle().prepares.get() - before, e.stats.admitted);
        }
    }

    #[test]
    fn representative_set_rejects_isomorphic_graph() {
        let mut set = RepresentativeSet::default();
        let t = Triplet { n: 8, a: 1, b: 2 };
        assert_eq!(set.offer(&Vf2Oracle, t, &t.graph().unwrap()), (true, 0));
        let swapped = build(8, 2, 1).unwrap();
        let rejected = set.offer(&Vf2Oracle, Triplet { n: 8, a: 2, b: 1 }, &swapped);
        assert_eq!(rejected, (false, 1));
        assert_eq!(set.triplets, vec![t]);
        assert_eq!(set.graphs.len(), 1);
    }
}
