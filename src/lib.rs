//! Enumeration of non-isomorphic (2,2)-Generalized Bicycle code graphs.
//!
//! For a modulus `n`, every offset pair `(a, b)` defines the 4-regular multigraph
//! on Z/nZ joining `x` to `x + a` and `x + b`. [`enumerate::Enumerator`] walks the
//! pairs `1 <= a < b < n`, skips those that a multiplier automorphism already
//! maps to an `a == 1` pair, and keeps one triplet `[n, a, b]` per isomorphism
//! class.
//!
//! ```
//! use gb_graph_enumeration::enumerate::Enumerator;
//! use gb_graph_enumeration::isomorphism::Vf2Oracle;
//!
//! let result = Enumerator::new(Vf2Oracle).enumerate(5).unwrap();
//! let pairs: Vec<_> = result.representatives.iter().map(|t| (t.a, t.b)).collect();
//! assert_eq!(pairs, vec![(1, 2), (1, 4)]);
//! ```

pub mod analysis;
pub mod arith;
pub mod code;
pub mod enumerate;
pub mod graph;
pub mod isomorphism;
pub mod pruning;

pub use enumerate::{Enumeration, EnumerationStats, Enumerator, Triplet};
pub use graph::{CayleyGraph, GraphError, SerializableGraph, build};
pub use isomorphism::{BruteForceOracle, CollapsedGraph, IsomorphismOracle, Vf2Oracle};
