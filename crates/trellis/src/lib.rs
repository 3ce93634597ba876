#![forbid(unsafe_code)]

//! Generic graph search over a neighbor query contract.
//!
//! The engines in this crate never look at a concrete vertex representation. They consume a
//! [`GraphQuery`] (neighbor lookup) or a [`WeightedGraphQuery`] (neighbor and edge cost lookup),
//! implemented for the arenas in [`graph`] and for plain closures via [`from_fn`].

pub mod error;
pub mod query;
pub mod shortest_path;
pub mod topo;
pub mod traverse;

pub use trellis_graph as graph;

pub use error::SortError;
pub use query::{FnGraph, GraphQuery, WeightedFnGraph, WeightedGraphQuery, from_fn};
pub use shortest_path::{
    DistanceMap, ShortestPathOptions, ShortestPaths, a_star, dijkstra, shortest_paths,
};
pub use topo::topological_sort;
pub use traverse::{
    Strategy, Traversal, TraversalOptions, TraversalOutcome, breadth_first, depth_first, traverse,
    traverse_with,
};
