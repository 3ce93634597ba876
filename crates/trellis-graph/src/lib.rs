//! Vertex containers used by `trellis`.
//!
//! Vertices live in an arena and refer to each other through [`VertexId`] handles, so cyclic and
//! mirrored (undirected) adjacency never creates ownership cycles. Two flavors are provided:
//!
//! - [`VertexGraph`]: each vertex holds a set of adjacent vertices.
//! - [`WeightedVertexGraph`]: each vertex maps adjacent vertices to a list of distinct weights,
//!   which allows parallel edges between the same ordered pair.

mod id;
mod options;
pub mod vertex;
mod weight;
pub mod weighted;

pub use id::VertexId;
pub use options::EdgeOptions;
pub use vertex::{Vertex, VertexGraph};
pub use weight::Weight;
pub use weighted::{WeightedVertex, WeightedVertexGraph};
