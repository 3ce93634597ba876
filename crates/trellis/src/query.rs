//! The graph query contract consumed by every engine.
//!
//! Engines only ask "who follows this node?" and, for weighted search, "what does this step
//! cost?". Anything answering those questions can be searched: the vertex arenas, closures over
//! caller-owned maps, or implicit graphs such as grids.

use std::hash::Hash;
use std::marker::PhantomData;
use trellis_graph::{VertexGraph, VertexId, Weight, WeightedVertexGraph};

pub trait GraphQuery {
    type Node: Clone + Eq + Hash;

    /// Successors of `node`, in the order the engines should explore them.
    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node>;
}

pub trait WeightedGraphQuery: GraphQuery {
    type Weight: Weight;

    /// Cost of stepping from `from` to `to`. `None` means the step is not traversable.
    fn weight(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Weight>;
}

impl<G> GraphQuery for &G
where
    G: GraphQuery + ?Sized,
{
    type Node = G::Node;

    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
        (**self).neighbors(node)
    }
}

impl<G> WeightedGraphQuery for &G
where
    G: WeightedGraphQuery + ?Sized,
{
    type Weight = G::Weight;

    fn weight(&self, from: &Self::Node, to: &Self::Node) -> Option<Self::Weight> {
        (**self).weight(from, to)
    }
}

impl<T> GraphQuery for VertexGraph<T> {
    type Node = VertexId;

    fn neighbors(&self, node: &VertexId) -> Vec<VertexId> {
        VertexGraph::neighbors(self, *node)
    }
}

impl<T, W> GraphQuery for WeightedVertexGraph<T, W>
where
    W: Weight,
{
    type Node = VertexId;

    fn neighbors(&self, node: &VertexId) -> Vec<VertexId> {
        WeightedVertexGraph::neighbors(self, *node)
    }
}

/// Parallel edges collapse to their cheapest weight.
impl<T, W> WeightedGraphQuery for WeightedVertexGraph<T, W>
where
    W: Weight,
{
    type Weight = W;

    fn weight(&self, from: &VertexId, to: &VertexId) -> Option<W> {
        self.min_weight(*from, *to).filter(Weight::is_finite)
    }
}

/// A graph described by a neighbor closure.
pub struct FnGraph<N, F> {
    neighbors: F,
    _node: PhantomData<fn(&N)>,
}

/// Wraps a neighbor lookup closure as a [`GraphQuery`].
///
/// ```
/// use trellis::{GraphQuery, from_fn};
///
/// let g = from_fn(|n: &u32| if *n < 3 { vec![n + 1] } else { vec![] });
/// assert_eq!(g.neighbors(&1), vec![2]);
/// ```
pub fn from_fn<N, F, I>(neighbors: F) -> FnGraph<N, F>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    FnGraph {
        neighbors,
        _node: PhantomData,
    }
}

impl<N, F> FnGraph<N, F> {
    /// Adds an edge cost closure. Non-finite costs mark the step as not traversable.
    pub fn with_weight<W, C>(self, weight: C) -> WeightedFnGraph<N, F, C>
    where
        W: Weight,
        C: Fn(&N, &N) -> W,
    {
        WeightedFnGraph {
            inner: self,
            weight,
        }
    }
}

impl<N, F, I> GraphQuery for FnGraph<N, F>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Node = N;

    fn neighbors(&self, node: &N) -> Vec<N> {
        (self.neighbors)(node).into_iter().collect()
    }
}

/// A graph described by a neighbor closure and an edge cost closure.
pub struct WeightedFnGraph<N, F, C> {
    inner: FnGraph<N, F>,
    weight: C,
}

impl<N, F, C, I> GraphQuery for WeightedFnGraph<N, F, C>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
{
    type Node = N;

    fn neighbors(&self, node: &N) -> Vec<N> {
        self.inner.neighbors(node)
    }
}

impl<N, F, C, I, W> WeightedGraphQuery for WeightedFnGraph<N, F, C>
where
    N: Clone + Eq + Hash,
    F: Fn(&N) -> I,
    I: IntoIterator<Item = N>,
    C: Fn(&N, &N) -> W,
    W: Weight,
{
    type Weight = W;

    fn weight(&self, from: &N, to: &N) -> Option<W> {
        let w = (self.weight)(from, to);
        w.is_finite().then_some(w)
    }
}
