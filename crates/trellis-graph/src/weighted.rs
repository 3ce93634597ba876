//! Weighted vertex arena with parallel-edge support.
//!
//! Every vertex maps each adjacent vertex to the list of weights recorded for that ordered pair.
//! Weights within one list are distinct and finite; the list is never left empty (removing the
//! last weight drops the adjacency entry).

use crate::{EdgeOptions, VertexId, Weight};
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

type EdgeMap<W> = IndexMap<VertexId, Vec<W>, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct WeightedVertex<T, W> {
    value: T,
    edges: EdgeMap<W>,
}

impl<T, W> WeightedVertex<T, W>
where
    W: Weight,
{
    fn new(value: T) -> Self {
        Self {
            value,
            edges: EdgeMap::default(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// `(adjacent vertex, weights)` pairs in insertion order.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = (VertexId, &[W])> + '_ {
        self.edges.iter().map(|(&to, ws)| (to, ws.as_slice()))
    }

    /// True if at least one weight is recorded for `to`.
    pub fn has_edge(&self, to: VertexId) -> bool {
        self.edges.contains_key(&to)
    }

    pub fn weights(&self, to: VertexId) -> Option<&[W]> {
        self.edges.get(&to).map(Vec::as_slice)
    }

    /// Cheapest finite weight among the parallel edges to `to`.
    pub fn min_weight(&self, to: VertexId) -> Option<W> {
        let ws = self.edges.get(&to)?;
        let mut it = ws.iter().copied().filter(Weight::is_finite);
        let first = it.next()?;
        Some(it.fold(first, |acc, w| if w < acc { w } else { acc }))
    }

    /// Number of distinct adjacent vertices.
    pub fn degree(&self) -> usize {
        self.edges.len()
    }

    /// Number of recorded edges, counting each parallel weight separately.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// Arena of [`WeightedVertex`] values addressed by [`VertexId`].
#[derive(Debug, Clone)]
pub struct WeightedVertexGraph<T, W> {
    vertices: Vec<WeightedVertex<T, W>>,
}

impl<T, W> Default for WeightedVertexGraph<T, W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W> WeightedVertexGraph<T, W>
where
    W: Weight,
{
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(WeightedVertex::new(value));
        id
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&WeightedVertex<T, W>> {
        self.vertices.get(id.index())
    }

    pub fn get(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(WeightedVertex::value)
    }

    pub fn get_mut(&mut self, id: VertexId) -> Option<&mut T> {
        self.vertices.get_mut(id.index()).map(|v| &mut v.value)
    }

    /// Replaces the value stored in `id`. Edges are left untouched.
    pub fn set(&mut self, id: VertexId, value: T) -> bool {
        match self.get_mut(id) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<T, W> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &WeightedVertex<T, W>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.vertex(id)
            .map(|v| v.edges().map(|(to, _)| to).collect())
            .unwrap_or_default()
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.vertex(from).is_some_and(|v| v.has_edge(to))
    }

    pub fn weights(&self, from: VertexId, to: VertexId) -> Option<&[W]> {
        self.vertex(from)?.weights(to)
    }

    pub fn min_weight(&self, from: VertexId, to: VertexId) -> Option<W> {
        self.vertex(from)?.min_weight(to)
    }

    /// Records `from -> to` with `weight`.
    ///
    /// Returns `false` without mutating anything if the same `(to, weight)` pair is already
    /// recorded, `weight` is not finite, or either endpoint is unknown. A different weight to the
    /// same vertex is a new parallel edge.
    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: W,
        opts: EdgeOptions,
    ) -> bool {
        if !self.contains(to) || !weight.is_finite() {
            return false;
        }
        let Some(vertex) = self.vertices.get_mut(from.index()) else {
            return false;
        };
        let weights = vertex.edges.entry(to).or_default();
        if weights.contains(&weight) {
            return false;
        }
        weights.push(weight);

        if opts.undirected {
            tracing::trace!(%from, %to, ?weight, "mirroring undirected weighted edge");
            let _ = self.add_edge(to, from, weight, EdgeOptions::directed());
        }
        true
    }

    /// Removes the `from -> to` edge carrying `weight`. Other parallel edges are kept.
    pub fn remove_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: W,
        opts: EdgeOptions,
    ) -> bool {
        let Some(vertex) = self.vertices.get_mut(from.index()) else {
            return false;
        };
        let Some(weights) = vertex.edges.get_mut(&to) else {
            return false;
        };
        let Some(pos) = weights.iter().position(|w| *w == weight) else {
            return false;
        };
        weights.remove(pos);
        if weights.is_empty() {
            vertex.edges.shift_remove(&to);
        }

        if opts.undirected {
            tracing::trace!(%from, %to, ?weight, "removing mirrored weighted edge");
            let _ = self.remove_edge(to, from, weight, EdgeOptions::directed());
        }
        true
    }

    /// Drops every parallel edge `from -> old` and records `from -> new` with `weight`.
    ///
    /// Returns `false` without mutating anything if `old` is not adjacent to `from`, `new` is
    /// unknown, or `weight` is not finite. A duplicate `(new, weight)` pair leaves the existing
    /// edge in place and still counts as replaced.
    pub fn set_edge(
        &mut self,
        from: VertexId,
        old: VertexId,
        new: VertexId,
        weight: W,
        opts: EdgeOptions,
    ) -> bool {
        if !self.contains(new) || !weight.is_finite() {
            return false;
        }
        let Some(vertex) = self.vertices.get_mut(from.index()) else {
            return false;
        };
        let Some(removed) = vertex.edges.shift_remove(&old) else {
            return false;
        };
        if opts.undirected {
            for w in removed {
                let _ = self.remove_edge(old, from, w, EdgeOptions::directed());
            }
        }
        let _ = self.add_edge(from, new, weight, opts);
        true
    }

    /// Clears every outgoing edge of `from` and records each `(to, weights)` group.
    ///
    /// Duplicate and non-finite weights inside the input are skipped. With `opts.undirected` the mirrors of the
    /// cleared edges are removed as well.
    pub fn set_edges<I, G>(&mut self, from: VertexId, edges: I, opts: EdgeOptions)
    where
        I: IntoIterator<Item = (VertexId, G)>,
        G: IntoIterator<Item = W>,
    {
        let Some(vertex) = self.vertices.get_mut(from.index()) else {
            return;
        };
        let cleared = std::mem::take(&mut vertex.edges);
        if opts.undirected {
            for (to, weights) in cleared {
                for w in weights {
                    let _ = self.remove_edge(to, from, w, EdgeOptions::directed());
                }
            }
        }
        for (to, weights) in edges {
            for w in weights {
                let _ = self.add_edge(from, to, w, opts);
            }
        }
    }
}
