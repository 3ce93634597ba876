//! Unweighted vertex arena.
//!
//! Each vertex stores the set of vertices it points to. An undirected edge is two directed
//! entries that are always added and removed together.

use crate::{EdgeOptions, VertexId};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

type EdgeSet = IndexSet<VertexId, FxBuildHasher>;

#[derive(Debug, Clone)]
pub struct Vertex<T> {
    value: T,
    edges: EdgeSet,
}

impl<T> Vertex<T> {
    fn new(value: T) -> Self {
        Self {
            value,
            edges: EdgeSet::default(),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Adjacent vertices in insertion order. Each call starts a fresh iteration.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = VertexId> + '_ {
        self.edges.iter().copied()
    }

    pub fn has_edge(&self, to: VertexId) -> bool {
        self.edges.contains(&to)
    }

    pub fn degree(&self) -> usize {
        self.edges.len()
    }
}

/// Arena of [`Vertex`] values addressed by [`VertexId`].
#[derive(Debug, Clone)]
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> Default for VertexGraph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> VertexGraph<T> {
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
        self.vertices.push(Vertex::new(value));
        id
    }

    pub fn contains(&self, id: VertexId) -> bool {
        id.index() < self.vertices.len()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    pub fn get(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(Vertex::value)
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

    pub fn vertex_ids(&self) -> impl ExactSizeIterator<Item = VertexId> + use<T> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    pub fn vertices(&self) -> impl Iterator<Item = (VertexId, &Vertex<T>)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(i, v)| (VertexId::new(i), v))
    }

    pub fn neighbors(&self, id: VertexId) -> Vec<VertexId> {
        self.vertex(id)
            .map(|v| v.edges().collect())
            .unwrap_or_default()
    }

    pub fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.vertex(from).is_some_and(|v| v.has_edge(to))
    }

    /// Adds `from -> to`. Returns `false` without mutating anything if the edge already exists
    /// or either endpoint is unknown.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, opts: EdgeOptions) -> bool {
        if !self.contains(to) {
            return false;
        }
        let Some(vertex) = self.vertices.get_mut(from.index()) else {
            return false;
        };
        if !vertex.edges.insert(to) {
            return false;
        }

        if opts.undirected {
            tracing::trace!(%from, %to, "mirroring undirected edge");
            // A self-loop mirror is a duplicate and is absorbed here.
            let _ = self.add_edge(to, from, EdgeOptions::directed());
        }
        true
    }

    /// Removes `from -> to`. Returns `false` if the edge does not exist.
    ///
    /// With `opts.undirected` the reverse edge `to -> from` is removed too, even if it was added
    /// separately as a directed edge.
    pub fn remove_edge(&mut self, from: VertexId, to: VertexId, opts: EdgeOptions) -> bool {
        let Some(vertex) = self.vertices.get_mut(from.index()) else {
            return false;
        };
        if !vertex.edges.shift_remove(&to) {
            return false;
        }

        if opts.undirected {
            tracing::trace!(%from, %to, "removing mirrored edge");
            let _ = self.remove_edge(to, from, EdgeOptions::directed());
        }
        true
    }

    /// Replaces the edge `from -> old` with `from -> new`.
    ///
    /// Returns `false` if `old` is not adjacent to `from` or `new` is not part of this arena.
    pub fn set_edge(
        &mut self,
        from: VertexId,
        old: VertexId,
        new: VertexId,
        opts: EdgeOptions,
    ) -> bool {
        if !self.has_edge(from, old) || !self.contains(new) {
            return false;
        }
        self.remove_edge(from, old, opts);
        self.add_edge(from, new, opts);
        true
    }

    /// Clears every outgoing edge of `from` and inserts `edges`.
    ///
    /// With `opts.undirected` the mirrors of the cleared edges are removed as well, and every new
    /// edge is mirrored.
    pub fn set_edges<I>(&mut self, from: VertexId, edges: I, opts: EdgeOptions)
    where
        I: IntoIterator<Item = VertexId>,
    {
        let Some(vertex) = self.vertices.get_mut(from.index()) else {
            return;
        };
        let cleared = std::mem::take(&mut vertex.edges);
        if opts.undirected {
            for to in cleared {
                let _ = self.remove_edge(to, from, EdgeOptions::directed());
            }
        }
        for to in edges {
            let _ = self.add_edge(from, to, opts);
        }
    }
}
