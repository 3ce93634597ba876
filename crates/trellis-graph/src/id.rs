use std::fmt;

/// Stable handle of a vertex inside a [`VertexGraph`](crate::VertexGraph) or
/// [`WeightedVertexGraph`](crate::WeightedVertexGraph).
///
/// Handles are dense indices. Vertices are never removed from an arena, so a handle stays valid
/// for the lifetime of the arena that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}
