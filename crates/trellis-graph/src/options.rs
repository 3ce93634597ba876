//! Edge mutation options.

/// Options accepted by every edge mutation on the vertex arenas.
///
/// `undirected` mirrors the mutation onto the adjacent vertex as an independent directed entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EdgeOptions {
    pub undirected: bool,
}

impl EdgeOptions {
    pub fn directed() -> Self {
        Self { undirected: false }
    }

    pub fn undirected() -> Self {
        Self { undirected: true }
    }
}
