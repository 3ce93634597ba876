use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortError<N>
where
    N: fmt::Debug,
{
    /// A dependency edge led back into a vertex whose exploration had not finished.
    #[error("graph contains a cycle through {node:?}")]
    CycleDetected { node: N },
}
