//! Topological ordering of a finite vertex set.

use crate::{GraphQuery, SortError};
use rustc_hash::FxBuildHasher;
use std::fmt;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Orders `nodes` so that for every edge `u -> v` reported by `graph`, `u` comes before `v`.
///
/// Vertices are explored depth-first in the order given; the result is the reverse of the
/// order in which their explorations finish. Successors outside `nodes` are explored and emitted
/// as well. An edge back into a vertex whose exploration has not finished yields
/// [`SortError::CycleDetected`].
#[tracing::instrument(level = "debug", skip_all)]
pub fn topological_sort<G, I>(graph: &G, nodes: I) -> Result<Vec<G::Node>, SortError<G::Node>>
where
    G: GraphQuery + ?Sized,
    G::Node: fmt::Debug,
    I: IntoIterator<Item = G::Node>,
{
    let mut marks: HashMap<G::Node, Mark> = HashMap::default();
    let mut finished: Vec<G::Node> = Vec::new();

    for root in nodes {
        if marks.contains_key(&root) {
            continue;
        }
        marks.insert(root.clone(), Mark::InProgress);
        let successors = graph.neighbors(&root).into_iter();
        let mut stack = vec![(root, successors)];

        while let Some((_, successors)) = stack.last_mut() {
            match successors.next() {
                Some(next) => match marks.get(&next) {
                    Some(Mark::InProgress) => {
                        tracing::debug!(node = ?next, "cycle detected");
                        return Err(SortError::CycleDetected { node: next });
                    }
                    Some(Mark::Done) => {}
                    None => {
                        marks.insert(next.clone(), Mark::InProgress);
                        let successors = graph.neighbors(&next).into_iter();
                        stack.push((next, successors));
                    }
                },
                None => {
                    let Some((node, _)) = stack.pop() else {
                        break;
                    };
                    marks.insert(node.clone(), Mark::Done);
                    finished.push(node);
                }
            }
        }
    }

    finished.reverse();
    Ok(finished)
}
