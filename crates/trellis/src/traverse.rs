//! Depth-first and breadth-first traversal.
//!
//! A [`Traversal`] is a lazy iterator over the vertices reachable from a start vertex. Each vertex
//! is yielded at most once, so cyclic graphs are safe. When a target is set the iterator yields
//! the target and stops without expanding it.

use crate::GraphQuery;
use rustc_hash::FxBuildHasher;
use std::collections::VecDeque;
use std::iter::FusedIterator;

type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Stack order; matches a recursive preorder walk.
    #[default]
    DepthFirst,
    /// Queue order; vertices are yielded by increasing hop count.
    BreadthFirst,
}

#[derive(Debug, Clone)]
pub struct TraversalOptions<N> {
    pub start: N,
    pub target: Option<N>,
    pub strategy: Strategy,
}

impl<N> TraversalOptions<N> {
    pub fn new(start: N) -> Self {
        Self {
            start,
            target: None,
            strategy: Strategy::default(),
        }
    }

    pub fn target(mut self, target: N) -> Self {
        self.target = Some(target);
        self
    }

    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalOutcome<N> {
    /// Vertices in visit order. The target, when reached, is the last entry.
    pub visited: Vec<N>,
    pub found: bool,
}

pub struct Traversal<'g, G>
where
    G: GraphQuery + ?Sized,
{
    graph: &'g G,
    strategy: Strategy,
    target: Option<G::Node>,
    frontier: VecDeque<G::Node>,
    seen: HashSet<G::Node>,
    found: bool,
}

impl<'g, G> Traversal<'g, G>
where
    G: GraphQuery + ?Sized,
{
    fn new(graph: &'g G, opts: &TraversalOptions<G::Node>) -> Self {
        let mut seen = HashSet::default();
        if opts.strategy == Strategy::BreadthFirst {
            seen.insert(opts.start.clone());
        }
        Self {
            graph,
            strategy: opts.strategy,
            target: opts.target.clone(),
            frontier: VecDeque::from([opts.start.clone()]),
            seen,
            found: false,
        }
    }

    /// True once the target has been yielded.
    pub fn found(&self) -> bool {
        self.found
    }

    fn pop(&mut self) -> Option<G::Node> {
        match self.strategy {
            Strategy::DepthFirst => self.frontier.pop_back(),
            Strategy::BreadthFirst => self.frontier.pop_front(),
        }
    }

    fn expand(&mut self, node: &G::Node) {
        let neighbors = self.graph.neighbors(node);
        match self.strategy {
            Strategy::DepthFirst => {
                // Reverse so the first neighbor is popped first.
                for n in neighbors.into_iter().rev() {
                    if !self.seen.contains(&n) {
                        self.frontier.push_back(n);
                    }
                }
            }
            Strategy::BreadthFirst => {
                for n in neighbors {
                    if self.seen.insert(n.clone()) {
                        self.frontier.push_back(n);
                    }
                }
            }
        }
    }
}

impl<G> Iterator for Traversal<'_, G>
where
    G: GraphQuery + ?Sized,
{
    type Item = G::Node;

    fn next(&mut self) -> Option<Self::Item> {
        if self.found {
            return None;
        }
        loop {
            let node = self.pop()?;
            if self.strategy == Strategy::DepthFirst && !self.seen.insert(node.clone()) {
                continue;
            }
            if self.target.as_ref() == Some(&node) {
                tracing::trace!("traversal reached target");
                self.found = true;
                self.frontier.clear();
                return Some(node);
            }
            self.expand(&node);
            return Some(node);
        }
    }
}

impl<G> FusedIterator for Traversal<'_, G> where G: GraphQuery + ?Sized {}

/// Starts a lazy traversal. Calling this again with the same options restarts from scratch.
pub fn traverse<'g, G>(graph: &'g G, opts: &TraversalOptions<G::Node>) -> Traversal<'g, G>
where
    G: GraphQuery + ?Sized,
{
    Traversal::new(graph, opts)
}

pub fn depth_first<G>(graph: &G, start: G::Node) -> Traversal<'_, G>
where
    G: GraphQuery + ?Sized,
{
    Traversal::new(graph, &TraversalOptions::new(start))
}

pub fn breadth_first<G>(graph: &G, start: G::Node) -> Traversal<'_, G>
where
    G: GraphQuery + ?Sized,
{
    Traversal::new(
        graph,
        &TraversalOptions::new(start).strategy(Strategy::BreadthFirst),
    )
}

/// Runs a traversal to completion, calling `visit` for every visited vertex (the target
/// included).
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(strategy = ?opts.strategy, has_target = opts.target.is_some())
)]
pub fn traverse_with<G, F>(
    graph: &G,
    opts: &TraversalOptions<G::Node>,
    mut visit: F,
) -> TraversalOutcome<G::Node>
where
    G: GraphQuery + ?Sized,
    F: FnMut(&G::Node),
{
    let mut walk = traverse(graph, opts);
    let mut visited = Vec::new();
    for node in walk.by_ref() {
        visit(&node);
        visited.push(node);
    }
    tracing::debug!(visited = visited.len(), found = walk.found(), "traversal finished");
    TraversalOutcome {
        visited,
        found: walk.found(),
    }
}
