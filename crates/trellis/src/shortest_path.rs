//! Dijkstra shortest paths, with an optional A* heuristic.
//!
//! The frontier is a binary heap keyed by `distance + heuristic(node, target)`. Stale heap
//! entries are not removed when a shorter path is found; they are skipped when popped because
//! their vertex is already settled.
//!
//! Edge costs must be non-negative. Negative costs are not detected and give unspecified results.
//! A step whose accumulated cost overflows the weight type is treated as not traversable.

use crate::WeightedGraphQuery;
use rustc_hash::FxBuildHasher;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use trellis_graph::Weight;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;
type HashSet<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// Minimal cost from the start vertex to every settled vertex. Unreached vertices are absent.
pub type DistanceMap<N, W> = HashMap<N, W>;

pub type Heuristic<'a, N, W> = Box<dyn Fn(&N, &N) -> W + 'a>;

pub struct ShortestPathOptions<'a, N, W> {
    pub start: N,
    pub target: Option<N>,
    /// Estimated remaining cost `(node, target)`. Only consulted when a target is set.
    pub heuristic: Option<Heuristic<'a, N, W>>,
}

impl<'a, N, W> ShortestPathOptions<'a, N, W> {
    pub fn new(start: N) -> Self {
        Self {
            start,
            target: None,
            heuristic: None,
        }
    }

    pub fn target(mut self, target: N) -> Self {
        self.target = Some(target);
        self
    }

    pub fn heuristic<H>(mut self, heuristic: H) -> Self
    where
        H: Fn(&N, &N) -> W + 'a,
    {
        self.heuristic = Some(Box::new(heuristic));
        self
    }
}

/// Result of a shortest-path search.
#[derive(Debug, Clone)]
pub struct ShortestPaths<N, W> {
    start: N,
    distances: DistanceMap<N, W>,
    predecessors: HashMap<N, N>,
}

impl<N, W> ShortestPaths<N, W>
where
    N: Clone + Eq + std::hash::Hash,
    W: Weight,
{
    pub fn distances(&self) -> &DistanceMap<N, W> {
        &self.distances
    }

    pub fn into_distances(self) -> DistanceMap<N, W> {
        self.distances
    }

    pub fn distance(&self, node: &N) -> Option<W> {
        self.distances.get(node).copied()
    }

    /// The cheapest path from the start vertex to `node`, both ends included.
    pub fn path_to(&self, node: &N) -> Option<Vec<N>> {
        if !self.distances.contains_key(node) {
            return None;
        }
        let mut path = vec![node.clone()];
        let mut cur = node;
        while *cur != self.start {
            cur = self.predecessors.get(cur)?;
            path.push(cur.clone());
        }
        path.reverse();
        Some(path)
    }
}

struct HeapEntry<N, W> {
    node: N,
    priority: W,
}

impl<N, W: PartialOrd> PartialEq for HeapEntry<N, W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, W: PartialOrd> Eq for HeapEntry<N, W> {}

impl<N, W: PartialOrd> PartialOrd for HeapEntry<N, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, W: PartialOrd> Ord for HeapEntry<N, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: `BinaryHeap` is a max-heap and the cheapest entry must pop first.
        other
            .priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
    }
}

/// Runs the search and keeps predecessor links for path reconstruction.
///
/// `visit` is called once per settled vertex, in settle order. The search stops right after the
/// target is settled.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(has_target = opts.target.is_some(), heuristic = opts.heuristic.is_some())
)]
pub fn shortest_paths<G, F>(
    graph: &G,
    opts: &ShortestPathOptions<'_, G::Node, G::Weight>,
    mut visit: F,
) -> ShortestPaths<G::Node, G::Weight>
where
    G: WeightedGraphQuery + ?Sized,
    F: FnMut(&G::Node),
{
    let zero = <G::Weight as Weight>::zero();
    let estimate = |node: &G::Node| match (&opts.heuristic, &opts.target) {
        (Some(h), Some(target)) => h(node, target),
        _ => zero,
    };

    let mut distances: DistanceMap<G::Node, G::Weight> = HashMap::default();
    let mut predecessors: HashMap<G::Node, G::Node> = HashMap::default();
    let mut settled: HashSet<G::Node> = HashSet::default();
    let mut heap: BinaryHeap<HeapEntry<G::Node, G::Weight>> = BinaryHeap::new();

    distances.insert(opts.start.clone(), zero);
    heap.push(HeapEntry {
        priority: estimate(&opts.start),
        node: opts.start.clone(),
    });

    while let Some(HeapEntry { node, .. }) = heap.pop() {
        if !settled.insert(node.clone()) {
            continue;
        }
        let Some(dist) = distances.get(&node).copied() else {
            debug_assert!(false, "popped a vertex without a tentative distance");
            continue;
        };
        visit(&node);

        if opts.target.as_ref() == Some(&node) {
            tracing::trace!(settled = settled.len(), "target settled");
            break;
        }

        for next in graph.neighbors(&node) {
            if settled.contains(&next) {
                continue;
            }
            let Some(w) = graph.weight(&node, &next) else {
                continue;
            };
            let Some(candidate) = dist.checked_add(w) else {
                tracing::trace!(cost = ?dist, weight = ?w, "path cost overflows, skipping step");
                continue;
            };
            let improves = distances.get(&next).is_none_or(|known| candidate < *known);
            if !improves {
                continue;
            }
            let Some(priority) = candidate.checked_add(estimate(&next)) else {
                tracing::trace!(cost = ?candidate, "priority overflows, skipping step");
                continue;
            };
            distances.insert(next.clone(), candidate);
            predecessors.insert(next.clone(), node.clone());
            heap.push(HeapEntry { priority, node: next });
        }
    }

    // Early exit can leave tentative frontier distances behind; only settled ones are final.
    distances.retain(|n, _| settled.contains(n));
    predecessors.retain(|n, _| settled.contains(n));

    ShortestPaths {
        start: opts.start.clone(),
        distances,
        predecessors,
    }
}

/// Plain Dijkstra: minimal distance from `opts.start` to every settled vertex.
pub fn dijkstra<G>(
    graph: &G,
    opts: &ShortestPathOptions<'_, G::Node, G::Weight>,
) -> DistanceMap<G::Node, G::Weight>
where
    G: WeightedGraphQuery + ?Sized,
{
    shortest_paths(graph, opts, |_| {}).into_distances()
}

/// Goal-directed search from `start` to `target` guided by `heuristic`.
///
/// Returns the cost and the path, or `None` when the target is unreachable. The heuristic must
/// not overestimate the remaining cost.
pub fn a_star<G, H>(
    graph: &G,
    start: G::Node,
    target: G::Node,
    heuristic: H,
) -> Option<(G::Weight, Vec<G::Node>)>
where
    G: WeightedGraphQuery + ?Sized,
    H: Fn(&G::Node, &G::Node) -> G::Weight,
{
    let opts = ShortestPathOptions::new(start)
        .target(target.clone())
        .heuristic(heuristic);
    let result = shortest_paths(graph, &opts, |_| {});
    let cost = result.distance(&target)?;
    let path = result.path_to(&target)?;
    Some((cost, path))
}
