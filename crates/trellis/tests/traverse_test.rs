use std::collections::HashMap;
use trellis::graph::{EdgeOptions, VertexGraph};
use trellis::{
    Strategy, TraversalOptions, breadth_first, depth_first, from_fn, traverse, traverse_with,
};

fn adjacency(edges: &[(u32, u32)]) -> HashMap<u32, Vec<u32>> {
    let mut adj: HashMap<u32, Vec<u32>> = HashMap::new();
    for &(u, v) in edges {
        adj.entry(u).or_default().push(v);
    }
    adj
}

#[test]
fn depth_first_follows_preorder() {
    let adj = adjacency(&[(1, 2), (1, 5), (2, 3), (2, 4), (5, 6)]);
    let g = from_fn(|n: &u32| adj.get(n).cloned().unwrap_or_default());

    let order: Vec<u32> = depth_first(&g, 1).collect();
    assert_eq!(order, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn breadth_first_visits_by_hop_count() {
    let adj = adjacency(&[(1, 2), (1, 5), (2, 3), (2, 4), (5, 6)]);
    let g = from_fn(|n: &u32| adj.get(n).cloned().unwrap_or_default());

    let order: Vec<u32> = breadth_first(&g, 1).collect();
    assert_eq!(order, vec![1, 2, 5, 3, 4, 6]);
}

#[test]
fn cycles_are_visited_once() {
    let adj = adjacency(&[(1, 2), (2, 3), (3, 1), (3, 3)]);
    let g = from_fn(|n: &u32| adj.get(n).cloned().unwrap_or_default());

    for strategy in [Strategy::DepthFirst, Strategy::BreadthFirst] {
        let opts = TraversalOptions::new(1).strategy(strategy);
        let order: Vec<u32> = traverse(&g, &opts).collect();
        assert_eq!(order, vec![1, 2, 3], "{strategy:?}");
    }
}

#[test]
fn edgeless_graph_visits_only_the_start() {
    let g = from_fn(|_: &u32| Vec::new());
    for start in 0..5 {
        let out = traverse_with(&g, &TraversalOptions::new(start), |_| {});
        assert_eq!(out.visited, vec![start]);
        assert!(!out.found);
    }
}

#[test]
fn target_stops_before_expanding_it() {
    let adj = adjacency(&[(1, 2), (2, 3), (3, 4), (1, 5)]);
    let g = from_fn(|n: &u32| adj.get(n).cloned().unwrap_or_default());

    let mut seen = Vec::new();
    let opts = TraversalOptions::new(1).target(3);
    let out = traverse_with(&g, &opts, |n| seen.push(*n));

    assert!(out.found);
    assert_eq!(out.visited, vec![1, 2, 3]);
    assert_eq!(seen, out.visited);
}

#[test]
fn breadth_first_target_is_found_at_dequeue_time() {
    let adj = adjacency(&[(1, 2), (1, 3), (2, 4), (3, 5)]);
    let g = from_fn(|n: &u32| adj.get(n).cloned().unwrap_or_default());

    let opts = TraversalOptions::new(1)
        .target(3)
        .strategy(Strategy::BreadthFirst);
    let out = traverse_with(&g, &opts, |_| {});
    assert!(out.found);
    assert_eq!(out.visited, vec![1, 2, 3]);
}

#[test]
fn unreachable_target_exhausts_the_graph() {
    let adj = adjacency(&[(1, 2), (3, 4)]);
    let g = from_fn(|n: &u32| adj.get(n).cloned().unwrap_or_default());

    let out = traverse_with(&g, &TraversalOptions::new(1).target(4), |_| {});
    assert!(!out.found);
    assert_eq!(out.visited, vec![1, 2]);
}

#[test]
fn start_equal_to_target_visits_one_vertex() {
    let adj = adjacency(&[(1, 2)]);
    let g = from_fn(|n: &u32| adj.get(n).cloned().unwrap_or_default());

    let out = traverse_with(&g, &TraversalOptions::new(1).target(1), |_| {});
    assert!(out.found);
    assert_eq!(out.visited, vec![1]);
}

#[test]
fn traversal_is_lazy_and_restartable() {
    let calls = std::cell::Cell::new(0);
    let g = from_fn(|n: &u64| {
        calls.set(calls.get() + 1);
        vec![n + 1]
    });

    let opts = TraversalOptions::new(0);
    let first: Vec<u64> = traverse(&g, &opts).take(4).collect();
    assert_eq!(first, vec![0, 1, 2, 3]);
    assert_eq!(calls.get(), 4);

    let again: Vec<u64> = traverse(&g, &opts).take(2).collect();
    assert_eq!(again, vec![0, 1]);
}

#[test]
fn vertex_graph_can_be_traversed_directly() {
    let mut g: VertexGraph<&str> = VertexGraph::new();
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    let d = g.add_vertex("d");
    g.add_edge(a, b, EdgeOptions::undirected());
    g.add_edge(b, c, EdgeOptions::undirected());

    let values: Vec<&str> = depth_first(&g, c)
        .filter_map(|id| g.get(id).copied())
        .collect();
    assert_eq!(values, vec!["c", "b", "a"]);
    assert_eq!(depth_first(&g, d).count(), 1);
}
