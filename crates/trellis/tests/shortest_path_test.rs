use std::collections::{BTreeMap, HashMap, HashSet};
use trellis::graph::{EdgeOptions, WeightedVertexGraph};
use trellis::{
    DistanceMap, GraphQuery, ShortestPathOptions, WeightedGraphQuery, a_star, dijkstra, from_fn,
    shortest_paths,
};

/// Adjacency list with possibly repeated `(neighbor, weight)` entries.
#[derive(Default)]
struct AdjList {
    edges: HashMap<u32, Vec<(u32, u64)>>,
}

impl AdjList {
    fn edge(mut self, from: u32, to: u32, weight: u64) -> Self {
        self.edges.entry(from).or_default().push((to, weight));
        self
    }
}

impl GraphQuery for AdjList {
    type Node = u32;

    fn neighbors(&self, node: &u32) -> Vec<u32> {
        let mut out: Vec<u32> = Vec::new();
        for &(to, _) in self.edges.get(node).into_iter().flatten() {
            if !out.contains(&to) {
                out.push(to);
            }
        }
        out
    }
}

impl WeightedGraphQuery for AdjList {
    type Weight = u64;

    fn weight(&self, from: &u32, to: &u32) -> Option<u64> {
        self.edges
            .get(from)?
            .iter()
            .filter(|(n, _)| n == to)
            .map(|&(_, w)| w)
            .min()
    }
}

fn sorted<W: Copy>(map: &DistanceMap<u32, W>) -> BTreeMap<u32, W> {
    map.iter().map(|(&k, &v)| (k, v)).collect()
}

/// Minimum over every simple path from `start`.
fn brute_force(g: &AdjList, start: u32) -> BTreeMap<u32, u64> {
    fn walk(
        g: &AdjList,
        node: u32,
        cost: u64,
        on_path: &mut HashSet<u32>,
        best: &mut BTreeMap<u32, u64>,
    ) {
        let slot = best.entry(node).or_insert(u64::MAX);
        *slot = (*slot).min(cost);
        for next in g.neighbors(&node) {
            if on_path.contains(&next) {
                continue;
            }
            let Some(w) = g.weight(&node, &next) else {
                continue;
            };
            on_path.insert(next);
            walk(g, next, cost + w, on_path, best);
            on_path.remove(&next);
        }
    }

    let mut best = BTreeMap::new();
    let mut on_path = HashSet::from([start]);
    walk(g, start, 0, &mut on_path, &mut best);
    best
}

struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn below(&mut self, n: u64) -> u64 {
        self.next() % n
    }
}

#[test]
fn dijkstra_follows_the_weighted_chain() {
    let g = AdjList::default().edge(1, 2, 5).edge(2, 3, 2);
    let opts = ShortestPathOptions::new(1).target(3);
    let distances = dijkstra(&g, &opts);
    assert_eq!(
        sorted(&distances),
        BTreeMap::from([(1, 0), (2, 5), (3, 7)])
    );
}

#[test]
fn dijkstra_matches_brute_force_on_random_graphs() {
    let mut rng = Lcg(0x5eed);
    for _ in 0..200 {
        let node_count = 1 + rng.below(7) as u32;
        let edge_count = rng.below(16);
        let mut g = AdjList::default();
        for _ in 0..edge_count {
            let from = rng.below(node_count as u64) as u32;
            let to = rng.below(node_count as u64) as u32;
            let weight = rng.below(20);
            g = g.edge(from, to, weight);
        }
        let start = rng.below(node_count as u64) as u32;

        let got = sorted(&dijkstra(&g, &ShortestPathOptions::new(start)));
        assert_eq!(got, brute_force(&g, start));
        assert_eq!(got.get(&start), Some(&0));
    }
}

#[test]
fn start_without_edges_maps_to_zero_only() {
    let g = from_fn(|_: &u32| Vec::<u32>::new()).with_weight(|_: &u32, _: &u32| f64::INFINITY);
    for start in 1..=20 {
        let distances = dijkstra(&g, &ShortestPathOptions::new(start));
        assert_eq!(distances.len(), 1);
        assert_eq!(distances.get(&start), Some(&0.0));
    }
}

#[test]
fn unreachable_vertices_are_absent() {
    let g = AdjList::default().edge(1, 2, 1).edge(3, 4, 1).edge(4, 1, 1);
    let distances = dijkstra(&g, &ShortestPathOptions::new(1));
    assert!(distances.contains_key(&2));
    assert!(!distances.contains_key(&3));
    assert!(!distances.contains_key(&4));
}

#[test]
fn infinite_weights_are_not_traversable() {
    let g = from_fn(|n: &u8| match n {
        0 => vec![1, 2],
        _ => vec![],
    })
    .with_weight(|_: &u8, to: &u8| if *to == 1 { f64::INFINITY } else { 1.5 });

    let distances = dijkstra(&g, &ShortestPathOptions::new(0));
    assert_eq!(distances.get(&2), Some(&1.5));
    assert!(!distances.contains_key(&1));
}

#[test]
fn early_exit_reports_only_settled_vertices() {
    // 1 -> 2 (1), 1 -> 3 (10), 2 -> 4 (1). The target 2 settles before 3 does.
    let g = AdjList::default().edge(1, 2, 1).edge(1, 3, 10).edge(2, 4, 1);
    let mut visited = Vec::new();
    let result = shortest_paths(&g, &ShortestPathOptions::new(1).target(2), |n| {
        visited.push(*n)
    });

    assert_eq!(visited, vec![1, 2]);
    assert_eq!(
        sorted(result.distances()),
        BTreeMap::from([(1, 0), (2, 1)])
    );
}

#[test]
fn shorter_late_paths_replace_earlier_tentative_distances() {
    let g = AdjList::default()
        .edge(0, 3, 10)
        .edge(0, 1, 1)
        .edge(1, 2, 1)
        .edge(2, 3, 1);
    let result = shortest_paths(&g, &ShortestPathOptions::new(0), |_| {});
    assert_eq!(result.distance(&3), Some(3));
    assert_eq!(result.path_to(&3), Some(vec![0, 1, 2, 3]));
    assert_eq!(result.path_to(&0), Some(vec![0]));
    assert_eq!(result.path_to(&9), None);
}

#[test]
fn parallel_edges_use_the_cheapest_weight() {
    let mut g: WeightedVertexGraph<&str, u32> = WeightedVertexGraph::new();
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    g.add_edge(a, b, 7, EdgeOptions::directed());
    g.add_edge(a, b, 3, EdgeOptions::directed());
    g.add_edge(b, c, 2, EdgeOptions::undirected());

    let distances = dijkstra(&g, &ShortestPathOptions::new(a));
    assert_eq!(distances.get(&b), Some(&3));
    assert_eq!(distances.get(&c), Some(&5));

    let back = dijkstra(&g, &ShortestPathOptions::new(c));
    assert_eq!(back.get(&b), Some(&2));
    assert!(!back.contains_key(&a));
}

#[test]
fn non_finite_parallel_weights_do_not_hide_finite_ones() {
    let mut g: WeightedVertexGraph<(), f64> = WeightedVertexGraph::new();
    let a = g.add_vertex(());
    let b = g.add_vertex(());
    assert!(!g.add_edge(a, b, f64::NAN, EdgeOptions::directed()));
    assert!(g.add_edge(a, b, 1.0, EdgeOptions::directed()));

    let distances = dijkstra(&g, &ShortestPathOptions::new(a));
    assert_eq!(distances.get(&b), Some(&1.0));
}

#[test]
fn overflowing_path_costs_are_not_traversable() {
    let mut g: WeightedVertexGraph<&str, u8> = WeightedVertexGraph::new();
    let a = g.add_vertex("a");
    let b = g.add_vertex("b");
    let c = g.add_vertex("c");
    let d = g.add_vertex("d");
    g.add_edge(a, b, 200, EdgeOptions::directed());
    g.add_edge(b, c, 100, EdgeOptions::directed());
    g.add_edge(b, d, 55, EdgeOptions::directed());

    let distances = dijkstra(&g, &ShortestPathOptions::new(a));
    assert_eq!(distances.get(&b), Some(&200));
    assert_eq!(distances.get(&d), Some(&255));
    assert!(!distances.contains_key(&c));

    let e = g.add_vertex("e");
    g.add_edge(a, e, 50, EdgeOptions::directed());
    g.add_edge(e, c, 60, EdgeOptions::directed());
    let distances = dijkstra(&g, &ShortestPathOptions::new(a));
    assert_eq!(distances.get(&c), Some(&110));
}

#[test]
fn a_star_on_a_grid_agrees_with_dijkstra() {
    const SIZE: i32 = 12;
    let walls: HashSet<(i32, i32)> = (1..SIZE - 1).map(|y| (6, y)).collect();
    let grid = from_fn(|&(x, y): &(i32, i32)| {
        [(1, 0), (-1, 0), (0, 1), (0, -1)]
            .into_iter()
            .map(move |(dx, dy)| (x + dx, y + dy))
            .filter(|&(nx, ny)| (0..SIZE).contains(&nx) && (0..SIZE).contains(&ny))
            .filter(|p| !walls.contains(p))
            .collect::<Vec<_>>()
    })
    .with_weight(|_: &(i32, i32), _: &(i32, i32)| 1u32);

    let manhattan = |a: &(i32, i32), b: &(i32, i32)| ((a.0 - b.0).abs() + (a.1 - b.1).abs()) as u32;
    let start = (0, 5);
    let goal = (11, 5);

    let (cost, path) = a_star(&grid, start, goal, manhattan).expect("goal is reachable");
    let plain = dijkstra(&grid, &ShortestPathOptions::new(start));

    assert_eq!(Some(&cost), plain.get(&goal));
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    assert_eq!(path.len() as u32, cost + 1);

    let mut guided = 0;
    let opts = ShortestPathOptions::new(start).target(goal).heuristic(manhattan);
    shortest_paths(&grid, &opts, |_| guided += 1);
    assert!(guided < plain.len());
}

#[test]
fn a_star_reports_unreachable_targets() {
    let g = AdjList::default().edge(1, 2, 1);
    assert_eq!(a_star(&g, 1, 3, |_, _| 0), None);
}
