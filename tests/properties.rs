use std::collections::HashSet;

use quickcheck_macros::quickcheck;
use vertex_walk::DiGraph;

// Small vertex ids make cycles and shared targets likely.
const NUM_IDS: u8 = 12;

fn build(edges: &[(u8, u8)], start: u8) -> (DiGraph<u8>, u8) {
    let mut graph: DiGraph<u8> = edges
        .iter()
        .map(|&(a, b)| (a % NUM_IDS, b % NUM_IDS))
        .collect();
    let start = start % NUM_IDS;
    graph.add_vertex(start);
    (graph, start)
}

/// Computes the reachable set by repeated expansion, independent of any
/// traversal order.
fn reachable(graph: &DiGraph<u8>, start: u8) -> HashSet<u8> {
    let mut seen = HashSet::from([start]);
    loop {
        let next: HashSet<u8> = seen
            .iter()
            .flat_map(|v| graph.neighbors(v).iter().copied())
            .chain(seen.iter().copied())
            .collect();
        if next.len() == seen.len() {
            return seen;
        }
        seen = next;
    }
}

fn recursive_dfs(graph: &DiGraph<u8>, vertex: u8, visited: &mut HashSet<u8>, path: &mut Vec<u8>) {
    if !visited.insert(vertex) {
        return;
    }
    path.push(vertex);
    for &neighbor in graph.neighbors(&vertex) {
        recursive_dfs(graph, neighbor, visited, path);
    }
}

#[quickcheck]
fn prop_traverse_visits_reachable_set(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let (graph, start) = build(&edges, start);
    let path = graph.traverse(&start).unwrap();
    let visited: HashSet<u8> = path.iter().copied().collect();
    visited == reachable(&graph, start)
}

#[quickcheck]
fn prop_traverse_has_no_duplicates(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let (graph, start) = build(&edges, start);
    let path = graph.traverse(&start).unwrap();
    let unique: HashSet<_> = path.iter().collect();
    unique.len() == path.len() && path.len() <= graph.num_vertices()
}

#[quickcheck]
fn prop_traverse_starts_at_start(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let (graph, start) = build(&edges, start);
    graph.traverse(&start).unwrap().first() == Some(&start)
}

#[quickcheck]
fn prop_traverse_matches_recursive_dfs(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let (graph, start) = build(&edges, start);
    let mut expected = Vec::new();
    recursive_dfs(&graph, start, &mut HashSet::new(), &mut expected);
    graph.traverse(&start).unwrap() == expected
}

#[quickcheck]
fn prop_bfs_and_dfs_visit_same_vertices(edges: Vec<(u8, u8)>, start: u8) -> bool {
    let (graph, start) = build(&edges, start);
    let dfs: HashSet<_> = graph.traverse(&start).unwrap().into_iter().collect();
    let bfs: HashSet<_> = graph
        .traverse_breadth_first(&start)
        .unwrap()
        .into_iter()
        .collect();
    dfs == bfs
}

#[quickcheck]
fn prop_add_vertex_is_idempotent(edges: Vec<(u8, u8)>, vertex: u8) -> bool {
    let (mut graph, _) = build(&edges, vertex);
    let before = graph.num_vertices();
    !graph.add_vertex(vertex % NUM_IDS) && graph.num_vertices() == before
}

#[quickcheck]
fn prop_edges_are_deduplicated(edges: Vec<(u8, u8)>) -> bool {
    let (graph, _) = build(&edges, 0);
    let distinct: HashSet<(u8, u8)> = edges
        .iter()
        .map(|&(a, b)| (a % NUM_IDS, b % NUM_IDS))
        .collect();
    graph.num_edges() == distinct.len()
}
