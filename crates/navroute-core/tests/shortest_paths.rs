//! Shortest-path properties checked against brute-force enumeration
//! and an eager decrease-key reference implementation.

use navroute_core::graph::{
    compute_shortest_distances, get_shortest_path, Distance, Graph, NodeId, Predecessors,
    RouteQuery,
};
use proptest::prelude::*;

type EdgeList = Vec<(usize, usize, u32)>;

fn build(node_count: usize, edges: &[(usize, usize, u32)]) -> (Graph, Vec<NodeId>) {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = (0..node_count)
        .map(|i| graph.add_node(format!("n{i}")))
        .collect();
    for &(from, to, weight) in edges {
        graph.add_edge(&format!("n{from}"), &format!("n{to}"), weight);
    }
    (graph, ids)
}

/// Minimum weight over every simple path from `source`, by exhaustive DFS
fn brute_force(graph: &Graph, ids: &[NodeId], source: NodeId) -> Vec<Option<u64>> {
    fn walk(
        graph: &Graph,
        ids: &[NodeId],
        current: NodeId,
        cost: u64,
        visited: &mut [bool],
        best: &mut [Option<u64>],
    ) {
        let slot = ids.iter().position(|id| *id == current).unwrap();
        if best[slot].is_none_or(|b| cost < b) {
            best[slot] = Some(cost);
        }
        visited[slot] = true;
        for edge in graph.edges(current) {
            let next = ids.iter().position(|id| *id == edge.target).unwrap();
            if !visited[next] {
                walk(graph, ids, edge.target, cost + u64::from(edge.weight), visited, best);
            }
        }
        visited[slot] = false;
    }

    let mut best = vec![None; ids.len()];
    let mut visited = vec![false; ids.len()];
    walk(graph, ids, source, 0, &mut visited, &mut best);
    best
}

/// Textbook O(V^2) Dijkstra that always updates in place
fn eager_reference(graph: &Graph, ids: &[NodeId], source: NodeId) -> Vec<Option<u64>> {
    let n = ids.len();
    let pos = |id: NodeId| ids.iter().position(|x| *x == id).unwrap();
    let mut dist: Vec<Option<u64>> = vec![None; n];
    let mut done = vec![false; n];
    dist[pos(source)] = Some(0);

    loop {
        let next = (0..n)
            .filter(|&i| !done[i])
            .filter_map(|i| dist[i].map(|d| (d, i)))
            .min();
        let Some((d, i)) = next else { break };
        done[i] = true;
        for edge in graph.edges(ids[i]) {
            let t = pos(edge.target);
            let candidate = d + u64::from(edge.weight);
            if dist[t].is_none_or(|cur| candidate < cur) {
                dist[t] = Some(candidate);
            }
        }
    }
    dist
}

fn run(graph: &Graph, source: NodeId) -> (Vec<Option<u64>>, Predecessors) {
    let mut preds = Predecessors::for_graph(graph);
    let distances = compute_shortest_distances(graph, source, &mut preds);
    let values = graph
        .all_nodes()
        .into_iter()
        .map(|id| distances.get(id).and_then(|d| d.value()))
        .collect();
    (values, preds)
}

fn small_graph() -> impl Strategy<Value = (usize, EdgeList, usize)> {
    (1usize..7).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u32..20), 0..16),
            0..n,
        )
    })
}

proptest! {
    #[test]
    fn distances_match_brute_force((n, edges, source) in small_graph()) {
        let (graph, ids) = build(n, &edges);
        let (distances, _) = run(&graph, ids[source]);
        prop_assert_eq!(distances, brute_force(&graph, &ids, ids[source]));
    }

    #[test]
    fn lazy_deletion_matches_eager_decrease_key((n, edges, source) in small_graph()) {
        let (graph, ids) = build(n, &edges);
        let (distances, _) = run(&graph, ids[source]);
        prop_assert_eq!(distances, eager_reference(&graph, &ids, ids[source]));
    }

    #[test]
    fn edges_never_violate_triangle_inequality((n, edges, source) in small_graph()) {
        let (graph, ids) = build(n, &edges);
        let query = RouteQuery::run(&graph, ids[source]);
        for &u in &ids {
            let du = query.distance_to(u).unwrap();
            if du.is_infinite() {
                continue;
            }
            for edge in graph.edges(u) {
                let dv = query.distance_to(edge.target).unwrap();
                prop_assert!(dv <= du.extend(edge.weight));
            }
        }
    }

    #[test]
    fn repeated_runs_are_identical((n, edges, source) in small_graph()) {
        let (graph, ids) = build(n, &edges);
        let (first, first_preds) = run(&graph, ids[source]);
        let (second, second_preds) = run(&graph, ids[source]);
        prop_assert_eq!(first, second);
        prop_assert_eq!(first_preds, second_preds);
    }

    #[test]
    fn reconstructed_paths_are_valid((n, edges, source) in small_graph()) {
        let (graph, ids) = build(n, &edges);
        let query = RouteQuery::run(&graph, ids[source]);
        for &target in &ids {
            let expected = query.distance_to(target).unwrap();
            match query.path_to(target) {
                Some(route) => {
                    prop_assert_eq!(route.nodes.first(), Some(&ids[source]));
                    prop_assert_eq!(route.nodes.last(), Some(&target));
                    // Walk the route using the cheapest parallel edge per hop
                    let mut total = Distance::ZERO;
                    for hop in route.nodes.windows(2) {
                        let weight = graph
                            .edges(hop[0])
                            .iter()
                            .filter(|e| e.target == hop[1])
                            .map(|e| e.weight)
                            .min();
                        prop_assert!(weight.is_some());
                        total = total.extend(weight.unwrap_or_default());
                    }
                    prop_assert_eq!(total, expected);
                }
                None => prop_assert!(expected.is_infinite()),
            }
        }
    }

    #[test]
    fn dangling_edges_leave_edge_count_unchanged(
        (n, edges, _source) in small_graph(),
        weight in 0u32..10,
    ) {
        let (mut graph, _) = build(n, &edges);
        let before = graph.edge_count();
        graph.add_edge("n0", "missing", weight);
        graph.add_edge("missing", "n0", weight);
        prop_assert_eq!(graph.edge_count(), before);
    }
}

#[test]
fn sample_network_scenario() {
    let mut graph = Graph::new();
    for name in ["A", "B", "C", "D", "E"] {
        graph.add_node(name);
    }
    for (from, to, weight) in [
        ("A", "B", 4),
        ("A", "C", 2),
        ("B", "C", 1),
        ("B", "D", 5),
        ("C", "D", 8),
        ("C", "E", 10),
        ("D", "E", 2),
    ] {
        graph.add_edge(from, to, weight);
    }

    let query = RouteQuery::from_name(&graph, "A").unwrap();
    let rendered: Vec<String> = query
        .distances()
        .iter()
        .map(|(id, d)| format!("{}={}", graph.name(*id), d))
        .collect();
    assert_eq!(rendered, vec!["A=0", "B=4", "C=2", "D=9", "E=11"]);

    let e = graph.get_node("E").unwrap();
    let path = get_shortest_path(e, query.predecessors());
    let names: Vec<&str> = path.iter().map(|id| graph.name(*id)).collect();
    assert_eq!(names, vec!["A", "B", "D", "E"]);
    assert_eq!(query.path_to(e).unwrap().distance.value(), Some(11));
}
