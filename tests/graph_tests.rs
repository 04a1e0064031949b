use rand::prelude::*;
use rand::rngs::StdRng;
use std::collections::HashSet;
use wdgraph::graph::generators::generate_random_graph;
use wdgraph::graph::{Graph, GraphSnapshot};
use wdgraph::{Error, WeightedDigraph};

fn graph_with(vertices: &[&'static str]) -> WeightedDigraph<&'static str> {
    WeightedDigraph::from_vertices(vertices.iter().copied())
}

#[test]
fn test_add_vertex_ignores_duplicates() {
    let mut graph: WeightedDigraph<&str> = WeightedDigraph::new();
    assert!(graph.is_empty());

    graph.add_vertex("a");
    graph.add_vertex("b");
    graph.add_vertex("a");

    assert_eq!(graph.size(), 2);
    assert_eq!(graph.vertices_view(), vec!["a", "b"]);
    assert!(graph.contains_vertex(&"a"));
    assert!(!graph.contains_vertex(&"c"));
}

#[test]
fn test_from_vertices_collapses_duplicates() {
    let graph = graph_with(&["x", "y", "x", "z"]);
    assert_eq!(graph.vertices_view(), vec!["x", "y", "z"]);
}

#[test]
fn test_capacity_grows_by_a_quarter_plus_one() {
    let mut graph: WeightedDigraph<usize> = WeightedDigraph::with_capacity(4);
    for v in 0..4 {
        graph.add_vertex(v);
    }
    assert_eq!(graph.capacity(), 4);

    graph.add_vertex(4);
    assert_eq!(graph.capacity(), 6);

    graph.add_vertex(5);
    graph.add_vertex(6);
    assert_eq!(graph.capacity(), 8);

    let mut graph: WeightedDigraph<usize> = WeightedDigraph::new();
    assert_eq!(graph.capacity(), 100);
    for v in 0..101 {
        graph.add_vertex(v);
    }
    assert_eq!(graph.capacity(), 126);
    assert_eq!(graph.size(), 101);
}

#[test]
fn test_vertices_view_is_independent() {
    let graph = graph_with(&["a", "b"]);
    let mut view = graph.vertices_view();
    view[0] = "changed";
    view.push("extra");

    assert_eq!(graph.vertices_view(), vec!["a", "b"]);
}

#[test]
fn test_add_edge_replaces_existing_edge() {
    let mut graph = graph_with(&["a", "b", "c"]);
    graph.add_edge(&"a", &"b", 5).unwrap();
    graph.add_edge(&"a", &"c", 3).unwrap();
    assert_eq!(graph.edge_weight(&"a", &"b").unwrap(), 5);

    graph.add_edge(&"a", &"b", 1).unwrap();
    assert_eq!(graph.edge_weight(&"a", &"b").unwrap(), 1);
    assert_eq!(graph.get_neighbours(&"a").unwrap(), vec!["b", "c"]);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_edge_weight_sentinel_and_option() {
    let mut graph = graph_with(&["a", "b", "c"]);
    graph.add_edge(&"a", &"b", -1).unwrap();

    assert_eq!(graph.edge_weight(&"a", &"b").unwrap(), -1);
    assert_eq!(graph.edge_weight(&"a", &"c").unwrap(), -1);
    assert_eq!(graph.try_edge_weight(&"a", &"b").unwrap(), Some(-1));
    assert_eq!(graph.try_edge_weight(&"a", &"c").unwrap(), None);
    assert!(graph.has_edge(&"a", &"b").unwrap());
    assert!(!graph.has_edge(&"b", &"a").unwrap());
}

#[test]
fn test_unknown_vertices_are_errors() {
    let mut graph = graph_with(&["a", "b"]);
    graph.add_edge(&"a", &"b", 2).unwrap();
    let missing = Error::VertexNotFound("\"z\"".to_string());

    assert_eq!(graph.get_neighbours(&"z").unwrap_err(), missing);
    assert_eq!(graph.has_edge(&"a", &"z").unwrap_err(), missing);
    assert_eq!(graph.edge_weight(&"z", &"a").unwrap_err(), missing);
    assert_eq!(graph.add_edge(&"a", &"z", 1).unwrap_err(), missing);
    assert_eq!(graph.remove_edge(&"z", &"b").unwrap_err(), missing);
    assert_eq!(graph.remove_edges(&"z").unwrap_err(), missing);
    assert_eq!(missing.to_string(), "\"z\" was not found");

    // Failed calls leave the graph untouched
    assert_eq!(graph.to_string(), "Vertices: {a, b}, Edges: {{a, b, 2}}");
}

#[test]
fn test_self_loops_are_ignored() {
    let mut graph = graph_with(&["a"]);
    graph.add_edge(&"a", &"a", 3).unwrap();
    assert_eq!(graph.edge_count(), 0);
    assert!(!graph.has_edge(&"a", &"a").unwrap());

    // Equal labels short-circuit before the lookup
    assert!(graph.add_edge(&"ghost", &"ghost", 1).is_ok());
}

#[test]
fn test_neighbours_sorted_by_weight() {
    let mut graph = graph_with(&["a", "b", "c", "d"]);
    graph.add_edge(&"a", &"b", 5).unwrap();
    graph.add_edge(&"a", &"c", 1).unwrap();
    graph.add_edge(&"a", &"d", 3).unwrap();
    assert_eq!(graph.get_neighbours(&"a").unwrap(), vec!["c", "d", "b"]);

    graph.add_edge(&"a", &"c", 9).unwrap();
    assert_eq!(graph.get_neighbours(&"a").unwrap(), vec!["d", "b", "c"]);
}

#[test]
fn test_equal_weights_keep_insertion_order() {
    let mut graph = graph_with(&["a", "b", "c", "d"]);
    graph.add_edge(&"a", &"b", 2).unwrap();
    graph.add_edge(&"a", &"c", 2).unwrap();
    graph.add_edge(&"a", &"d", 1).unwrap();

    assert_eq!(graph.get_neighbours(&"a").unwrap(), vec!["d", "b", "c"]);
}

#[test]
fn test_remove_edge_and_remove_edges() {
    let mut graph = graph_with(&["a", "b", "c"]);
    graph.add_edge(&"a", &"b", 1).unwrap();
    graph.add_edge(&"a", &"c", 2).unwrap();
    graph.add_edge(&"b", &"a", 3).unwrap();

    graph.remove_edge(&"a", &"b").unwrap();
    assert!(!graph.has_edge(&"a", &"b").unwrap());
    // Removing a missing edge is a no-op
    graph.remove_edge(&"a", &"b").unwrap();
    assert_eq!(graph.edge_count(), 2);

    graph.remove_edges(&"a").unwrap();
    assert!(graph.get_neighbours(&"a").unwrap().is_empty());
    assert!(graph.has_edge(&"b", &"a").unwrap());
}

#[test]
fn test_remove_vertex_reindexes_edges() {
    let mut graph = graph_with(&["a", "b", "c", "d"]);
    graph.add_edge(&"a", &"c", 1).unwrap();
    graph.add_edge(&"b", &"c", 2).unwrap();
    graph.add_edge(&"c", &"d", 3).unwrap();
    graph.add_edge(&"d", &"a", 4).unwrap();
    graph.add_edge(&"b", &"d", 5).unwrap();

    graph.remove_vertex(&"c");

    assert!(!graph.contains_vertex(&"c"));
    assert_eq!(graph.vertices_view(), vec!["a", "b", "d"]);
    assert_eq!(graph.index_of(&"d"), Some(2));
    assert_eq!(graph.edge_weight(&"b", &"d").unwrap(), 5);
    assert_eq!(graph.edge_weight(&"d", &"a").unwrap(), 4);
    assert!(graph.get_neighbours(&"a").unwrap().is_empty());
    assert_eq!(
        graph.to_string(),
        "Vertices: {a, b, d}, Edges: {{b, d, 5}, {d, a, 4}}"
    );

    // Absent vertices are ignored
    graph.remove_vertex(&"c");
    assert_eq!(graph.size(), 3);
}

#[test]
fn test_clear_and_empty_rendering() {
    let mut graph = graph_with(&["a", "b"]);
    graph.add_edge(&"a", &"b", 1).unwrap();
    assert_eq!(graph.to_string(), "Vertices: {a, b}, Edges: {{a, b, 1}}");

    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.size(), 0);
    assert_eq!(graph.to_string(), "Vertices: {}, Edges: {}");

    graph.add_vertex("c");
    assert_eq!(graph.to_string(), "Vertices: {c}, Edges: {}");
}

#[test]
fn test_random_removals_keep_graph_consistent() {
    let mut rng = StdRng::seed_from_u64(42);

    for seed in 0..5 {
        let mut graph = generate_random_graph(60, 4.0, 20, seed).unwrap();

        for _ in 0..20 {
            let victim = *graph
                .vertices_view()
                .choose(&mut rng)
                .expect("graph is not empty");

            let expected: HashSet<(usize, usize, i64)> = graph
                .edges()
                .filter(|(s, t, _)| **s != victim && **t != victim)
                .map(|(s, t, w)| (*s, *t, w))
                .collect();

            graph.remove_vertex(&victim);

            let actual: HashSet<(usize, usize, i64)> =
                graph.edges().map(|(s, t, w)| (*s, *t, w)).collect();
            assert_eq!(actual, expected);
            assert!(!graph.contains_vertex(&victim));

            for handle in 0..graph.size() {
                let label = graph.vertex(handle).expect("contiguous handles");
                assert_eq!(graph.index_of(label), Some(handle));

                let weights: Vec<i64> = graph.outgoing_edges(handle).map(|(_, w)| w).collect();
                assert!(weights.windows(2).all(|pair| pair[0] <= pair[1]));
            }
        }
    }
}

#[test]
fn test_snapshot_round_trip_through_json() {
    let mut graph = graph_with(&["a", "b", "c"]);
    graph.add_edge(&"a", &"b", 4).unwrap();
    graph.add_edge(&"c", &"a", 7).unwrap();

    let snapshot = graph.to_snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    assert!(json.contains("\"weight\":7"));

    let owned: GraphSnapshot<String, i64> = serde_json::from_str(&json).unwrap();
    let rebuilt = WeightedDigraph::from_snapshot(&owned).unwrap();
    assert_eq!(rebuilt.to_string(), graph.to_string());
}

#[test]
fn test_snapshot_with_unknown_vertex_is_rejected() {
    let json = r#"{"vertices":["a"],"edges":[{"source":"a","target":"b","weight":1}]}"#;
    let snapshot: GraphSnapshot<String, i64> = serde_json::from_str(json).unwrap();
    assert!(matches!(
        WeightedDigraph::from_snapshot(&snapshot),
        Err(Error::VertexNotFound(_))
    ));
}
