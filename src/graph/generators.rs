use crate::graph::WeightedDigraph;
use crate::Result;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a random graph labelled `0..n` with about `edge_factor * n` edges.
///
/// Weights are drawn from `1..=max_weight`. The same seed always yields the
/// same graph.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: i64,
    seed: u64,
) -> Result<WeightedDigraph<usize, i64>> {
    let mut graph = WeightedDigraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1));
            graph.add_edge(&u, &v, weight)?;
        }
    }

    Ok(graph)
}

/// Generates a directed chain `0 -> 1 -> ... -> n-1` with unit weights
pub fn generate_chain(n: usize) -> Result<WeightedDigraph<usize, i64>> {
    let mut graph = WeightedDigraph::from_vertices(0..n);
    for v in 1..n {
        graph.add_edge(&(v - 1), &v, 1)?;
    }
    Ok(graph)
}
