use std::time::{Duration, Instant};
use wdgraph::graph::generators::generate_random_graph;
use wdgraph::{PathLabeling, ShortestPathAlgorithm, WeightedDigraph};

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    name: &str,
    algorithm: &A,
    graph: &WeightedDigraph<usize>,
    source: usize,
) -> wdgraph::Result<Duration>
where
    A: ShortestPathAlgorithm<usize, i64, WeightedDigraph<usize>>,
{
    println!("Running {} on graph with {} vertices...", name, graph.size());

    let start = Instant::now();
    let tree = algorithm.compute_shortest_paths(graph, &source)?;
    let duration = start.elapsed();

    println!("  - Settled {} reachable vertices in {:?}", tree.size(), duration);

    Ok(duration)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Linear scans everywhere, so keep the sizes modest
    let graph_sizes = vec![100, 500, 1_000, 2_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: ShortestPath vs OptimalShortestPath");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let basic = PathLabeling::basic();
    let optimal = PathLabeling::optimal();

    let mut results = Vec::new();

    for (seed, &size) in graph_sizes.iter().enumerate() {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = generate_random_graph(size, edge_factor, 100, seed as u64)?;
        println!("Graph has {} vertices and {} edges", graph.size(), graph.edge_count());

        let basic_time = benchmark_algorithm("ShortestPath", &basic, &graph, 0)?;
        let optimal_time = benchmark_algorithm("OptimalShortestPath", &optimal, &graph, 0)?;

        results.push((size, basic_time, optimal_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Basic (ms)", "Optimal (ms)");
    println!("-----------------------------------------------------");

    for (size, basic_time, optimal_time) in &results {
        println!(
            "{:<10} | {:<15} | {:<15}",
            size,
            basic_time.as_millis(),
            optimal_time.as_millis()
        );
    }

    Ok(())
}
