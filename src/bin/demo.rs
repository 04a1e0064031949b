use std::env;
use wdgraph::{PathLabeling, ShortestPathAlgorithm, WeightedDigraph};

/// Settings for a demo run
#[derive(Debug, Clone)]
struct DemoConfig {
    /// City the tree is rooted at
    source: String,
    /// Use the overwrite-always variant instead of the improving one
    basic: bool,
    /// Log every iteration at info level
    verbose: bool,
    /// Print the tree as JSON instead of the diagnostic string
    json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            source: "Stockholm".to_string(),
            basic: false,
            verbose: false,
            json: false,
        }
    }
}

impl DemoConfig {
    fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let mut config = DemoConfig::default();
        for arg in args {
            match arg.as_str() {
                "--basic" => config.basic = true,
                "--verbose" => config.verbose = true,
                "--json" => config.json = true,
                _ => config.source = arg,
            }
        }
        config
    }
}

fn build_cities() -> wdgraph::Result<WeightedDigraph<String>> {
    let mut graph = WeightedDigraph::new();
    for city in ["Stockholm", "Göteborg", "Malmö", "Uppsala", "Västerås"] {
        graph.add_vertex(city.to_string());
    }

    let roads = [
        ("Stockholm", "Uppsala", 70),
        ("Stockholm", "Malmö", 613),
        ("Göteborg", "Uppsala", 453),
        ("Göteborg", "Stockholm", 471),
        ("Göteborg", "Västerås", 376),
        ("Uppsala", "Göteborg", 452),
        ("Uppsala", "Malmö", 679),
        ("Västerås", "Malmö", 599),
    ];
    for (from, to, distance) in roads {
        graph.add_edge(&from.to_string(), &to.to_string(), distance)?;
    }

    Ok(graph)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = DemoConfig::from_args(env::args().skip(1));
    log::debug!("Demo configuration: {:?}", config);

    let graph = build_cities()?;
    let algorithm = if config.basic {
        PathLabeling::basic()
    } else {
        PathLabeling::optimal()
    }
    .with_verbose(config.verbose);

    let tree = algorithm.compute_shortest_paths(&graph, &config.source)?;
    let name =
        <PathLabeling as ShortestPathAlgorithm<String, i64, WeightedDigraph<String>>>::name(
            &algorithm,
        );

    if config.json {
        println!("{}", serde_json::to_string_pretty(&tree.to_snapshot())?);
    } else {
        println!("Graph: {}", graph);
        println!("\n{} from '{}' to all the other vertices:", name, config.source);
        println!("{}", tree);
    }

    Ok(())
}
