use log::Level;
use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::algorithm::ShortestPathAlgorithm;
use crate::data_structures::{Candidate, Frontier};
use crate::graph::{LabeledGraph, WeightedDigraph};
use crate::{Error, Result};

/// How a frontier record reacts to a path offered by a newly settled vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Always take the offered path, even when it is heavier than the known one
    Overwrite,
    /// Take the offered path only if no path is known or it is strictly lighter
    Improve,
}

impl Relaxation {
    pub fn accepts<W: PartialOrd>(self, current: Option<W>, offered: W) -> bool {
        match self {
            Relaxation::Overwrite => true,
            Relaxation::Improve => current.map_or(true, |current| offered < current),
        }
    }
}

/// Frontier-based shortest-path labeling.
///
/// Every iteration settles the first frontier record, in insertion order,
/// that has a known path. This is arrival order, not minimum weight, so
/// even [`Relaxation::Improve`] can settle a vertex through a heavier path
/// when a lighter one is discovered only later.
#[derive(Debug, Clone, Copy)]
pub struct PathLabeling {
    relaxation: Relaxation,
    /// Emit per-iteration trace lines at `info` instead of `trace`
    verbose: bool,
}

impl PathLabeling {
    pub fn new(relaxation: Relaxation) -> Self {
        PathLabeling {
            relaxation,
            verbose: false,
        }
    }

    /// Variant that overwrites neighbouring records unconditionally
    pub fn basic() -> Self {
        Self::new(Relaxation::Overwrite)
    }

    /// Variant that performs true edge relaxation
    pub fn optimal() -> Self {
        Self::new(Relaxation::Improve)
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    fn trace_level(&self) -> Level {
        if self.verbose {
            Level::Info
        } else {
            Level::Trace
        }
    }
}

impl Default for PathLabeling {
    fn default() -> Self {
        Self::optimal()
    }
}

impl<E, W, G> ShortestPathAlgorithm<E, W, G> for PathLabeling
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
    G: LabeledGraph<E, W>,
{
    fn name(&self) -> &'static str {
        match self.relaxation {
            Relaxation::Overwrite => "ShortestPath",
            Relaxation::Improve => "OptimalShortestPath",
        }
    }

    fn compute_shortest_paths(&self, graph: &G, source: &E) -> Result<WeightedDigraph<E, W>> {
        let root = graph
            .index_of(source)
            .ok_or_else(|| Error::vertex_not_found(source))?;
        let level = self.trace_level();
        let n = graph.vertex_count();

        let mut tree: WeightedDigraph<E, W> = WeightedDigraph::new();
        tree.add_vertex(label::<E, W, G>(graph, root)?.clone());

        // Settled path weight per handle
        let mut settled: Vec<Option<W>> = vec![None; n];
        settled[root] = Some(W::zero());

        let mut frontier = Frontier::with_capacity(n.saturating_sub(1));
        for vertex in (0..n).filter(|&v| v != root) {
            frontier.add(Candidate::new(vertex, root, graph.get_edge_weight(root, vertex)));
        }

        if log::log_enabled!(level) {
            log::log!(level, "Initial phase");
            log::log!(level, "Result tree: {:?}", tree.to_snapshot());
            log::log!(level, "Frontier: {}", describe_frontier::<E, W, G>(graph, &frontier));
        }

        let mut iteration = 0;
        while !frontier.is_empty() {
            let Some((id, chosen)) = frontier.first_reachable() else {
                log::debug!("{} unreachable vertices left unsettled", frontier.len());
                break;
            };
            frontier.remove(id);
            iteration += 1;

            let path_weight = chosen.weight.ok_or_else(|| {
                Error::AlgorithmError("selected a record without a known path".to_string())
            })?;
            let tree_weight = graph
                .get_edge_weight(chosen.predecessor, chosen.vertex)
                .ok_or_else(|| {
                    Error::AlgorithmError(format!(
                        "settled {} without a tree edge",
                        describe_candidate::<E, W, G>(graph, &chosen)
                    ))
                })?;

            let vertex = label::<E, W, G>(graph, chosen.vertex)?;
            tree.add_vertex(vertex.clone());
            tree.add_edge(label::<E, W, G>(graph, chosen.predecessor)?, vertex, tree_weight)?;
            settled[chosen.vertex] = Some(path_weight);

            for (neighbour, edge_weight) in graph.outgoing_edges(chosen.vertex) {
                if let Some(record) = frontier.find_vertex_mut(neighbour) {
                    let offered = match path_weight.checked_add(&edge_weight) {
                        Some(offered) => offered,
                        // Overflowed upwards: heavier than any known weight
                        None if self.relaxation == Relaxation::Improve
                            && record.weight.is_some()
                            && edge_weight > W::zero() =>
                        {
                            continue
                        }
                        None => return Err(Error::WeightOverflow),
                    };
                    if self.relaxation.accepts(record.weight, offered) {
                        record.predecessor = chosen.vertex;
                        record.weight = Some(offered);
                    }
                }
            }

            if log::log_enabled!(level) {
                log::log!(level, "Iteration: {}", iteration);
                log::log!(level, "Settled: {}", describe_candidate::<E, W, G>(graph, &chosen));
                log::log!(level, "Result tree: {:?}", tree.to_snapshot());
                log::log!(level, "Frontier: {}", describe_frontier::<E, W, G>(graph, &frontier));
                log::log!(level, "Weights: {:?}", settled);
            }
        }

        log::debug!(
            "{} from {:?}: settled {} of {} vertices in {} iterations",
            <Self as ShortestPathAlgorithm<E, W, G>>::name(self),
            source,
            tree.size(),
            n,
            iteration
        );

        Ok(tree)
    }
}

fn label<E, W, G>(graph: &G, handle: usize) -> Result<&E>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
    G: LabeledGraph<E, W>,
{
    graph
        .vertex(handle)
        .ok_or_else(|| Error::AlgorithmError(format!("dangling vertex handle {}", handle)))
}

fn describe_candidate<E, W, G>(graph: &G, candidate: &Candidate<W>) -> String
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
    G: LabeledGraph<E, W>,
{
    let weight = candidate
        .weight
        .map_or_else(|| "-".to_string(), |w| format!("{:?}", w));
    let name = |handle: usize| {
        graph
            .vertex(handle)
            .map_or_else(|| "?".to_string(), |v| format!("{:?}", v))
    };
    format!(
        "({}, {}, {})",
        name(candidate.vertex),
        name(candidate.predecessor),
        weight
    )
}

fn describe_frontier<E, W, G>(graph: &G, frontier: &Frontier<W>) -> String
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
    G: LabeledGraph<E, W>,
{
    let records: Vec<String> = frontier
        .iter()
        .map(|(_, candidate)| describe_candidate::<E, W, G>(graph, candidate))
        .collect();
    format!("[{}]", records.join(", "))
}
