use num_traits::{PrimInt, Signed};
use std::collections::HashSet;
use std::fmt::Debug;

use crate::graph::{Graph, LabeledGraph, WeightedDigraph};
use crate::Result;

/// Trait for shortest path algorithms producing a result arborescence
pub trait ShortestPathAlgorithm<E, W, G>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
    G: LabeledGraph<E, W>,
{
    /// Compute the shortest-path tree rooted at `source`.
    ///
    /// The result is a new graph holding exactly the settled vertices and the
    /// tree edges that reached them; `graph` is left untouched.
    fn compute_shortest_paths(&self, graph: &G, source: &E) -> Result<WeightedDigraph<E, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the path from `source` to `target` inside a result tree as a sequence of labels
    fn get_path(&self, tree: &WeightedDigraph<E, W>, source: &E, target: &E) -> Option<Vec<E>> {
        let root = tree.index_of(source)?;
        let mut current = tree.index_of(target)?;

        let mut path = vec![current];
        let mut visited = HashSet::new();
        visited.insert(current);

        // Every non-root vertex of a tree has exactly one incoming edge
        while current != root {
            let predecessor =
                (0..tree.vertex_count()).find(|&p| Graph::has_edge(tree, p, current))?;
            if !visited.insert(predecessor) {
                log::warn!(
                    "Cycle detected in path reconstruction at {:?}",
                    tree.vertex(predecessor)
                );
                return None;
            }
            path.push(predecessor);
            current = predecessor;
        }

        path.reverse();
        path.into_iter()
            .map(|handle| tree.vertex(handle).cloned())
            .collect()
    }
}
