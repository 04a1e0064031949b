use crate::graph::directed::WeightedDigraph;
use crate::Result;
use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// A single edge in a [`GraphSnapshot`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSnapshot<E, W> {
    pub source: E,
    pub target: E,
    pub weight: W,
}

/// Plain, serializable view of a [`WeightedDigraph`].
///
/// Vertices appear in handle order and edges in rendering order, so two
/// structurally identical graphs produce equal snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSnapshot<E, W> {
    pub vertices: Vec<E>,
    pub edges: Vec<EdgeSnapshot<E, W>>,
}

impl<E, W> WeightedDigraph<E, W>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
{
    pub fn to_snapshot(&self) -> GraphSnapshot<E, W> {
        GraphSnapshot {
            vertices: self.vertices_view(),
            edges: self
                .edges()
                .map(|(source, target, weight)| EdgeSnapshot {
                    source: source.clone(),
                    target: target.clone(),
                    weight,
                })
                .collect(),
        }
    }

    /// Rebuilds a graph from a snapshot.
    ///
    /// Fails if an edge names a vertex missing from `vertices`.
    pub fn from_snapshot(snapshot: &GraphSnapshot<E, W>) -> Result<Self> {
        let mut graph = Self::from_vertices(snapshot.vertices.iter().cloned());
        for edge in &snapshot.edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight)?;
        }
        Ok(graph)
    }
}
