//! wdgraph - label-addressed weighted directed graphs
//!
//! Vertices are arbitrary equality-comparable labels stored in a dense table;
//! every vertex owns an adjacency sequence kept sorted by edge weight.
//!
//! Two single-source shortest-path procedures build a result arborescence by
//! repeatedly settling the first frontier candidate that has a known path.
//! They share that selection rule and differ only in how candidates are
//! relaxed afterwards, see [`algorithm::labeling::Relaxation`].

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    labeling::{PathLabeling, Relaxation},
    ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use graph::directed::WeightedDigraph;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0} was not found")]
    VertexNotFound(String),

    #[error("Path weight overflowed the weight type")]
    WeightOverflow,

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

impl Error {
    pub(crate) fn vertex_not_found<E: std::fmt::Debug>(vertex: &E) -> Self {
        Error::VertexNotFound(format!("{:?}", vertex))
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
