pub mod adjacency;
pub mod directed;
pub mod generators;
pub mod snapshot;
pub mod traits;
pub mod vertex_table;

pub use adjacency::{AdjacencyIndex, AdjacencySequence};
pub use directed::WeightedDigraph;
pub use snapshot::{EdgeSnapshot, GraphSnapshot};
pub use traits::{Graph, LabeledGraph};
pub use vertex_table::VertexTable;
