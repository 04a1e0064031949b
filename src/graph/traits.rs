use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// Trait representing a weighted directed graph addressed by vertex handle
pub trait Graph<W>: Debug
where
    W: PrimInt + Signed + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns the outgoing edges of a vertex in ascending weight order
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W>;
}

/// A [`Graph`] whose handles map to caller-visible labels
pub trait LabeledGraph<E, W>: Graph<W>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
{
    /// Handle currently assigned to `vertex`
    fn index_of(&self, vertex: &E) -> Option<usize>;

    /// Label stored at `handle`
    fn vertex(&self, handle: usize) -> Option<&E>;
}
