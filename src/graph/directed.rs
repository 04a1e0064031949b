use crate::algorithm::labeling::PathLabeling;
use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::adjacency::AdjacencyIndex;
use crate::graph::traits::{Graph, LabeledGraph};
use crate::graph::vertex_table::{VertexTable, DEFAULT_CAPACITY};
use crate::{Error, Result};
use num_traits::{PrimInt, Signed};
use std::fmt::{self, Debug, Display};

/// A weighted directed graph addressed by vertex label.
///
/// Labels are unique by value. Each label owns a dense handle and an
/// adjacency sequence sorted by edge weight; at most one edge exists per
/// ordered pair of labels.
#[derive(Debug, Clone)]
pub struct WeightedDigraph<E, W = i64>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
{
    /// Vertex labels, indexed by handle
    vertices: VertexTable<E>,

    /// Outgoing edges, indexed by source handle
    adjacency: AdjacencyIndex<W>,
}

impl<E, W> WeightedDigraph<E, W>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
{
    /// Creates a new empty graph with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a new empty graph able to hold `capacity` vertices before growing
    pub fn with_capacity(capacity: usize) -> Self {
        WeightedDigraph {
            vertices: VertexTable::with_capacity(capacity),
            adjacency: AdjacencyIndex::with_capacity(capacity),
        }
    }

    /// Creates an edgeless graph holding the given labels.
    ///
    /// Repeated labels collapse into one vertex.
    pub fn from_vertices<I>(vertices: I) -> Self
    where
        I: IntoIterator<Item = E>,
    {
        let vertices = vertices.into_iter();
        let (lower, _) = vertices.size_hint();
        let mut graph = Self::with_capacity(lower);
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        graph
    }

    pub fn size(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of vertices the graph holds before its next enlargement
    pub fn capacity(&self) -> usize {
        self.vertices.capacity()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    pub fn index_of(&self, vertex: &E) -> Option<usize> {
        self.vertices.index_of(vertex)
    }

    pub fn vertex(&self, handle: usize) -> Option<&E> {
        self.vertices.get(handle)
    }

    pub fn contains_vertex(&self, vertex: &E) -> bool {
        self.vertices.contains(vertex)
    }

    /// Adds a vertex unless an equal label already exists
    pub fn add_vertex(&mut self, vertex: E) {
        let (_, inserted) = self.vertices.insert(vertex);
        if inserted {
            self.adjacency.push_vertex();
        }
    }

    /// Independent copy of every label in handle order
    pub fn vertices_view(&self) -> Vec<E> {
        self.vertices.to_vec()
    }

    /// Labels reachable over one edge from `vertex`, in ascending weight order
    pub fn get_neighbours(&self, vertex: &E) -> Result<Vec<E>> {
        let handle = self.require(vertex)?;
        Ok(self
            .adjacency
            .iter(handle)
            .filter_map(|(target, _)| self.vertices.get(target).cloned())
            .collect())
    }

    pub fn has_edge(&self, from: &E, to: &E) -> Result<bool> {
        let (from, to) = self.require_pair(from, to)?;
        Ok(self.adjacency.sequence(from).map_or(false, |s| s.contains(to)))
    }

    /// Weight of the edge `from -> to`, or `None` when there is no such edge
    pub fn try_edge_weight(&self, from: &E, to: &E) -> Result<Option<W>> {
        let (from, to) = self.require_pair(from, to)?;
        Ok(self.adjacency.sequence(from).and_then(|s| s.weight_to(to)))
    }

    /// Weight of the edge `from -> to`, or `-1` when there is no such edge.
    ///
    /// A real edge of weight `-1` is indistinguishable from a missing one here;
    /// use [`try_edge_weight`](Self::try_edge_weight) to tell them apart.
    pub fn edge_weight(&self, from: &E, to: &E) -> Result<W> {
        Ok(self.try_edge_weight(from, to)?.unwrap_or_else(|| -W::one()))
    }

    /// Adds the edge `from -> to`, replacing any existing one.
    ///
    /// Self-loops are ignored; equal labels are the same vertex.
    pub fn add_edge(&mut self, from: &E, to: &E, weight: W) -> Result<()> {
        if from == to {
            return Ok(());
        }
        let (from, to) = self.require_pair(from, to)?;
        self.adjacency.remove_node(from, to);
        self.adjacency.add_node(from, to, weight);
        Ok(())
    }

    /// Removes the edge `from -> to` if present
    pub fn remove_edge(&mut self, from: &E, to: &E) -> Result<()> {
        let (from, to) = self.require_pair(from, to)?;
        self.adjacency.remove_node(from, to);
        Ok(())
    }

    /// Removes every outgoing edge of `vertex`
    pub fn remove_edges(&mut self, vertex: &E) -> Result<()> {
        let handle = self.require(vertex)?;
        self.adjacency.clear_sequence(handle);
        Ok(())
    }

    /// Removes `vertex` together with every edge into or out of it.
    ///
    /// Handles above the removed one shift down by one. Absent labels are ignored.
    pub fn remove_vertex(&mut self, vertex: &E) {
        if let Some(handle) = self.vertices.index_of(vertex) {
            self.adjacency.remove_vertex(handle);
            self.vertices.remove(handle);
        }
    }

    /// Removes all vertices and edges
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
    }

    /// Every edge as `(source, target, weight)`, grouped by source handle and
    /// in adjacency order within a source
    pub fn edges(&self) -> impl Iterator<Item = (&E, &E, W)> + '_ {
        self.vertices.iter().enumerate().flat_map(move |(handle, source)| {
            self.adjacency.iter(handle).filter_map(move |(target, weight)| {
                self.vertices.get(target).map(|target| (source, target, weight))
            })
        })
    }

    /// Shortest-path tree from `source`, relaxing candidates unconditionally
    pub fn shortest_path(&self, source: &E, verbose: bool) -> Result<Self> {
        PathLabeling::basic()
            .with_verbose(verbose)
            .compute_shortest_paths(self, source)
    }

    /// Shortest-path tree from `source`, relaxing candidates only on improvement
    pub fn optimal_shortest_path(&self, source: &E, verbose: bool) -> Result<Self> {
        PathLabeling::optimal()
            .with_verbose(verbose)
            .compute_shortest_paths(self, source)
    }

    fn require(&self, vertex: &E) -> Result<usize> {
        self.vertices
            .index_of(vertex)
            .ok_or_else(|| Error::vertex_not_found(vertex))
    }

    fn require_pair(&self, from: &E, to: &E) -> Result<(usize, usize)> {
        Ok((self.require(from)?, self.require(to)?))
    }
}

impl<E, W> Default for WeightedDigraph<E, W>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E, W> Graph<W> for WeightedDigraph<E, W>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        Box::new(self.adjacency.iter(vertex))
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency
            .sequence(from)
            .map_or(false, |sequence| sequence.contains(to))
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.adjacency.sequence(from)?.weight_to(to)
    }
}

impl<E, W> LabeledGraph<E, W> for WeightedDigraph<E, W>
where
    E: Clone + PartialEq + Debug,
    W: PrimInt + Signed + Debug,
{
    fn index_of(&self, vertex: &E) -> Option<usize> {
        self.vertices.index_of(vertex)
    }

    fn vertex(&self, handle: usize) -> Option<&E> {
        self.vertices.get(handle)
    }
}

/// Renders `Vertices: {a, b}, Edges: {{a, b, 3}}`
impl<E, W> Display for WeightedDigraph<E, W>
where
    E: Clone + PartialEq + Debug + Display,
    W: PrimInt + Signed + Debug + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertices: {{")?;
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", vertex)?;
        }
        write!(f, "}}, Edges: {{")?;
        for (i, (source, target, weight)) in self.edges().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{{{}, {}, {}}}", source, target, weight)?;
        }
        write!(f, "}}")
    }
}
