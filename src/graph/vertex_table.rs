use std::fmt::Debug;

/// Capacity of a table created without an explicit size
pub const DEFAULT_CAPACITY: usize = 100;

/// Percentage of the current capacity added on every enlargement
pub const ENLARGE_PERCENT: usize = 25;

/// Growable set of unique vertex labels.
///
/// The slot a label occupies is its handle. Handles are always the contiguous
/// range `0..len()`, so removing a label shifts every later handle down by one.
#[derive(Debug, Clone)]
pub struct VertexTable<E>
where
    E: Clone + PartialEq + Debug,
{
    /// Labels in handle order
    vertices: Vec<E>,

    /// Logical capacity, grown by `enlarge` only
    capacity: usize,
}

impl<E> VertexTable<E>
where
    E: Clone + PartialEq + Debug,
{
    /// Creates an empty table with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty table able to hold `capacity` labels before growing
    pub fn with_capacity(capacity: usize) -> Self {
        VertexTable {
            vertices: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the handle of `vertex`, comparing by value
    pub fn index_of(&self, vertex: &E) -> Option<usize> {
        self.vertices.iter().position(|candidate| candidate == vertex)
    }

    pub fn contains(&self, vertex: &E) -> bool {
        self.index_of(vertex).is_some()
    }

    /// Label stored at `handle`
    pub fn get(&self, handle: usize) -> Option<&E> {
        self.vertices.get(handle)
    }

    /// Appends `vertex` unless an equal label is already present.
    ///
    /// Returns the handle of the stored label and whether it was inserted.
    pub fn insert(&mut self, vertex: E) -> (usize, bool) {
        if let Some(handle) = self.index_of(&vertex) {
            return (handle, false);
        }

        if self.vertices.len() == self.capacity {
            self.enlarge();
        }

        self.vertices.push(vertex);
        (self.vertices.len() - 1, true)
    }

    /// Removes the label at `handle`, compacting the table
    pub fn remove(&mut self, handle: usize) -> Option<E> {
        if handle < self.vertices.len() {
            Some(self.vertices.remove(handle))
        } else {
            None
        }
    }

    /// Independent copy of all labels in handle order
    pub fn to_vec(&self) -> Vec<E> {
        self.vertices.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.vertices.iter()
    }

    /// Drops every label; the capacity is kept
    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    fn enlarge(&mut self) {
        let new_capacity = 1 + self.capacity + ENLARGE_PERCENT * self.capacity / 100;
        self.vertices
            .reserve_exact(new_capacity - self.vertices.len());
        self.capacity = new_capacity;
    }
}

impl<E> Default for VertexTable<E>
where
    E: Clone + PartialEq + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
