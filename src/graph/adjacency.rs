use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// Outgoing edges of one vertex as `(target_handle, weight)` pairs,
/// kept in ascending weight order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencySequence<W>
where
    W: PrimInt + Signed + Debug,
{
    entries: Vec<(usize, W)>,
}

impl<W> AdjacencySequence<W>
where
    W: PrimInt + Signed + Debug,
{
    pub fn new() -> Self {
        AdjacencySequence { entries: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Inserts after every entry whose weight is not larger than `weight`,
    /// so equal weights stay in insertion order.
    pub fn insert(&mut self, target: usize, weight: W) {
        let position = self.entries.partition_point(|&(_, w)| w <= weight);
        self.entries.insert(position, (target, weight));
    }

    /// Unlinks the first entry pointing at `target`
    pub fn remove(&mut self, target: usize) -> Option<W> {
        let position = self.entries.iter().position(|&(t, _)| t == target)?;
        Some(self.entries.remove(position).1)
    }

    pub fn weight_to(&self, target: usize) -> Option<W> {
        self.entries
            .iter()
            .find(|&&(t, _)| t == target)
            .map(|&(_, weight)| weight)
    }

    pub fn contains(&self, target: usize) -> bool {
        self.entries.iter().any(|&(t, _)| t == target)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, W)> + '_ {
        self.entries.iter().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drops entries targeting `removed` and shifts higher targets down by one
    fn forget_handle(&mut self, removed: usize) {
        self.entries.retain(|&(target, _)| target != removed);
        for entry in self.entries.iter_mut() {
            if entry.0 > removed {
                entry.0 -= 1;
            }
        }
    }
}

impl<W> Default for AdjacencySequence<W>
where
    W: PrimInt + Signed + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

/// One [`AdjacencySequence`] per vertex handle
#[derive(Debug, Clone)]
pub struct AdjacencyIndex<W>
where
    W: PrimInt + Signed + Debug,
{
    sequences: Vec<AdjacencySequence<W>>,
}

impl<W> AdjacencyIndex<W>
where
    W: PrimInt + Signed + Debug,
{
    pub fn with_capacity(capacity: usize) -> Self {
        AdjacencyIndex {
            sequences: Vec::with_capacity(capacity),
        }
    }

    /// Appends an empty sequence for a freshly added vertex
    pub fn push_vertex(&mut self) {
        self.sequences.push(AdjacencySequence::new());
    }

    pub fn sequence(&self, source: usize) -> Option<&AdjacencySequence<W>> {
        self.sequences.get(source)
    }

    pub fn add_node(&mut self, source: usize, target: usize, weight: W) {
        if let Some(sequence) = self.sequences.get_mut(source) {
            sequence.insert(target, weight);
        }
    }

    pub fn remove_node(&mut self, source: usize, target: usize) -> Option<W> {
        self.sequences.get_mut(source)?.remove(target)
    }

    /// Drops every outgoing edge of `source`
    pub fn clear_sequence(&mut self, source: usize) {
        if let Some(sequence) = self.sequences.get_mut(source) {
            sequence.clear();
        }
    }

    /// Removes the sequence of `handle`, every edge pointing at it, and
    /// rewrites targets above `handle` to their shifted positions.
    pub fn remove_vertex(&mut self, handle: usize) {
        if handle >= self.sequences.len() {
            return;
        }
        self.sequences.remove(handle);
        for sequence in self.sequences.iter_mut() {
            sequence.forget_handle(handle);
        }
    }

    pub fn iter(&self, source: usize) -> impl Iterator<Item = (usize, W)> + '_ {
        self.sequences
            .get(source)
            .into_iter()
            .flat_map(|sequence| sequence.iter())
    }

    pub fn edge_count(&self) -> usize {
        self.sequences.iter().map(|sequence| sequence.len()).sum()
    }

    pub fn clear(&mut self) {
        self.sequences.clear();
    }
}
