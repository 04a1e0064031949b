use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

/// Identity of a record inside a [`Frontier`].
///
/// Two records with identical fields are still distinct records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CandidateId(u64);

/// A vertex that has not been settled yet, with its best known way in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Handle of the unsettled vertex
    pub vertex: usize,

    /// Handle of the settled vertex the best known path arrives from
    pub predecessor: usize,

    /// Weight of the best known path, `None` while no path is known
    pub weight: Option<W>,
}

impl<W> Candidate<W>
where
    W: PrimInt + Signed + Debug,
{
    pub fn new(vertex: usize, predecessor: usize, weight: Option<W>) -> Self {
        Candidate {
            vertex,
            predecessor,
            weight,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.weight.is_some()
    }
}

/// Insertion-ordered set of unsettled [`Candidate`]s.
///
/// Iteration follows the order records were added; updating a record in place
/// does not move it.
#[derive(Debug, Clone)]
pub struct Frontier<W>
where
    W: PrimInt + Signed + Debug,
{
    entries: Vec<(CandidateId, Candidate<W>)>,
    next_id: u64,
}

impl<W> Frontier<W>
where
    W: PrimInt + Signed + Debug,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Frontier {
            entries: Vec::with_capacity(capacity),
            next_id: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends a record and returns its identity
    pub fn add(&mut self, candidate: Candidate<W>) -> CandidateId {
        let id = CandidateId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, candidate));
        id
    }

    /// Removes the record with the given identity, keeping the order of the rest
    pub fn remove(&mut self, id: CandidateId) -> Option<Candidate<W>> {
        let position = self.entries.iter().position(|(entry_id, _)| *entry_id == id)?;
        Some(self.entries.remove(position).1)
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate<W>> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, candidate)| candidate)
    }

    /// First record, in insertion order, that has a known path
    pub fn first_reachable(&self) -> Option<(CandidateId, Candidate<W>)> {
        self.entries
            .iter()
            .find(|(_, candidate)| candidate.is_reachable())
            .copied()
    }

    /// Mutable access to the record for `vertex`
    pub fn find_vertex_mut(&mut self, vertex: usize) -> Option<&mut Candidate<W>> {
        self.entries
            .iter_mut()
            .find(|(_, candidate)| candidate.vertex == vertex)
            .map(|(_, candidate)| candidate)
    }

    pub fn iter(&self) -> impl Iterator<Item = (CandidateId, &Candidate<W>)> + '_ {
        self.entries.iter().map(|(id, candidate)| (*id, candidate))
    }
}

impl<W> Default for Frontier<W>
where
    W: PrimInt + Signed + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
