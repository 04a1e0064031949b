pub mod frontier;

pub use frontier::{Candidate, CandidateId, Frontier};
