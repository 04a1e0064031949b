pub mod labeling;
pub mod traits;

pub use labeling::{PathLabeling, Relaxation};
pub use traits::ShortestPathAlgorithm;
