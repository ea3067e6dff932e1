// Core algorithm exports
pub mod distance;
pub mod filters;
pub mod policy;
pub mod ranker;
pub mod vector;

pub use distance::{euclidean, similarity, weighted_euclidean};
pub use filters::{FilterOutcome, HardFilter};
pub use policy::{resolve_limit, PolicyState};
pub use ranker::{RankOutcome, Ranker};
pub use vector::{adopter_vector, animal_vector, DEFAULT_HOURS_CAP};
