// Service exports
pub mod memory;
pub mod postgres;
pub mod recommendations;
pub mod store;

pub use memory::MemoryStore;
pub use postgres::{PostgresClient, DEFAULT_POOL_CAP};
pub use recommendations::{RecommendationService, DEFAULT_LIMIT};
pub use store::{AnimalCatalog, ProfileStore, StoreError};
