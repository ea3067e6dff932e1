use async_trait::async_trait;
use thiserror::Error;

use crate::models::{AdopterProfile, AnimalCandidate};

/// Errors that can occur when reading or writing profiles and animals
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),
}

/// Source of stored adopter profiles
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the profile for a user, `None` when none was saved
    async fn get_profile(&self, user_id: i64) -> Result<Option<AdopterProfile>, StoreError>;

    /// Create or replace the profile for a user
    async fn upsert_profile(&self, user_id: i64, profile: &AdopterProfile) -> Result<(), StoreError>;
}

/// Source of adoptable animals, newest listings first
#[async_trait]
pub trait AnimalCatalog: Send + Sync {
    /// The `limit` most recently listed available animals
    async fn list_available(&self, limit: usize) -> Result<Vec<AnimalCandidate>, StoreError>;

    /// Every available animal, the pool the ranker scores against
    async fn list_all(&self) -> Result<Vec<AnimalCandidate>, StoreError>;

    /// Backend liveness
    async fn health_check(&self) -> Result<bool, StoreError> {
        Ok(true)
    }
}
