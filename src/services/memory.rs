use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::models::{AdopterProfile, AnimalCandidate};
use crate::services::store::{AnimalCatalog, ProfileStore, StoreError};

/// In-memory profile store and catalog.
///
/// Animals are kept in catalog order, newest first, and are all treated as
/// available. Used by the test suites and for running the service without a
/// database.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<i64, AdopterProfile>>,
    animals: RwLock<Vec<AnimalCandidate>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the catalog; `animals` must already be newest first
    pub fn with_animals(animals: Vec<AnimalCandidate>) -> Self {
        Self {
            animals: RwLock::new(animals),
            ..Self::default()
        }
    }
}

#[async_trait]
impl ProfileStore for MemoryStore {
    async fn get_profile(&self, user_id: i64) -> Result<Option<AdopterProfile>, StoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, user_id: i64, profile: &AdopterProfile) -> Result<(), StoreError> {
        let mut stored = profile.clone();
        stored.updated_at = Some(chrono::Utc::now());
        self.profiles.write().await.insert(user_id, stored);
        Ok(())
    }
}

#[async_trait]
impl AnimalCatalog for MemoryStore {
    async fn list_available(&self, limit: usize) -> Result<Vec<AnimalCandidate>, StoreError> {
        Ok(self.animals.read().await.iter().take(limit).cloned().collect())
    }

    async fn list_all(&self) -> Result<Vec<AnimalCandidate>, StoreError> {
        Ok(self.animals.read().await.clone())
    }
}
