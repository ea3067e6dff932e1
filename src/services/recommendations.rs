use std::sync::Arc;

use crate::core::{resolve_limit, PolicyState, Ranker};
use crate::models::RecommendationsResponse;
use crate::services::postgres::DEFAULT_POOL_CAP;
use crate::services::store::{AnimalCatalog, ProfileStore, StoreError};

/// Default number of recommendations when the caller does not ask for a count
pub const DEFAULT_LIMIT: usize = 5;

/// Fetches profile and candidates, then ranks or falls back to recent listings
///
/// The ranker only runs when the caller has a stored profile; collaborator
/// failures are returned before any ranking happens.
pub struct RecommendationService {
    profiles: Arc<dyn ProfileStore>,
    catalog: Arc<dyn AnimalCatalog>,
    ranker: Ranker,
    default_limit: usize,
    pool_cap: usize,
}

impl RecommendationService {
    pub fn new(profiles: Arc<dyn ProfileStore>, catalog: Arc<dyn AnimalCatalog>, ranker: Ranker) -> Self {
        Self {
            profiles,
            catalog,
            ranker,
            default_limit: DEFAULT_LIMIT,
            pool_cap: DEFAULT_POOL_CAP,
        }
    }

    pub fn with_limits(mut self, default_limit: usize, pool_cap: usize) -> Self {
        self.default_limit = default_limit;
        self.pool_cap = pool_cap;
        self
    }

    /// Recommendations for an optional caller
    ///
    /// # Arguments
    /// * `identity` - Resolved caller id, `None` when anonymous
    /// * `requested` - Requested result count, `None` for the default
    pub async fn recommend(
        &self,
        identity: Option<i64>,
        requested: Option<u32>,
    ) -> Result<RecommendationsResponse, StoreError> {
        let limit = resolve_limit(requested, self.default_limit, self.pool_cap);

        let profile = match identity {
            Some(user_id) => self.profiles.get_profile(user_id).await?,
            None => None,
        };

        let state = PolicyState::resolve(identity, profile);
        let label = state.label();
        tracing::debug!("Recommendation state: {}, limit: {}", label, limit);

        match state {
            PolicyState::AuthenticatedWithProfile { user_id, profile } => {
                let mut pool = self.catalog.list_all().await?;
                pool.truncate(self.pool_cap);

                let outcome = self.ranker.rank(&profile, pool, limit);

                tracing::info!(
                    "Ranked {} recommendations for user {} (from {} candidates, {} excluded)",
                    outcome.results.len(),
                    user_id,
                    outcome.total_candidates,
                    outcome.excluded
                );

                Ok(RecommendationsResponse::ranked(outcome.results))
            }
            PolicyState::AuthenticatedNoProfile { .. } | PolicyState::Unauthenticated => {
                let items = self.catalog.list_available(limit).await?;
                tracing::info!("Returning {} recent listings ({})", items.len(), label);
                Ok(RecommendationsResponse::recent(items))
            }
        }
    }
}
