use serde::{Deserialize, Serialize};
use crate::models::domain::{AdopterProfile, AnimalCandidate, RankedResult};

/// Response for the recommendations endpoint.
///
/// The shape is the same in every policy state: `ids` and `scores` are empty
/// when the items are plain recent listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub ids: Vec<i64>,
    pub items: Vec<AnimalCandidate>,
    pub scores: Vec<f64>,
}

impl RecommendationsResponse {
    pub fn ranked(results: Vec<RankedResult>) -> Self {
        let mut ids = Vec::with_capacity(results.len());
        let mut scores = Vec::with_capacity(results.len());
        let mut items = Vec::with_capacity(results.len());

        for result in results {
            ids.push(result.animal.id);
            scores.push(result.score);
            items.push(result.animal);
        }

        Self { ids, items, scores }
    }

    pub fn recent(items: Vec<AnimalCandidate>) -> Self {
        Self {
            ids: vec![],
            items,
            scores: vec![],
        }
    }
}

/// Response for the adopter profile endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub profile: AdopterProfile,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code,
        }
    }
}
