use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::AdopterProfile;

/// Query string for the recommendations endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecommendationsQuery {
    /// Number of results; the configured default applies when omitted
    #[serde(default, alias = "limit")]
    pub n: Option<u32>,
}

/// Request to create or replace the caller's adopter profile
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpsertProfileRequest {
    #[validate(length(min = 1, max = 64))]
    #[serde(alias = "housing_type", rename = "housingType")]
    pub housing_type: String,
    #[serde(default, alias = "has_children", rename = "hasChildren")]
    pub has_children: bool,
    #[validate(range(min = 0, max = 168))]
    #[serde(default, alias = "weekly_hours_available", rename = "weeklyHoursAvailable")]
    pub weekly_hours_available: i32,
    #[validate(length(min = 1, max = 32))]
    pub lifestyle: String,
}

impl UpsertProfileRequest {
    pub fn into_profile(self) -> AdopterProfile {
        AdopterProfile {
            housing_type: Some(self.housing_type.trim().to_string()),
            has_children: Some(self.has_children),
            weekly_hours_available: Some(self.weekly_hours_available),
            lifestyle: Some(self.lifestyle.trim().to_string()),
            updated_at: None,
        }
    }
}
