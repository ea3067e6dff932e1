// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AdopterProfile, AgeBracket, AnimalCandidate, EnergyLevel, FeatureVector, HousingType,
    Lifestyle, RankedResult, RankingError, SizeClass, Species, WeightVector, AXIS_CHILDREN,
    AXIS_ENERGY, AXIS_HOUSING, AXIS_LIFESTYLE, AXIS_NAMES, FEATURE_AXES,
};
pub use requests::{RecommendationsQuery, UpsertProfileRequest};
pub use responses::{ErrorResponse, HealthResponse, ProfileResponse, RecommendationsResponse};
