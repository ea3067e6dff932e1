//! Pet Match - adopter-to-animal recommendation service
//!
//! This library provides the content-based ranking used by the pet adoption
//! backend. Adopter profiles and animals are encoded on shared feature axes
//! and candidates are ordered by weighted Euclidean distance, with rule-based
//! pre-filters and a recent-listings fallback for callers without a profile.

pub mod auth;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{PolicyState, Ranker, HardFilter, distance::weighted_euclidean};
pub use models::{AdopterProfile, AnimalCandidate, RankedResult, RecommendationsResponse, WeightVector};
