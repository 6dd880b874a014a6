//! Eventa Reco - recommendation service for the Eventa event planner
//!
//! This library powers the wizard's suggestion pages. A rule-based
//! matcher scores static catalogs of restaurants, sports arenas, and
//! services against an event request, and an AI-augmented recommender
//! wraps it with an external completion call that falls back to the
//! matcher on any failure.

pub mod catalog;
pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::catalog::Catalog;
pub use self::core::{MatchOutcome, Matcher, ServiceRules};
pub use self::models::{
    BudgetTier, CatalogEntity, Recommendation, RecommendRequest, RecommendResponse,
    RecommendationSource, ScoringWeights,
};
pub use self::services::{AiClient, AiError, RecommendError, Recommender};
