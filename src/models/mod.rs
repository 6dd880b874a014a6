// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BudgetRange, BudgetTier, CatalogEntity, EntityKind, GuestRange, Package, Recommendation,
    ScoringWeights,
};
pub use requests::RecommendRequest;
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse, RecommendationSource};
