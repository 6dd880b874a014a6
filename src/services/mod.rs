// Service exports
pub mod ai;
pub mod recommender;

pub use ai::{AiClient, AiError};
pub use recommender::{RecommendError, RecommendOutcome, Recommender};
