use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::BudgetTier;

/// Request for recommendations, shared by all three endpoint families
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(length(min = 1))]
    #[serde(alias = "event_type", rename = "eventType")]
    pub event_type: String,
    #[validate(range(min = 1))]
    #[serde(alias = "guest_count", rename = "guestCount")]
    pub guest_count: u32,
    pub budget: BudgetTier,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}
