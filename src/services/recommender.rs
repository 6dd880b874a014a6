use std::sync::Arc;
use thiserror::Error;

use crate::core::{Matcher, ServiceRules};
use crate::models::{CatalogEntity, Recommendation, RecommendRequest, RecommendationSource};
use crate::services::ai::{AiClient, AiError};

/// Errors surfaced by the strict recommendation path
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("AI recommendation failed: {0}")]
    Ai(#[from] AiError),
}

/// Recommendations plus provenance
#[derive(Debug)]
pub struct RecommendOutcome {
    pub recommendations: Vec<Recommendation>,
    pub source: RecommendationSource,
    pub total_candidates: usize,
}

/// AI-augmented recommender with a rule-based fallback
///
/// Per request: no credential -> fallback without network I/O;
/// otherwise one completion attempt, and any upstream or parse
/// failure falls back. No retries, no merging of the two paths.
pub struct Recommender {
    ai: Option<Arc<AiClient>>,
    matcher: Matcher,
    rules: ServiceRules,
}

impl Recommender {
    pub fn new(ai: Option<Arc<AiClient>>, matcher: Matcher) -> Self {
        Self {
            ai,
            matcher,
            rules: ServiceRules,
        }
    }

    /// Degrading path: the caller always receives a list, possibly
    /// empty, and never observes an AI failure.
    pub async fn recommend(
        &self,
        request: &RecommendRequest,
        catalog: &[CatalogEntity],
    ) -> RecommendOutcome {
        let Some(ai) = &self.ai else {
            tracing::debug!("No completion credential configured, using rule-based matcher");
            return self.fallback(request, catalog);
        };

        match ai.recommend(request, catalog, &self.rules).await {
            Ok(recommendations) => RecommendOutcome {
                recommendations,
                source: RecommendationSource::Ai,
                total_candidates: catalog.len(),
            },
            Err(e) => {
                tracing::warn!("Completion call failed, falling back to rule-based matcher: {}", e);
                self.fallback(request, catalog)
            }
        }
    }

    /// Strict path: AI failures, including a missing credential,
    /// propagate to the caller instead of degrading.
    pub async fn recommend_strict(
        &self,
        request: &RecommendRequest,
        catalog: &[CatalogEntity],
    ) -> Result<RecommendOutcome, RecommendError> {
        let ai = self.ai.as_ref().ok_or(AiError::MissingCredential)?;

        let recommendations = ai.recommend(request, catalog, &self.rules).await?;

        Ok(RecommendOutcome {
            recommendations,
            source: RecommendationSource::Ai,
            total_candidates: catalog.len(),
        })
    }

    fn fallback(&self, request: &RecommendRequest, catalog: &[CatalogEntity]) -> RecommendOutcome {
        let outcome = self.matcher.recommend(request, catalog);
        RecommendOutcome {
            recommendations: outcome.recommendations,
            source: RecommendationSource::RuleBased,
            total_candidates: outcome.total_candidates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::BudgetTier;

    fn request() -> RecommendRequest {
        RecommendRequest {
            event_type: "Anniversary".into(),
            guest_count: 2,
            budget: BudgetTier::Tier2,
            location: None,
            venue: None,
            preferences: None,
        }
    }

    #[tokio::test]
    async fn test_no_credential_uses_rule_based_path() {
        let recommender = Recommender::new(None, Matcher::with_default_weights());
        let catalog = catalog::restaurants();

        let outcome = recommender.recommend(&request(), &catalog).await;

        assert_eq!(outcome.source, RecommendationSource::RuleBased);
        assert!(outcome
            .recommendations
            .iter()
            .any(|r| r.entity_id == "saint-restaurant"));
    }

    #[tokio::test]
    async fn test_strict_path_errors_without_credential() {
        let recommender = Recommender::new(None, Matcher::with_default_weights());
        let catalog = catalog::services();

        let result = recommender.recommend_strict(&request(), &catalog).await;

        assert!(matches!(
            result,
            Err(RecommendError::Ai(AiError::MissingCredential))
        ));
    }
}
