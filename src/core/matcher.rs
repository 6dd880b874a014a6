use crate::core::{
    filters::passes_hard_filters,
    rules::ServiceRules,
    scoring::calculate_confidence,
};
use crate::models::{CatalogEntity, Recommendation, RecommendRequest, ScoringWeights};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchOutcome {
    pub recommendations: Vec<Recommendation>,
    pub total_candidates: usize,
}

/// Rule-based matcher - the fallback recommendation path
///
/// # Pipeline stages
/// 1. Hard filters (guest range, budget overlap, event type, service rules)
/// 2. Confidence scoring
/// 3. Ranking (higher confidence first, catalog order on ties)
/// 4. Annotation (best package, reasoning text)
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    rules: ServiceRules,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self {
            weights,
            rules: ServiceRules,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default())
    }

    /// Match a request against one catalog family.
    ///
    /// Entities failing any hard filter are dropped; survivors are
    /// scored, annotated, and ranked by confidence. An empty result is
    /// a valid "no recommendations" outcome.
    pub fn recommend(
        &self,
        request: &RecommendRequest,
        catalog: &[CatalogEntity],
    ) -> MatchOutcome {
        let total_candidates = catalog.len();

        let mut recommendations: Vec<Recommendation> = catalog
            .iter()
            .filter(|entity| passes_hard_filters(entity, request, &self.rules))
            .map(|entity| self.annotate(entity, request))
            .collect();

        // sort_by is stable, so equal confidences keep catalog order
        recommendations.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        MatchOutcome {
            recommendations,
            total_candidates,
        }
    }

    fn annotate(&self, entity: &CatalogEntity, request: &RecommendRequest) -> Recommendation {
        let confidence = calculate_confidence(entity, request, &self.weights);

        let best_package = entity
            .best_package(request.guest_count)
            .map(|p| p.name.clone())
            .unwrap_or_default();

        let reasoning = format!(
            "{} hosts {} events for {} to {} guests and fits a {} budget.",
            entity.name,
            request.event_type,
            entity.guest_range.min,
            entity.guest_range.max,
            request.budget.label(),
        );

        let why_perfect = format!(
            "A strong match for your {} with {} guests: {}",
            request.event_type, request.guest_count, entity.description,
        );

        Recommendation {
            entity_id: entity.id.clone(),
            confidence,
            reasoning,
            best_package,
            why_perfect,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::models::BudgetTier;

    fn request(event_type: &str, guests: u32, budget: BudgetTier) -> RecommendRequest {
        RecommendRequest {
            event_type: event_type.to_string(),
            guest_count: guests,
            budget,
            location: None,
            venue: None,
            preferences: None,
        }
    }

    #[test]
    fn test_anniversary_for_two_matches_saint_restaurant() {
        let matcher = Matcher::with_default_weights();
        let catalog = catalog::restaurants();

        let outcome = matcher.recommend(&request("Anniversary", 2, BudgetTier::Tier2), &catalog);

        let saint = outcome
            .recommendations
            .iter()
            .find(|r| r.entity_id == "saint-restaurant")
            .expect("saint-restaurant should match");
        assert_eq!(saint.best_package, "Anniversary Dinner for Two");
    }

    #[test]
    fn test_holiday_party_for_fifty_picks_holiday_package() {
        let matcher = Matcher::with_default_weights();
        let catalog = catalog::restaurants();

        let outcome =
            matcher.recommend(&request("Holiday Party", 50, BudgetTier::Tier4), &catalog);

        let saint = outcome
            .recommendations
            .iter()
            .find(|r| r.entity_id == "saint-restaurant")
            .expect("saint-restaurant should match");
        assert_eq!(saint.best_package, "Holiday Party Package");
    }

    #[test]
    fn test_solo_wedding_guest_matches_nothing() {
        let matcher = Matcher::with_default_weights();
        let catalog = catalog::restaurants();

        let outcome = matcher.recommend(&request("Wedding", 1, BudgetTier::Tier1), &catalog);

        assert!(outcome.recommendations.is_empty());
        assert_eq!(outcome.total_candidates, catalog.len());
    }

    #[test]
    fn test_results_sorted_by_confidence() {
        let matcher = Matcher::with_default_weights();
        let catalog = catalog::restaurants();

        let outcome = matcher.recommend(&request("Birthday", 12, BudgetTier::Tier2), &catalog);

        for pair in outcome.recommendations.windows(2) {
            assert!(pair[0].confidence >= pair[1].confidence);
        }
    }

    #[test]
    fn test_empty_catalog_yields_empty_result() {
        let matcher = Matcher::with_default_weights();
        let outcome = matcher.recommend(&request("Birthday", 12, BudgetTier::Tier2), &[]);
        assert!(outcome.recommendations.is_empty());
        assert_eq!(outcome.total_candidates, 0);
    }

    #[test]
    fn test_idempotent_for_same_request() {
        let matcher = Matcher::with_default_weights();
        let catalog = catalog::restaurants();
        let req = request("Birthday", 12, BudgetTier::Tier2);

        let first = matcher.recommend(&req, &catalog);
        let second = matcher.recommend(&req, &catalog);

        let ids = |o: &MatchOutcome| {
            o.recommendations
                .iter()
                .map(|r| (r.entity_id.clone(), r.confidence.to_bits()))
                .collect::<Vec<_>>()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_venue_rules_applied_to_services() {
        let matcher = Matcher::with_default_weights();
        let catalog = catalog::services();

        let mut req = request("Holiday Party", 40, BudgetTier::Tier2);
        req.venue = Some("restaurant".to_string());
        let outcome = matcher.recommend(&req, &catalog);

        assert!(
            !outcome
                .recommendations
                .iter()
                .any(|r| r.entity_id == "gold-leaf-catering"),
            "catering must be filtered out at a restaurant venue"
        );
    }
}
