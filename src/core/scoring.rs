use crate::models::{CatalogEntity, RecommendRequest, ScoringWeights};

/// Calculate a confidence value in [0, 1] for an entity that already
/// passed the hard filters.
///
/// Weighted components:
/// - event-type match (largest share)
/// - guest-capacity fit
/// - budget fit
/// - event-type-specific package bonus
/// - cuisine/atmosphere alignment with free-text preferences
pub fn calculate_confidence(
    entity: &CatalogEntity,
    request: &RecommendRequest,
    weights: &ScoringWeights,
) -> f64 {
    let event_score = if entity.supports_event(&request.event_type) {
        1.0
    } else {
        0.0
    };

    let guest_score = calculate_guest_fit(
        request.guest_count,
        entity.guest_range.min,
        entity.guest_range.max,
    );

    let budget_score = calculate_budget_fit(entity, request);

    let package_score = if entity.has_event_package(&request.event_type) {
        1.0
    } else {
        0.0
    };

    let ambience_score = calculate_ambience_fit(entity, request.preferences.as_deref());

    let total = event_score * weights.event_type
        + guest_score * weights.guest_fit
        + budget_score * weights.budget_fit
        + package_score * weights.package
        + ambience_score * weights.ambience;

    total.clamp(0.0, 1.0)
}

/// Guest fit (0-1): parties near the middle of the capacity range
/// score higher than parties at the edges
#[inline]
fn calculate_guest_fit(guests: u32, min: u32, max: u32) -> f64 {
    let mid = (min + max) as f64 / 2.0;
    let range = (max - min) as f64;

    if range <= 0.0 {
        return 1.0;
    }

    let deviation = (guests as f64 - mid).abs();
    let normalized = deviation / (range / 2.0);

    // Edges still fit, so keep a floor above zero
    (1.0 - normalized.min(1.0)).max(0.25)
}

/// Budget fit (0-1): how much of the tier's range the entity can
/// actually serve
#[inline]
fn calculate_budget_fit(entity: &CatalogEntity, request: &RecommendRequest) -> f64 {
    let tier = request.budget.range();
    let overlap_min = tier.min.max(entity.budget_range.min) as f64;
    let overlap_max = tier.max.min(entity.budget_range.max) as f64;
    let tier_span = (tier.max - tier.min) as f64;

    if overlap_max < overlap_min || tier_span <= 0.0 {
        return 0.0;
    }

    ((overlap_max - overlap_min) / tier_span).min(1.0)
}

/// Ambience fit (0-1): 1.0 when any whitespace-separated preference
/// token appears in the entity's cuisine or atmosphere tags
#[inline]
fn calculate_ambience_fit(entity: &CatalogEntity, preferences: Option<&str>) -> f64 {
    let Some(prefs) = preferences else {
        return 0.0;
    };

    let lowered = prefs.to_lowercase();
    let hit = lowered.split_whitespace().any(|token| {
        entity
            .cuisine
            .iter()
            .chain(entity.atmosphere.iter())
            .any(|tag| tag.to_lowercase().contains(token))
    });

    if hit {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetRange, BudgetTier, EntityKind, GuestRange};

    fn entity() -> CatalogEntity {
        CatalogEntity {
            id: "e".into(),
            name: "E".into(),
            description: String::new(),
            address: String::new(),
            kind: EntityKind::Restaurant,
            event_types: vec!["Birthday".into()],
            guest_range: GuestRange { min: 10, max: 90 },
            budget_range: BudgetRange { min: 0, max: 100_000 },
            packages: vec![],
            cuisine: vec!["italian".into()],
            atmosphere: vec!["casual".into()],
            category: None,
        }
    }

    fn request(guests: u32) -> RecommendRequest {
        RecommendRequest {
            event_type: "Birthday".into(),
            guest_count: guests,
            budget: BudgetTier::Tier2,
            location: None,
            venue: None,
            preferences: None,
        }
    }

    #[test]
    fn test_confidence_within_unit_interval() {
        let score = calculate_confidence(&entity(), &request(50), &ScoringWeights::default());
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_guest_fit_peaks_at_middle() {
        let mid = calculate_guest_fit(50, 10, 90);
        let edge = calculate_guest_fit(10, 10, 90);
        assert!(mid > 0.9);
        assert!(edge < mid);
        assert!(edge >= 0.25);
    }

    #[test]
    fn test_budget_fit_full_overlap() {
        let e = entity();
        let score = calculate_budget_fit(&e, &request(50));
        assert!((score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_ambience_bonus_requires_preferences() {
        let e = entity();
        assert_eq!(calculate_ambience_fit(&e, None), 0.0);
        assert_eq!(calculate_ambience_fit(&e, Some("cozy italian dinner")), 1.0);
        assert_eq!(calculate_ambience_fit(&e, Some("rooftop views")), 0.0);
    }

    #[test]
    fn test_matching_preferences_raise_confidence() {
        let e = entity();
        let weights = ScoringWeights::default();
        let plain = calculate_confidence(&e, &request(50), &weights);

        let mut with_prefs = request(50);
        with_prefs.preferences = Some("casual".into());
        let boosted = calculate_confidence(&e, &with_prefs, &weights);

        assert!(boosted > plain);
    }
}
