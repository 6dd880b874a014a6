use crate::core::rules::ServiceRules;
use crate::models::{CatalogEntity, EntityKind, RecommendRequest};

/// Guest count within the entity's inclusive capacity bounds
#[inline]
pub fn fits_guest_count(entity: &CatalogEntity, request: &RecommendRequest) -> bool {
    entity.guest_range.contains(request.guest_count)
}

/// Budget tier's currency range intersects the entity's budget range
#[inline]
pub fn fits_budget(entity: &CatalogEntity, request: &RecommendRequest) -> bool {
    entity.budget_range.overlaps(&request.budget.range())
}

/// Requested event type appears (case-insensitive substring) in the
/// entity's supported event types
#[inline]
pub fn matches_event_type(entity: &CatalogEntity, request: &RecommendRequest) -> bool {
    entity.supports_event(&request.event_type)
}

/// Service entities must additionally pass the venue rule table.
/// Non-service entities and uncategorized services pass through.
#[inline]
pub fn passes_service_rules(
    entity: &CatalogEntity,
    request: &RecommendRequest,
    rules: &ServiceRules,
) -> bool {
    if entity.kind != EntityKind::Service {
        return true;
    }
    match &entity.category {
        Some(category) => rules.is_allowed(category, &request.event_type, request.venue.as_deref()),
        None => true,
    }
}

/// All hard filters combined; every one must pass
#[inline]
pub fn passes_hard_filters(
    entity: &CatalogEntity,
    request: &RecommendRequest,
    rules: &ServiceRules,
) -> bool {
    fits_guest_count(entity, request)
        && fits_budget(entity, request)
        && matches_event_type(entity, request)
        && passes_service_rules(entity, request, rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BudgetRange, BudgetTier, GuestRange};

    fn entity(min_guests: u32, max_guests: u32, budget: BudgetRange) -> CatalogEntity {
        CatalogEntity {
            id: "test".into(),
            name: "Test".into(),
            description: String::new(),
            address: String::new(),
            kind: EntityKind::Restaurant,
            event_types: vec!["Birthday".into(), "Holiday Party".into()],
            guest_range: GuestRange { min: min_guests, max: max_guests },
            budget_range: budget,
            packages: vec![],
            cuisine: vec![],
            atmosphere: vec![],
            category: None,
        }
    }

    fn request(event_type: &str, guests: u32, budget: BudgetTier) -> RecommendRequest {
        RecommendRequest {
            event_type: event_type.into(),
            guest_count: guests,
            budget,
            location: None,
            venue: None,
            preferences: None,
        }
    }

    #[test]
    fn test_guest_bounds_inclusive() {
        let e = entity(10, 50, BudgetRange { min: 0, max: 10_000 });
        assert!(fits_guest_count(&e, &request("Birthday", 10, BudgetTier::Tier1)));
        assert!(fits_guest_count(&e, &request("Birthday", 50, BudgetTier::Tier1)));
        assert!(!fits_guest_count(&e, &request("Birthday", 9, BudgetTier::Tier1)));
        assert!(!fits_guest_count(&e, &request("Birthday", 51, BudgetTier::Tier1)));
    }

    #[test]
    fn test_budget_overlap_rejects_disjoint_tier() {
        let cheap = entity(2, 50, BudgetRange { min: 0, max: 400 });
        assert!(fits_budget(&cheap, &request("Birthday", 10, BudgetTier::Tier1)));
        assert!(!fits_budget(&cheap, &request("Birthday", 10, BudgetTier::Tier4)));
    }

    #[test]
    fn test_event_type_match_is_case_insensitive_substring() {
        let e = entity(2, 50, BudgetRange { min: 0, max: 10_000 });
        assert!(matches_event_type(&e, &request("birthday", 10, BudgetTier::Tier1)));
        assert!(matches_event_type(&e, &request("Holiday", 10, BudgetTier::Tier1)));
        assert!(!matches_event_type(&e, &request("Wedding", 10, BudgetTier::Tier1)));
    }

    #[test]
    fn test_service_rules_filter_by_venue() {
        let mut caterer = entity(2, 100, BudgetRange { min: 0, max: 10_000 });
        caterer.kind = EntityKind::Service;
        caterer.category = Some("catering".into());

        let mut at_restaurant = request("Birthday", 10, BudgetTier::Tier1);
        at_restaurant.venue = Some("restaurant".into());
        assert!(!passes_service_rules(&caterer, &at_restaurant, &ServiceRules));

        let mut at_hall = request("Birthday", 10, BudgetTier::Tier1);
        at_hall.venue = Some("banquet-hall".into());
        assert!(passes_service_rules(&caterer, &at_hall, &ServiceRules));
    }
}
