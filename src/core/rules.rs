//! Structured (event type, venue) -> allowed service-category table.
//!
//! Shared by the prompt builder, which renders it as text to ground
//! the model, and by the matcher's service filter.

/// Every service category known to the catalog
pub const ALL_CATEGORIES: &[&str] = &[
    "catering",
    "photography",
    "music",
    "decoration",
    "entertainment",
    "transport",
];

struct VenueRule {
    venue: &'static str,
    allowed: &'static [&'static str],
}

// Categories permitted per venue. Restaurants provide their own food,
// so outside catering is excluded there; offices rule out loud music
// and decor installs; arenas rule out decor installs.
const VENUE_RULES: &[VenueRule] = &[
    VenueRule {
        venue: "restaurant",
        allowed: &["photography", "music", "decoration", "entertainment"],
    },
    VenueRule {
        venue: "banquet-hall",
        allowed: ALL_CATEGORIES,
    },
    VenueRule {
        venue: "sports-arena",
        allowed: &["catering", "photography", "music", "entertainment"],
    },
    VenueRule {
        venue: "outdoor",
        allowed: ALL_CATEGORIES,
    },
    VenueRule {
        venue: "office",
        allowed: &["catering", "photography", "entertainment"],
    },
];

// Event types that always allow guest transport regardless of venue
const TRANSPORT_EVENTS: &[&str] = &["wedding", "engagement"];

/// Rule table lookup for service filtering
#[derive(Debug, Clone, Copy, Default)]
pub struct ServiceRules;

impl ServiceRules {
    /// Categories allowed for the given event/venue combination.
    /// An unknown or absent venue permits every category.
    pub fn allowed_categories(&self, event_type: &str, venue: Option<&str>) -> Vec<&'static str> {
        let base: Vec<&'static str> = match venue
            .and_then(|v| VENUE_RULES.iter().find(|r| r.venue.eq_ignore_ascii_case(v)))
        {
            Some(rule) => rule.allowed.to_vec(),
            None => ALL_CATEGORIES.to_vec(),
        };

        let event = event_type.to_lowercase();
        if TRANSPORT_EVENTS.iter().any(|e| event.contains(e)) && !base.contains(&"transport") {
            let mut extended = base;
            extended.push("transport");
            return extended;
        }
        base
    }

    pub fn is_allowed(&self, category: &str, event_type: &str, venue: Option<&str>) -> bool {
        self.allowed_categories(event_type, venue)
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }

    /// Render the table as prompt text so the model sees the same
    /// rules the fallback filter enforces
    pub fn render(&self) -> String {
        let mut out = String::from("Service category rules by venue:\n");
        for rule in VENUE_RULES {
            out.push_str(&format!(
                "- At a {}: only {} services are allowed.\n",
                rule.venue,
                rule.allowed.join(", ")
            ));
        }
        out.push_str("- Weddings and engagements always allow transport services.\n");
        out.push_str("- If no venue is specified, any service category is allowed.\n");
        out
    }
}
