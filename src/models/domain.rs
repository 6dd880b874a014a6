use serde::{Deserialize, Serialize};

/// Kind of bookable entity in the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntityKind {
    Restaurant,
    SportsArena,
    Service,
    Venue,
}

/// Inclusive guest capacity bounds
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GuestRange {
    pub min: u32,
    pub max: u32,
}

impl GuestRange {
    pub fn contains(&self, guests: u32) -> bool {
        guests >= self.min && guests <= self.max
    }
}

/// Inclusive price-fit bounds in currency units
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    /// Range overlap test: `other.max >= self.min && other.min <= self.max`
    pub fn overlaps(&self, other: &BudgetRange) -> bool {
        other.max >= self.min && other.min <= self.max
    }
}

/// Bookable package offered by a catalog entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub price: u32,
    pub description: String,
    #[serde(default)]
    pub includes: Vec<String>,
    /// Guest ceiling; None means the package scales to any party size
    #[serde(rename = "maxGuests", default)]
    pub max_guests: Option<u32>,
}

/// Static, read-only catalog record
///
/// Entities are built once at startup and shared by every request;
/// nothing mutates them afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntity {
    pub id: String,
    pub name: String,
    pub description: String,
    pub address: String,
    pub kind: EntityKind,
    #[serde(rename = "eventTypes")]
    pub event_types: Vec<String>,
    #[serde(rename = "guestRange")]
    pub guest_range: GuestRange,
    #[serde(rename = "budgetRange")]
    pub budget_range: BudgetRange,
    pub packages: Vec<Package>,
    /// Cuisine tags (restaurants) used for soft preference alignment
    #[serde(default)]
    pub cuisine: Vec<String>,
    /// Atmosphere tags used for soft preference alignment
    #[serde(default)]
    pub atmosphere: Vec<String>,
    /// Service category (services only), checked against the rule table
    #[serde(default)]
    pub category: Option<String>,
}

impl CatalogEntity {
    /// Case-insensitive substring match of the requested event type
    /// against the entity's supported event types
    pub fn supports_event(&self, event_type: &str) -> bool {
        let wanted = event_type.to_lowercase();
        self.event_types
            .iter()
            .any(|et| et.to_lowercase().contains(&wanted))
    }

    /// Pick the package most applicable to the requested guest count:
    /// the first package whose ceiling is unset or covers the party,
    /// else the package with no ceiling, else the last package.
    pub fn best_package(&self, guest_count: u32) -> Option<&Package> {
        self.packages
            .iter()
            .find(|p| p.max_guests.map_or(true, |max| max >= guest_count))
            .or_else(|| self.packages.iter().find(|p| p.max_guests.is_none()))
            .or_else(|| self.packages.last())
    }

    /// Whether any package mentions the event type by name
    pub fn has_event_package(&self, event_type: &str) -> bool {
        let wanted = event_type.to_lowercase();
        self.packages
            .iter()
            .any(|p| p.name.to_lowercase().contains(&wanted))
    }
}

/// One of the four fixed budget tiers
///
/// Closed enum so an unknown tier string fails deserialization at the
/// edge instead of silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetTier {
    #[serde(rename = "budget-1")]
    Tier1,
    #[serde(rename = "budget-2")]
    Tier2,
    #[serde(rename = "budget-3")]
    Tier3,
    #[serde(rename = "budget-4")]
    Tier4,
}

impl BudgetTier {
    /// Canonical tier-to-currency-range mapping. Every component that
    /// interprets a tier string goes through this single table.
    pub fn range(&self) -> BudgetRange {
        match self {
            BudgetTier::Tier1 => BudgetRange { min: 0, max: 1_000 },
            BudgetTier::Tier2 => BudgetRange { min: 1_000, max: 5_000 },
            BudgetTier::Tier3 => BudgetRange { min: 5_000, max: 15_000 },
            BudgetTier::Tier4 => BudgetRange { min: 15_000, max: 100_000 },
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetTier::Tier1 => "budget-1",
            BudgetTier::Tier2 => "budget-2",
            BudgetTier::Tier3 => "budget-3",
            BudgetTier::Tier4 => "budget-4",
        }
    }

    /// Human-readable label, used when interpolating into prompts
    pub fn label(&self) -> String {
        let r = self.range();
        format!("${} - ${}", r.min, r.max)
    }
}

/// Single ranked recommendation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "entityId", alias = "id")]
    pub entity_id: String,
    pub confidence: f64,
    pub reasoning: String,
    #[serde(rename = "bestPackage", default)]
    pub best_package: String,
    #[serde(rename = "whyPerfect", default)]
    pub why_perfect: String,
}

impl Recommendation {
    /// Clamp externally supplied confidence into [0, 1]
    pub fn clamped(mut self) -> Self {
        self.confidence = self.confidence.clamp(0.0, 1.0);
        self
    }
}

/// Scoring weights for the rule-based matcher
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub event_type: f64,
    pub guest_fit: f64,
    pub budget_fit: f64,
    pub package: f64,
    pub ambience: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            event_type: 0.40,
            guest_fit: 0.25,
            budget_fit: 0.20,
            package: 0.10,
            ambience: 0.05,
        }
    }
}
