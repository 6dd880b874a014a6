//! Static catalogs of bookable entities.
//!
//! Catalogs are built once at startup and shared read-only across all
//! requests. Prices live here and nowhere else.

use crate::models::{BudgetRange, CatalogEntity, EntityKind, GuestRange, Package};

/// All three catalog families
#[derive(Debug, Clone)]
pub struct Catalog {
    pub restaurants: Vec<CatalogEntity>,
    pub arenas: Vec<CatalogEntity>,
    pub services: Vec<CatalogEntity>,
}

impl Catalog {
    pub fn standard() -> Self {
        Self {
            restaurants: restaurants(),
            arenas: sports_arenas(),
            services: services(),
        }
    }

    pub fn family(&self, kind: EntityKind) -> &[CatalogEntity] {
        match kind {
            EntityKind::Restaurant => &self.restaurants,
            EntityKind::SportsArena => &self.arenas,
            EntityKind::Service | EntityKind::Venue => &self.services,
        }
    }

    pub fn total(&self) -> usize {
        self.restaurants.len() + self.arenas.len() + self.services.len()
    }
}

fn pkg(name: &str, price: u32, description: &str, includes: &[&str], max_guests: Option<u32>) -> Package {
    Package {
        name: name.to_string(),
        price,
        description: description.to_string(),
        includes: includes.iter().map(|s| s.to_string()).collect(),
        max_guests,
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn restaurants() -> Vec<CatalogEntity> {
    vec![
        CatalogEntity {
            id: "saint-restaurant".to_string(),
            name: "The Saint Restaurant".to_string(),
            description: "French-Mediterranean dining room with private alcoves and a full event floor".to_string(),
            address: "14 Cathedral Row".to_string(),
            kind: EntityKind::Restaurant,
            event_types: strings(&[
                "Anniversary",
                "Birthday",
                "Holiday Party",
                "Corporate Event",
                "Engagement",
            ]),
            guest_range: GuestRange { min: 2, max: 120 },
            budget_range: BudgetRange { min: 200, max: 25_000 },
            packages: vec![
                pkg(
                    "Anniversary Dinner for Two",
                    250,
                    "Five-course tasting menu at a reserved window table",
                    &["tasting menu", "wine pairing", "dessert surprise"],
                    Some(2),
                ),
                pkg(
                    "Birthday Celebration",
                    400,
                    "Private alcove with a set menu and a custom cake",
                    &["set menu", "custom cake", "decorated table"],
                    Some(30),
                ),
                pkg(
                    "Holiday Party Package",
                    750,
                    "Seasonal buffet on the event floor with festive decor",
                    &["seasonal buffet", "festive decor", "dedicated staff"],
                    None,
                ),
            ],
            cuisine: strings(&["french", "mediterranean"]),
            atmosphere: strings(&["elegant", "intimate"]),
            category: None,
        },
        CatalogEntity {
            id: "bella-vista".to_string(),
            name: "Bella Vista Trattoria".to_string(),
            description: "Family-run trattoria with a terrace and a private dining room".to_string(),
            address: "88 Hillcrest Avenue".to_string(),
            kind: EntityKind::Restaurant,
            event_types: strings(&["Birthday", "Anniversary", "Engagement", "Graduation"]),
            guest_range: GuestRange { min: 2, max: 80 },
            budget_range: BudgetRange { min: 100, max: 8_000 },
            packages: vec![
                pkg(
                    "Family Feast",
                    350,
                    "Shared-plate menu on the terrace",
                    &["antipasti", "two mains", "house wine"],
                    Some(20),
                ),
                pkg(
                    "Private Dining Room",
                    900,
                    "Exclusive use of the back room with a fixed menu",
                    &["private room", "fixed menu", "sound system"],
                    None,
                ),
            ],
            cuisine: strings(&["italian"]),
            atmosphere: strings(&["casual", "family"]),
            category: None,
        },
        CatalogEntity {
            id: "harbor-grill".to_string(),
            name: "Harbor Grill".to_string(),
            description: "Waterfront grill house built for large corporate functions".to_string(),
            address: "2 Pier Lane".to_string(),
            kind: EntityKind::Restaurant,
            event_types: strings(&["Corporate Event", "Holiday Party", "Retirement"]),
            guest_range: GuestRange { min: 10, max: 200 },
            budget_range: BudgetRange { min: 1_000, max: 40_000 },
            packages: vec![
                pkg(
                    "Corporate Lunch",
                    1_500,
                    "Plated lunch with AV setup for presentations",
                    &["plated lunch", "projector", "podium"],
                    Some(60),
                ),
                pkg(
                    "Full Venue Buyout",
                    12_000,
                    "Entire restaurant including both decks",
                    &["both decks", "full bar", "event coordinator"],
                    None,
                ),
            ],
            cuisine: strings(&["seafood", "grill"]),
            atmosphere: strings(&["waterfront", "modern"]),
            category: None,
        },
        CatalogEntity {
            id: "sakura-garden".to_string(),
            name: "Sakura Garden".to_string(),
            description: "Japanese restaurant with tatami rooms for small parties".to_string(),
            address: "51 Blossom Street".to_string(),
            kind: EntityKind::Restaurant,
            event_types: strings(&["Birthday", "Graduation", "Anniversary"]),
            guest_range: GuestRange { min: 2, max: 40 },
            budget_range: BudgetRange { min: 80, max: 3_000 },
            packages: vec![
                pkg(
                    "Omakase for Two",
                    300,
                    "Chef's selection at the counter",
                    &["omakase", "sake flight"],
                    Some(2),
                ),
                pkg(
                    "Tatami Room Party",
                    1_200,
                    "Private tatami room with a banquet menu",
                    &["tatami room", "banquet menu", "tea ceremony"],
                    None,
                ),
            ],
            cuisine: strings(&["japanese"]),
            atmosphere: strings(&["quiet", "traditional"]),
            category: None,
        },
    ]
}

pub fn sports_arenas() -> Vec<CatalogEntity> {
    vec![
        CatalogEntity {
            id: "metro-arena".to_string(),
            name: "Metro Arena".to_string(),
            description: "Multi-court arena with conference rooms and full catering access".to_string(),
            address: "300 Stadium Way".to_string(),
            kind: EntityKind::SportsArena,
            event_types: strings(&["Corporate Event", "Team Building", "Birthday"]),
            guest_range: GuestRange { min: 20, max: 500 },
            budget_range: BudgetRange { min: 2_000, max: 60_000 },
            packages: vec![
                pkg(
                    "Court Rental Block",
                    2_500,
                    "Three courts for four hours with equipment",
                    &["three courts", "equipment", "referee"],
                    Some(120),
                ),
                pkg(
                    "Full Arena Event",
                    25_000,
                    "Entire arena with staging and production crew",
                    &["all courts", "staging", "production crew"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: strings(&["energetic", "spacious"]),
            category: None,
        },
        CatalogEntity {
            id: "riverside-sports-hall".to_string(),
            name: "Riverside Sports Hall".to_string(),
            description: "Neighborhood hall with a party zone overlooking the river".to_string(),
            address: "7 Embankment Road".to_string(),
            kind: EntityKind::SportsArena,
            event_types: strings(&["Birthday", "Team Building", "Graduation"]),
            guest_range: GuestRange { min: 10, max: 150 },
            budget_range: BudgetRange { min: 500, max: 12_000 },
            packages: vec![
                pkg(
                    "Party Zone",
                    800,
                    "Dedicated party area beside the main court",
                    &["party area", "tables", "sound system"],
                    Some(40),
                ),
                pkg(
                    "Hall Hire",
                    4_000,
                    "Whole hall including changing rooms",
                    &["full hall", "changing rooms", "scoreboard"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: strings(&["casual", "bright"]),
            category: None,
        },
        CatalogEntity {
            id: "summit-climbing-center".to_string(),
            name: "Summit Climbing Center".to_string(),
            description: "Indoor climbing center with instructors for group sessions".to_string(),
            address: "19 Quarry Close".to_string(),
            kind: EntityKind::SportsArena,
            event_types: strings(&["Birthday", "Team Building"]),
            guest_range: GuestRange { min: 5, max: 60 },
            budget_range: BudgetRange { min: 300, max: 5_000 },
            packages: vec![
                pkg(
                    "Group Climb",
                    600,
                    "Guided two-hour session with gear included",
                    &["instructor", "gear", "safety briefing"],
                    Some(25),
                ),
                pkg(
                    "Center Takeover",
                    3_500,
                    "Exclusive evening access to every wall",
                    &["all walls", "two instructors", "lounge"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: strings(&["adventurous"]),
            category: None,
        },
    ]
}

pub fn services() -> Vec<CatalogEntity> {
    vec![
        CatalogEntity {
            id: "gold-leaf-catering".to_string(),
            name: "Gold Leaf Catering".to_string(),
            description: "Full-service caterer for plated dinners and large buffets".to_string(),
            address: "Unit 4, Market Yard".to_string(),
            kind: EntityKind::Service,
            event_types: strings(&["Wedding", "Corporate Event", "Holiday Party", "Anniversary"]),
            guest_range: GuestRange { min: 10, max: 300 },
            budget_range: BudgetRange { min: 1_000, max: 50_000 },
            packages: vec![
                pkg(
                    "Buffet Service",
                    2_000,
                    "Hot and cold buffet with service staff",
                    &["buffet", "staff", "tableware"],
                    Some(100),
                ),
                pkg(
                    "Plated Dinner",
                    6_000,
                    "Three-course plated dinner with sommelier",
                    &["three courses", "sommelier", "full staff"],
                    None,
                ),
            ],
            cuisine: strings(&["international"]),
            atmosphere: vec![],
            category: Some("catering".to_string()),
        },
        CatalogEntity {
            id: "lenscraft-photography".to_string(),
            name: "Lenscraft Photography".to_string(),
            description: "Two-photographer team covering events of any size".to_string(),
            address: "23 Aperture Lane".to_string(),
            kind: EntityKind::Service,
            event_types: strings(&[
                "Wedding",
                "Birthday",
                "Anniversary",
                "Corporate Event",
                "Graduation",
                "Engagement",
            ]),
            guest_range: GuestRange { min: 2, max: 500 },
            budget_range: BudgetRange { min: 300, max: 8_000 },
            packages: vec![
                pkg(
                    "Half-Day Coverage",
                    500,
                    "Four hours with edited gallery",
                    &["four hours", "edited gallery"],
                    None,
                ),
                pkg(
                    "Full-Day Coverage",
                    1_400,
                    "Ten hours, two photographers, same-week delivery",
                    &["ten hours", "two photographers", "album"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: vec![],
            category: Some("photography".to_string()),
        },
        CatalogEntity {
            id: "nightwave-dj".to_string(),
            name: "Nightwave DJ Collective".to_string(),
            description: "DJ crew with lighting rig and MC service".to_string(),
            address: "9 Echo Street".to_string(),
            kind: EntityKind::Service,
            event_types: strings(&["Wedding", "Birthday", "Holiday Party", "Corporate Event"]),
            guest_range: GuestRange { min: 10, max: 400 },
            budget_range: BudgetRange { min: 400, max: 6_000 },
            packages: vec![
                pkg(
                    "Evening Set",
                    600,
                    "Five-hour set with standard lighting",
                    &["five hours", "lighting"],
                    None,
                ),
                pkg(
                    "Premium Production",
                    2_200,
                    "Full night with MC, lighting rig, and dance floor",
                    &["full night", "MC", "lighting rig", "dance floor"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: vec![],
            category: Some("music".to_string()),
        },
        CatalogEntity {
            id: "bloom-and-vine-decor".to_string(),
            name: "Bloom & Vine Decor".to_string(),
            description: "Floral and event styling studio".to_string(),
            address: "31 Garden Mews".to_string(),
            kind: EntityKind::Service,
            event_types: strings(&["Wedding", "Anniversary", "Engagement", "Holiday Party"]),
            guest_range: GuestRange { min: 2, max: 300 },
            budget_range: BudgetRange { min: 250, max: 15_000 },
            packages: vec![
                pkg(
                    "Table Styling",
                    400,
                    "Centerpieces and linens for up to twenty tables",
                    &["centerpieces", "linens"],
                    Some(160),
                ),
                pkg(
                    "Full Venue Styling",
                    3_000,
                    "Complete room transformation with installation crew",
                    &["arches", "drapery", "install crew"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: vec![],
            category: Some("decoration".to_string()),
        },
        CatalogEntity {
            id: "starline-limo".to_string(),
            name: "Starline Limousines".to_string(),
            description: "Chauffeured fleet for guest and party transport".to_string(),
            address: "Depot 2, Airfield Road".to_string(),
            kind: EntityKind::Service,
            event_types: strings(&["Wedding", "Engagement", "Corporate Event"]),
            guest_range: GuestRange { min: 2, max: 100 },
            budget_range: BudgetRange { min: 200, max: 5_000 },
            packages: vec![
                pkg(
                    "Couple's Car",
                    300,
                    "Classic car with chauffeur for the day",
                    &["classic car", "chauffeur"],
                    Some(4),
                ),
                pkg(
                    "Guest Shuttle Fleet",
                    1_800,
                    "Three shuttles running a fixed route",
                    &["three shuttles", "fixed route", "coordinator"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: vec![],
            category: Some("transport".to_string()),
        },
        CatalogEntity {
            id: "jester-entertainment".to_string(),
            name: "Jester Entertainment".to_string(),
            description: "Performers, games, and hosts for parties and team days".to_string(),
            address: "5 Carnival Walk".to_string(),
            kind: EntityKind::Service,
            event_types: strings(&["Birthday", "Holiday Party", "Team Building"]),
            guest_range: GuestRange { min: 5, max: 250 },
            budget_range: BudgetRange { min: 150, max: 4_000 },
            packages: vec![
                pkg(
                    "Party Host",
                    250,
                    "Two-hour hosted games and activities",
                    &["host", "games"],
                    Some(40),
                ),
                pkg(
                    "Showcase Night",
                    1_500,
                    "Stage show with three acts and a host",
                    &["three acts", "host", "stage kit"],
                    None,
                ),
            ],
            cuisine: vec![],
            atmosphere: vec![],
            category: Some("entertainment".to_string()),
        },
    ]
}
