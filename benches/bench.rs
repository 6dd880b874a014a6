// Criterion benchmarks for the Eventa matcher

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use eventa_reco::models::{
    BudgetRange, BudgetTier, CatalogEntity, EntityKind, GuestRange, Package,
};
use eventa_reco::{Matcher, RecommendRequest};

fn synthetic_catalog(size: usize) -> Vec<CatalogEntity> {
    (0..size)
        .map(|i| CatalogEntity {
            id: format!("entity-{}", i),
            name: format!("Entity {}", i),
            description: "Synthetic entity".to_string(),
            address: format!("{} Bench Street", i),
            kind: EntityKind::Restaurant,
            event_types: vec![
                if i % 2 == 0 { "Birthday" } else { "Corporate Event" }.to_string(),
                "Holiday Party".to_string(),
            ],
            guest_range: GuestRange {
                min: 2 + (i % 10) as u32,
                max: 50 + (i % 200) as u32,
            },
            budget_range: BudgetRange {
                min: 100 * (i % 5) as u32,
                max: 2_000 + 500 * (i % 20) as u32,
            },
            packages: vec![
                Package {
                    name: "Small Party".to_string(),
                    price: 300,
                    description: String::new(),
                    includes: vec![],
                    max_guests: Some(20),
                },
                Package {
                    name: "Holiday Party Night".to_string(),
                    price: 900,
                    description: String::new(),
                    includes: vec![],
                    max_guests: None,
                },
            ],
            cuisine: vec!["italian".to_string()],
            atmosphere: vec!["casual".to_string()],
            category: None,
        })
        .collect()
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let request = RecommendRequest {
        event_type: "Holiday Party".to_string(),
        guest_count: 30,
        budget: BudgetTier::Tier2,
        location: None,
        venue: None,
        preferences: Some("casual italian".to_string()),
    };

    let mut group = c.benchmark_group("matcher_recommend");
    for size in [10, 100, 1_000] {
        let catalog = synthetic_catalog(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &catalog, |b, catalog| {
            b.iter(|| matcher.recommend(black_box(&request), black_box(catalog)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_recommend);
criterion_main!(benches);
