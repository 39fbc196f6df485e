// Criterion benchmarks for Scent Match

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scent_match::core::{calculate_match_score, Catalog, Matcher, DEFAULT_TOP_N};
use scent_match::models::{Fragrance, Preference, Projection, Season, ScoringWeights};

const STYLES: [&str; 7] = ["fresh", "woody", "sweet", "spicy", "citrus", "powdery", "green"];
const CONTEXTS: [&str; 5] = ["office", "casual", "date-night", "club", "gym"];
const SEASONS: [Season; 5] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter, Season::AllYear];
const PROJECTIONS: [Projection; 3] = [Projection::Low, Projection::Moderate, Projection::Strong];
const LONGEVITIES: [&str; 3] = ["4-6h", "6-8h", "8h+"];

fn create_fragrance(id: usize) -> Fragrance {
    Fragrance {
        id: id as u32,
        name: format!("Fragrance {}", id),
        brand: "Bench House".to_string(),
        price: 20.0 + (id % 15) as f64 * 10.0,
        notes: vec!["Bergamot".to_string(), "Cedar".to_string(), "Musk".to_string()],
        projection: PROJECTIONS[id % PROJECTIONS.len()],
        longevity: LONGEVITIES[id % LONGEVITIES.len()].to_string(),
        season: vec![SEASONS[id % SEASONS.len()], SEASONS[(id + 2) % SEASONS.len()]],
        context: vec![
            CONTEXTS[id % CONTEXTS.len()].to_string(),
            CONTEXTS[(id + 1) % CONTEXTS.len()].to_string(),
        ],
        style: vec![
            STYLES[id % STYLES.len()].to_string(),
            STYLES[(id + 3) % STYLES.len()].to_string(),
        ],
        description: String::new(),
        image_url: None,
    }
}

fn create_preference() -> Preference {
    Preference {
        context: "casual".to_string(),
        season: Season::Summer,
        projection: Projection::Low,
        longevity: "4-6h".to_string(),
        style: vec!["fresh".to_string(), "citrus".to_string()],
        budget: 100,
        allergies: vec!["cedar".to_string()],
    }
}

fn create_catalog(size: usize) -> Catalog {
    Catalog::new((0..size).map(create_fragrance).collect()).unwrap()
}

fn bench_match_score(c: &mut Criterion) {
    let preference = create_preference();
    let fragrance = create_fragrance(7);
    let weights = ScoringWeights::default();

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| calculate_match_score(black_box(&preference), black_box(&fragrance), &weights));
    });
}

fn bench_recommend(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let preference = create_preference();

    let mut group = c.benchmark_group("recommend");

    for catalog_size in [10, 100, 1000, 10000].iter() {
        let catalog = create_catalog(*catalog_size);

        group.bench_with_input(
            BenchmarkId::new("recommend", catalog_size),
            catalog_size,
            |b, _| {
                b.iter(|| matcher.recommend(black_box(&preference), black_box(&catalog)));
            },
        );
    }

    group.finish();
}

fn bench_dupes(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let catalog = create_catalog(1000);

    c.bench_function("dupes_1000_fragrances", |b| {
        b.iter(|| matcher.dupes(black_box(&catalog), black_box(7), black_box(80), DEFAULT_TOP_N));
    });
}

criterion_group!(benches, bench_match_score, bench_recommend, bench_dupes);

criterion_main!(benches);
