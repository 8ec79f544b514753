use activities_client::gateway::InMemoryGateway;
use activities_client::models::{Activity, Category};
use activities_client::store::ActivityStore;
use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::sync::Arc;

fn build_activities(count: usize) -> Vec<Activity> {
    let start = NaiveDate::from_ymd_opt(2021, 1, 1)
        .and_then(|d| d.and_hms_opt(8, 0, 0))
        .expect("valid start date");

    (0..count)
        .map(|i| Activity {
            id: format!("activity-{}", i),
            title: format!("Activity {}", i),
            category: Category::ALL[i % Category::ALL.len()],
            description: "Benchmark activity".to_string(),
            // Several activities per day, spread over about a year
            date: start + Duration::minutes((i as i64 * 97) % (365 * 24 * 60)),
            city: "London".to_string(),
            venue: "Somewhere".to_string(),
        })
        .collect()
}

fn benchmark_grouping(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().expect("Failed to build runtime");
    let gateway = Arc::new(InMemoryGateway::with_activities(build_activities(5_000)));
    let store = ActivityStore::new(gateway);
    runtime
        .block_on(store.load_activities())
        .expect("Failed to load activities");
    let state = store.snapshot();

    let mut group = c.benchmark_group("derived_views");

    group.bench_function("activities_by_date_5000", |b| {
        b.iter(|| black_box(&state).activities_by_date().len())
    });

    group.bench_function("grouped_by_date_5000", |b| {
        b.iter(|| black_box(&state).grouped_by_date().len())
    });

    group.finish();
}

criterion_group!(benches, benchmark_grouping);
criterion_main!(benches);
