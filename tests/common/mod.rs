// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activities_client::gateway::InMemoryGateway;
use activities_client::models::{Activity, Category};
use activities_client::store::ActivityStore;
use activities_client::time_utils::parse_timestamp;
use std::sync::Arc;

/// Build an activity with sensible defaults.
#[allow(dead_code)]
pub fn activity(id: &str, date: &str) -> Activity {
    Activity {
        id: id.to_string(),
        title: format!("Activity {}", id),
        category: Category::Culture,
        description: "An evening at the theatre".to_string(),
        date: parse_timestamp(date).expect("test timestamp should parse"),
        city: "London".to_string(),
        venue: "Old Vic".to_string(),
    }
}

/// Create a store over an in-memory gateway seeded with `activities`.
#[allow(dead_code)]
pub fn store_with(activities: Vec<Activity>) -> (Arc<ActivityStore>, Arc<InMemoryGateway>) {
    let gateway = Arc::new(InMemoryGateway::with_activities(activities));
    let store = Arc::new(ActivityStore::new(gateway.clone()));
    (store, gateway)
}

/// Let spawned tasks run up to their next suspension point.
#[allow(dead_code)]
pub async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}
