// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process activity source.
//!
//! Backs the CLI's `--offline` mode and the store tests. Failures and
//! latency can be injected to drive the store's error paths.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::TransportError;
use crate::gateway::ActivityGateway;
use crate::models::Activity;

#[derive(Default)]
struct CallCounters {
    list: AtomicU64,
    get: AtomicU64,
    create: AtomicU64,
    update: AtomicU64,
}

/// Number of gateway calls made, per operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub list: u64,
    pub get: u64,
    pub create: u64,
    pub update: u64,
}

/// Activity source held in memory.
#[derive(Default)]
pub struct InMemoryGateway {
    activities: Mutex<HashMap<String, Activity>>,
    failures: Mutex<VecDeque<TransportError>>,
    offline: AtomicBool,
    latency_ms: AtomicU64,
    calls: CallCounters,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gateway pre-populated with `activities`.
    pub fn with_activities(activities: impl IntoIterator<Item = Activity>) -> Self {
        let map = activities
            .into_iter()
            .map(|a| (a.id.clone(), a))
            .collect::<HashMap<_, _>>();
        Self {
            activities: Mutex::new(map),
            ..Self::default()
        }
    }

    /// Fail the next call (of any kind) with `error`. Queued errors are used in order.
    pub async fn fail_next(&self, error: TransportError) {
        self.failures.lock().await.push_back(error);
    }

    /// Fail every call with [`TransportError::Unavailable`] until switched back.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::Relaxed);
    }

    /// Delay applied to every call before it resolves.
    pub fn set_latency(&self, latency: Duration) {
        let millis = u64::try_from(latency.as_millis()).unwrap_or(u64::MAX);
        self.latency_ms.store(millis, Ordering::Relaxed);
    }

    /// Current remote copy of an activity.
    pub async fn stored(&self, id: &str) -> Option<Activity> {
        self.activities.lock().await.get(id).cloned()
    }

    /// Insert or replace an activity on the remote side only.
    pub async fn put(&self, activity: Activity) {
        self.activities
            .lock()
            .await
            .insert(activity.id.clone(), activity);
    }

    pub fn calls(&self) -> CallCounts {
        CallCounts {
            list: self.calls.list.load(Ordering::Relaxed),
            get: self.calls.get.load(Ordering::Relaxed),
            create: self.calls.create.load(Ordering::Relaxed),
            update: self.calls.update.load(Ordering::Relaxed),
        }
    }

    /// Apply latency, then any injected failure.
    async fn begin(&self, counter: &AtomicU64) -> Result<(), TransportError> {
        counter.fetch_add(1, Ordering::Relaxed);

        let latency = self.latency_ms.load(Ordering::Relaxed);
        if latency > 0 {
            tokio::time::sleep(Duration::from_millis(latency)).await;
        }

        if self.offline.load(Ordering::Relaxed) {
            return Err(TransportError::Unavailable("gateway offline".to_string()));
        }

        match self.failures.lock().await.pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ActivityGateway for InMemoryGateway {
    async fn list(&self) -> Result<Vec<Activity>, TransportError> {
        self.begin(&self.calls.list).await?;
        let mut activities: Vec<Activity> =
            self.activities.lock().await.values().cloned().collect();
        activities.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(activities)
    }

    async fn get(&self, id: &str) -> Result<Activity, TransportError> {
        self.begin(&self.calls.get).await?;
        self.activities
            .lock()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| TransportError::NotFound(id.to_string()))
    }

    async fn create(&self, activity: &Activity) -> Result<(), TransportError> {
        self.begin(&self.calls.create).await?;
        let mut activities = self.activities.lock().await;
        if activities.contains_key(&activity.id) {
            return Err(TransportError::Http {
                status: 409,
                body: format!("activity {} already exists", activity.id),
            });
        }
        activities.insert(activity.id.clone(), activity.clone());
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), TransportError> {
        self.begin(&self.calls.update).await?;
        let mut activities = self.activities.lock().await;
        match activities.get_mut(&activity.id) {
            Some(existing) => {
                *existing = activity.clone();
                Ok(())
            }
            None => Err(TransportError::NotFound(activity.id.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latency_saturates_instead_of_wrapping() {
        let gateway = InMemoryGateway::new();

        gateway.set_latency(Duration::from_millis(250));
        assert_eq!(gateway.latency_ms.load(Ordering::Relaxed), 250);

        gateway.set_latency(Duration::MAX);
        assert_eq!(gateway.latency_ms.load(Ordering::Relaxed), u64::MAX);
    }
}
