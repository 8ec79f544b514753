// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Remote activity source consumed by the store.

pub mod http;
pub mod memory;

pub use http::HttpActivityGateway;
pub use memory::InMemoryGateway;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::models::Activity;

/// Asynchronous access to the activities service.
///
/// Implementations perform the actual I/O; the store only relies on this
/// contract and never inspects the error beyond logging it.
#[async_trait]
pub trait ActivityGateway: Send + Sync {
    /// Fetch every activity.
    async fn list(&self) -> Result<Vec<Activity>, TransportError>;

    /// Fetch a single activity by id.
    async fn get(&self, id: &str) -> Result<Activity, TransportError>;

    /// Create an activity whose id was assigned by the client.
    async fn create(&self, activity: &Activity) -> Result<(), TransportError>;

    /// Replace an existing activity.
    async fn update(&self, activity: &Activity) -> Result<(), TransportError>;
}
