// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity store: the client's single source of truth.
//!
//! Holds the activity collection, the current selection and one lifecycle
//! flag per kind of gateway call. Every mutation goes through the methods
//! below and is published on a `watch` channel, so views subscribe instead
//! of touching the state directly.
//!
//! Collection updates happen only after the gateway confirms a call. A
//! failed call leaves the collection as it was, lowers its flag and returns
//! the error to the caller.

mod state;

pub use state::StoreState;

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;

use crate::config::ClientConfig;
use crate::error::{Result, StoreError, TransportError};
use crate::gateway::ActivityGateway;
use crate::models::Activity;
use crate::time_utils;
use state::{InFlight, Lifecycle};

/// Activity collection plus selection and request lifecycle state.
pub struct ActivityStore {
    gateway: Arc<dyn ActivityGateway>,
    state: watch::Sender<StoreState>,
    request_timeout: Option<Duration>,
}

impl ActivityStore {
    /// Create an empty store backed by `gateway`, with no call timeout.
    pub fn new(gateway: Arc<dyn ActivityGateway>) -> Self {
        let (state, _) = watch::channel(StoreState::default());
        Self {
            gateway,
            state,
            request_timeout: None,
        }
    }

    /// Create an empty store using the configured call timeout.
    pub fn from_config(gateway: Arc<dyn ActivityGateway>, config: &ClientConfig) -> Self {
        Self::new(gateway).with_timeout(config.request_timeout)
    }

    /// Bound every gateway call by `timeout`. `None` waits forever.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    // ─── Read access ─────────────────────────────────────────────

    /// Receiver notified after every state change, flag transitions included.
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> StoreState {
        self.state.borrow().clone()
    }

    pub fn activity(&self, id: &str) -> Option<Activity> {
        self.state.borrow().get(id).cloned()
    }

    pub fn selected_activity(&self) -> Option<Activity> {
        self.state.borrow().selected_activity().cloned()
    }

    pub fn edit_mode(&self) -> bool {
        self.state.borrow().edit_mode()
    }

    pub fn loading_initial(&self) -> bool {
        self.state.borrow().loading_initial()
    }

    pub fn submitting(&self) -> bool {
        self.state.borrow().submitting()
    }

    pub fn loading_single(&self) -> bool {
        self.state.borrow().loading_single()
    }

    // ─── Gateway-backed operations ───────────────────────────────

    /// Fetch all activities and merge them into the collection by id.
    ///
    /// Existing entries are replaced, never duplicated, so calling this
    /// repeatedly is safe. Dates are truncated to whole seconds. Returns the
    /// number of activities received.
    pub async fn load_activities(&self) -> Result<usize> {
        let in_flight = InFlight::begin(&self.state, Lifecycle::LoadingInitial);
        tracing::debug!("Loading activities");

        let activities = match self.call("list", self.gateway.list()).await {
            Ok(activities) => activities,
            Err(err) => {
                tracing::warn!(error = %err, "Failed to load activities");
                return Err(err);
            }
        };

        let count = activities.len();
        in_flight.finish(|state| {
            for mut activity in activities {
                activity.date = time_utils::truncate_to_seconds(activity.date);
                state.activities.insert(activity.id.clone(), activity);
            }
        });

        tracing::info!(count, "Activities loaded");
        Ok(count)
    }

    /// Return the activity with `id`, fetching it only when it is not
    /// already in the collection. The returned activity becomes the selection.
    pub async fn load_activity(&self, id: &str) -> Result<Activity> {
        let cached = {
            let mut found = None;
            self.state.send_if_modified(|state| {
                found = state.get(id).cloned();
                if found.is_some() {
                    state.select(id);
                }
                found.is_some()
            });
            found
        };
        if let Some(activity) = cached {
            tracing::debug!(id, "Activity served from collection");
            return Ok(activity);
        }

        let in_flight = InFlight::begin(&self.state, Lifecycle::LoadingSingle);
        tracing::debug!(id, "Fetching activity");

        let mut activity = match self.call("get", self.gateway.get(id)).await {
            Ok(activity) => activity,
            Err(err) => {
                tracing::warn!(id, error = %err, "Failed to load activity");
                return Err(err);
            }
        };
        activity.date = time_utils::truncate_to_seconds(activity.date);

        // Key by the requested id so an unrelated entry can't be overwritten.
        if activity.id != id {
            tracing::warn!(
                requested = id,
                received = %activity.id,
                "Gateway returned a different activity"
            );
            return Err(TransportError::NotFound(id.to_string()).into());
        }

        let stored = activity.clone();
        in_flight.finish(|state| {
            state.activities.insert(stored.id.clone(), stored);
            state.select(id);
        });

        Ok(activity)
    }

    /// Create `activity`, whose id was assigned by the caller.
    ///
    /// On success the activity is added and selected. On failure nothing
    /// is added.
    pub async fn create_activity(&self, activity: Activity) -> Result<()> {
        if activity.id.trim().is_empty() {
            return Err(StoreError::MissingId);
        }
        if self.state.borrow().contains(&activity.id) {
            return Err(StoreError::DuplicateId(activity.id));
        }

        let in_flight = InFlight::begin(&self.state, Lifecycle::Submitting);
        tracing::debug!(id = %activity.id, "Creating activity");

        if let Err(err) = self.call("create", self.gateway.create(&activity)).await {
            tracing::warn!(id = %activity.id, error = %err, "Failed to create activity");
            return Err(err);
        }

        let id = activity.id.clone();
        in_flight.finish(|state| {
            state.activities.insert(activity.id.clone(), activity);
            state.select(&id);
        });

        tracing::info!(id = %id, "Activity created");
        Ok(())
    }

    /// Replace an activity already in the collection.
    ///
    /// On success the stored entry is replaced and selected. On failure the
    /// previous entry is kept.
    pub async fn edit_activity(&self, activity: Activity) -> Result<()> {
        if activity.id.trim().is_empty() {
            return Err(StoreError::MissingId);
        }
        if !self.state.borrow().contains(&activity.id) {
            return Err(StoreError::NotFound(activity.id));
        }

        let in_flight = InFlight::begin(&self.state, Lifecycle::Submitting);
        tracing::debug!(id = %activity.id, "Updating activity");

        if let Err(err) = self.call("update", self.gateway.update(&activity)).await {
            tracing::warn!(id = %activity.id, error = %err, "Failed to update activity");
            return Err(err);
        }

        let id = activity.id.clone();
        in_flight.finish(|state| {
            state.activities.insert(activity.id.clone(), activity);
            state.select(&id);
        });

        tracing::info!(id = %id, "Activity updated");
        Ok(())
    }

    // ─── Local operations ────────────────────────────────────────

    /// Select the activity with `id` and leave edit mode.
    ///
    /// An id that is not in the collection clears the selection.
    pub fn select_activity(&self, id: &str) -> Option<Activity> {
        let mut selected = None;
        self.state.send_modify(|state| {
            state.select(id);
            selected = state.selected_activity().cloned();
        });
        selected
    }

    /// Reset the selection, e.g. when leaving a detail or edit view.
    pub fn clear_activity(&self) {
        self.state.send_modify(|state| state.clear_selection());
    }

    /// Enter edit mode with nothing selected, for the create form.
    pub fn open_create_form(&self) {
        self.state.send_modify(|state| {
            state.clear_selection();
            state.edit_mode = true;
        });
    }

    /// Select `id` and enter edit mode. Returns `false` if `id` is unknown,
    /// in which case the selection is cleared and edit mode stays off.
    pub fn open_edit_form(&self, id: &str) -> bool {
        let mut found = false;
        self.state.send_modify(|state| {
            state.select(id);
            found = state.selected_id.is_some();
            state.edit_mode = found;
        });
        found
    }

    /// Run a gateway call under the configured timeout.
    async fn call<T, F>(&self, operation: &'static str, call: F) -> Result<T>
    where
        F: Future<Output = std::result::Result<T, TransportError>>,
    {
        match self.request_timeout {
            Some(after) => match tokio::time::timeout(after, call).await {
                Ok(result) => result.map_err(StoreError::from),
                Err(_) => Err(StoreError::Timeout { operation, after }),
            },
            None => call.await.map_err(StoreError::from),
        }
    }
}
