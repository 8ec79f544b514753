// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activities client: in-memory state for an activities CRUD service.
//!
//! This crate provides the store that mirrors the remote activity
//! collection, the gateway it talks to, and the form adapter that turns
//! activities into editable values and back.

pub mod config;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod services;
pub mod store;
pub mod time_utils;

use std::sync::Arc;

use config::ClientConfig;
use gateway::ActivityGateway;
use services::{ActivityForm, IdGenerator};
use store::ActivityStore;

/// Shared application state, constructed once per session and passed to views.
#[derive(Clone)]
pub struct AppState {
    pub config: ClientConfig,
    pub store: Arc<ActivityStore>,
    pub form: ActivityForm,
}

impl AppState {
    /// Wire a store and form around `gateway`.
    pub fn new(
        config: ClientConfig,
        gateway: Arc<dyn ActivityGateway>,
        ids: Arc<dyn IdGenerator>,
    ) -> Self {
        let store = Arc::new(ActivityStore::from_config(gateway, &config));
        let form = ActivityForm::new(store.clone(), ids);
        Self {
            config,
            store,
            form,
        }
    }
}
