// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Observable state held by the activity store.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tokio::sync::watch;

use crate::models::Activity;

/// Asynchronous operation kinds that each own a lifecycle flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Lifecycle {
    LoadingInitial,
    Submitting,
    LoadingSingle,
}

/// Snapshot of everything the views render from.
///
/// Activities are keyed by id, so the collection holds at most one entry
/// per id. The selection is kept as an id and resolved on read, so it never
/// points at an activity that is not in the collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreState {
    pub(crate) activities: HashMap<String, Activity>,
    pub(crate) selected_id: Option<String>,
    pub(crate) edit_mode: bool,
    // In-flight call counts; a flag reads true while its count is non-zero.
    pub(crate) loading_initial: u32,
    pub(crate) submitting: u32,
    pub(crate) loading_single: u32,
}

impl StoreState {
    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Activity> {
        self.activities.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.activities.contains_key(id)
    }

    /// All activities ordered by date, ties broken by id.
    pub fn activities_by_date(&self) -> Vec<&Activity> {
        let mut activities: Vec<&Activity> = self.activities.values().collect();
        activities.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        activities
    }

    /// Activities bucketed by calendar day, each bucket ordered by time.
    pub fn grouped_by_date(&self) -> BTreeMap<NaiveDate, Vec<&Activity>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&Activity>> = BTreeMap::new();
        for activity in self.activities_by_date() {
            groups.entry(activity.date.date()).or_default().push(activity);
        }
        groups
    }

    pub fn selected_activity(&self) -> Option<&Activity> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.activities.get(id))
    }

    pub fn edit_mode(&self) -> bool {
        self.edit_mode
    }

    pub fn loading_initial(&self) -> bool {
        self.loading_initial > 0
    }

    pub fn submitting(&self) -> bool {
        self.submitting > 0
    }

    pub fn loading_single(&self) -> bool {
        self.loading_single > 0
    }

    /// Whether any gateway call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.loading_initial() || self.submitting() || self.loading_single()
    }

    pub(crate) fn select(&mut self, id: &str) {
        self.selected_id = self.activities.contains_key(id).then(|| id.to_string());
        self.edit_mode = false;
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected_id = None;
        self.edit_mode = false;
    }

    fn counter_mut(&mut self, flag: Lifecycle) -> &mut u32 {
        match flag {
            Lifecycle::LoadingInitial => &mut self.loading_initial,
            Lifecycle::Submitting => &mut self.submitting,
            Lifecycle::LoadingSingle => &mut self.loading_single,
        }
    }
}

/// Raises a lifecycle flag for the duration of one gateway call.
///
/// The flag is lowered either by [`InFlight::finish`], together with the
/// state change that completes the operation, or on drop. Drop covers
/// error returns and futures cancelled mid-call.
pub(crate) struct InFlight<'a> {
    state: &'a watch::Sender<StoreState>,
    flag: Lifecycle,
    done: bool,
}

impl<'a> InFlight<'a> {
    pub(crate) fn begin(state: &'a watch::Sender<StoreState>, flag: Lifecycle) -> Self {
        state.send_modify(|s| *s.counter_mut(flag) += 1);
        Self {
            state,
            flag,
            done: false,
        }
    }

    /// Apply `update` and lower the flag in a single notification.
    pub(crate) fn finish<F>(mut self, update: F)
    where
        F: FnOnce(&mut StoreState),
    {
        let flag = self.flag;
        self.state.send_modify(|s| {
            update(s);
            let count = s.counter_mut(flag);
            *count = count.saturating_sub(1);
        });
        self.done = true;
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if self.done {
            return;
        }
        let flag = self.flag;
        self.state.send_modify(|s| {
            let count = s.counter_mut(flag);
            *count = count.saturating_sub(1);
        });
    }
}
