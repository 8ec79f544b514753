// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form-editable projection of an [`Activity`].
//!
//! The form edits date and time as two text fields while the activity keeps
//! one timestamp. [`ActivityFormValues::from_activity`] splits it, and
//! [`ActivityFormValues::into_submission`] merges it back right before the
//! values reach the store.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use validator::Validate;

use crate::error::FormError;
use crate::models::{Activity, Category};
use crate::services::IdGenerator;
use crate::time_utils;

/// Form field names, as submitted by the browser.
pub mod fields {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const CATEGORY: &str = "category";
    pub const DESCRIPTION: &str = "description";
    pub const DATE: &str = "date";
    pub const TIME: &str = "time";
    pub const CITY: &str = "city";
    pub const VENUE: &str = "venue";
}

/// Editable activity. Every field is text and defaults to `""`.
///
/// An empty `id` marks an activity that has not been saved yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ActivityFormValues {
    pub id: String,
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,
    pub category: String,
    #[validate(length(min = 5, message = "description must be at least 5 characters"))]
    pub description: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM[:SS[.fff]]`
    pub time: String,
    pub city: String,
    pub venue: String,
}

/// Where validated form values should go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// New activity with a freshly generated id.
    Create(Activity),
    /// Changes to an activity that already has an id.
    Edit(Activity),
}

impl Submission {
    pub fn activity(&self) -> &Activity {
        match self {
            Submission::Create(activity) | Submission::Edit(activity) => activity,
        }
    }
}

impl ActivityFormValues {
    /// Empty values for the "create" form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Values for the "edit" form, with the timestamp split in two.
    pub fn from_activity(activity: &Activity) -> Self {
        let (date, time) = time_utils::split_timestamp(activity.date);
        Self {
            id: activity.id.clone(),
            title: activity.title.clone(),
            category: activity.category.to_string(),
            description: activity.description.clone(),
            date,
            time,
            city: activity.city.clone(),
            venue: activity.venue.clone(),
        }
    }

    /// Build values from a map of submitted fields. Unknown keys are ignored.
    ///
    /// A combined `date` (as sent by a `datetime-local` input) is split when
    /// no separate `time` field was submitted.
    pub fn from_fields(submitted: &HashMap<String, String>) -> Self {
        let get = |key: &str| submitted.get(key).cloned().unwrap_or_default();

        let mut values = Self {
            id: get(fields::ID),
            title: get(fields::TITLE),
            category: get(fields::CATEGORY),
            description: get(fields::DESCRIPTION),
            date: get(fields::DATE),
            time: get(fields::TIME),
            city: get(fields::CITY),
            venue: get(fields::VENUE),
        };

        if values.time.is_empty() {
            if let Some(combined) = time_utils::parse_timestamp(&values.date) {
                let (date, time) = time_utils::split_timestamp(combined);
                values.date = date;
                values.time = time;
            }
        }

        values
    }

    /// Whether these values describe an activity that was never saved.
    pub fn is_new(&self) -> bool {
        self.id.trim().is_empty()
    }

    /// Merge the date and time fields into one timestamp.
    pub fn combined_date(&self) -> Result<NaiveDateTime, FormError> {
        let date = time_utils::parse_date(&self.date)
            .ok_or_else(|| FormError::InvalidDate(self.date.clone()))?;
        let time = time_utils::parse_time(&self.time)
            .ok_or_else(|| FormError::InvalidTime(self.time.clone()))?;
        Ok(date.and_time(time))
    }

    /// Recombined field map: `date` holds the merged timestamp and the
    /// separate `time` key is gone.
    pub fn into_fields(self) -> Result<BTreeMap<String, String>, FormError> {
        let date = self.combined_date()?;
        Ok(BTreeMap::from([
            (fields::ID.to_string(), self.id),
            (fields::TITLE.to_string(), self.title),
            (fields::CATEGORY.to_string(), self.category),
            (fields::DESCRIPTION.to_string(), self.description),
            (fields::DATE.to_string(), time_utils::format_timestamp(date)),
            (fields::CITY.to_string(), self.city),
            (fields::VENUE.to_string(), self.venue),
        ]))
    }

    /// Validate and convert into an activity carrying `id`.
    pub fn to_activity(&self, id: String) -> Result<Activity, FormError> {
        self.validate()?;
        let category: Category = self.category.parse().map_err(FormError::UnknownCategory)?;
        let date = self.combined_date()?;

        Ok(Activity {
            id,
            title: self.title.trim().to_string(),
            category,
            description: self.description.clone(),
            date,
            city: self.city.clone(),
            venue: self.venue.clone(),
        })
    }

    /// Validate, recombine and route the values.
    ///
    /// Only an empty id draws a new one from `ids`; an existing id is kept.
    pub fn into_submission(self, ids: &dyn IdGenerator) -> Result<Submission, FormError> {
        if self.is_new() {
            let mut activity = self.to_activity(String::new())?;
            activity.id = ids.next_id();
            Ok(Submission::Create(activity))
        } else {
            let activity = self.to_activity(self.id.trim().to_string())?;
            Ok(Submission::Edit(activity))
        }
    }
}
