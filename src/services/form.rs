// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity form workflow.
//!
//! Sits between the form view and the store:
//! 1. Produce initial values (empty for create, loaded for edit)
//! 2. Validate and recombine submitted values
//! 3. Route to create (with a generated id) or edit
//! 4. Clear the selection when the view is left

use std::sync::Arc;

use crate::error::FormError;
use crate::models::{ActivityFormValues, Submission};
use crate::services::IdGenerator;
use crate::store::ActivityStore;

/// Form-to-store boundary. Owns id generation so the store never does.
#[derive(Clone)]
pub struct ActivityForm {
    store: Arc<ActivityStore>,
    ids: Arc<dyn IdGenerator>,
}

impl ActivityForm {
    pub fn new(store: Arc<ActivityStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { store, ids }
    }

    pub fn store(&self) -> &ActivityStore {
        &self.store
    }

    /// Values to show when the form opens.
    ///
    /// With no route id the form is blank. With one, the activity is loaded
    /// (from the collection when possible) and split into form fields.
    pub async fn initial_values(
        &self,
        route_id: Option<&str>,
    ) -> Result<ActivityFormValues, FormError> {
        match route_id.map(str::trim).filter(|id| !id.is_empty()) {
            None => {
                self.store.open_create_form();
                Ok(ActivityFormValues::new())
            }
            Some(id) => {
                let activity = self.store.load_activity(id).await?;
                Ok(ActivityFormValues::from_activity(&activity))
            }
        }
    }

    /// Submit the form. Returns the id of the saved activity, for navigation.
    pub async fn submit(&self, values: ActivityFormValues) -> Result<String, FormError> {
        let submission = values.into_submission(self.ids.as_ref())?;
        let id = submission.activity().id.clone();

        match submission {
            Submission::Create(activity) => {
                tracing::info!(id = %id, "Submitting new activity");
                self.store.create_activity(activity).await?;
            }
            Submission::Edit(activity) => {
                tracing::info!(id = %id, "Submitting activity changes");
                self.store.edit_activity(activity).await?;
            }
        }

        Ok(id)
    }

    /// Called when the form view goes away.
    pub fn leave(&self) {
        self.store.clear_activity();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::InMemoryGateway;
    use crate::services::SequentialIds;

    fn form() -> (ActivityForm, Arc<InMemoryGateway>) {
        let gateway = Arc::new(InMemoryGateway::new());
        let store = Arc::new(ActivityStore::new(gateway.clone()));
        let form = ActivityForm::new(store, Arc::new(SequentialIds::new("new")));
        (form, gateway)
    }

    fn values() -> ActivityFormValues {
        ActivityFormValues {
            title: "Cooking class".to_string(),
            category: "food".to_string(),
            description: "Learn to make pasta".to_string(),
            date: "2021-09-10".to_string(),
            time: "18:00".to_string(),
            city: "Bologna".to_string(),
            venue: "Kitchen".to_string(),
            ..ActivityFormValues::default()
        }
    }

    #[tokio::test]
    async fn test_blank_form_enters_create_mode() {
        let (form, _) = form();
        let initial = form.initial_values(None).await.unwrap();
        assert!(initial.is_new());
        assert!(form.store().edit_mode());
        assert!(form.store().selected_activity().is_none());
    }

    #[tokio::test]
    async fn test_submit_new_values_creates_with_generated_id() {
        let (form, gateway) = form();
        let id = form.submit(values()).await.unwrap();

        assert_eq!(id, "new-1");
        assert!(gateway.stored("new-1").await.is_some());
        assert_eq!(
            form.store().selected_activity().map(|a| a.id),
            Some("new-1".to_string())
        );
    }

    #[tokio::test]
    async fn test_edit_round_trip_through_form() {
        let (form, gateway) = form();
        let id = form.submit(values()).await.unwrap();

        let mut loaded = form.initial_values(Some(id.as_str())).await.unwrap();
        assert_eq!(loaded.time, "18:00:00");
        loaded.title = "Advanced cooking class".to_string();

        let edited_id = form.submit(loaded).await.unwrap();
        assert_eq!(edited_id, id);
        assert_eq!(
            gateway.stored(&id).await.map(|a| a.title),
            Some("Advanced cooking class".to_string())
        );
        assert_eq!(gateway.calls().create, 1);
        assert_eq!(gateway.calls().update, 1);
    }

    #[tokio::test]
    async fn test_invalid_values_never_reach_the_gateway() {
        let (form, gateway) = form();
        let mut bad = values();
        bad.description = "meh".to_string();

        assert!(matches!(form.submit(bad).await, Err(FormError::Invalid(_))));
        assert_eq!(gateway.calls().create, 0);
    }

    #[tokio::test]
    async fn test_leave_clears_selection() {
        let (form, _) = form();
        form.submit(values()).await.unwrap();
        assert!(form.store().selected_activity().is_some());

        form.leave();
        assert!(form.store().selected_activity().is_none());
    }
}
