// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! REST client for the activities service.
//!
//! Endpoints:
//! - `GET  {base}/activities`
//! - `GET  {base}/activities/{id}`
//! - `POST {base}/activities`
//! - `PUT  {base}/activities/{id}`

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::gateway::ActivityGateway;
use crate::models::Activity;

/// Activities API client.
#[derive(Clone)]
pub struct HttpActivityGateway {
    http: reqwest::Client,
    base_url: String,
}

impl HttpActivityGateway {
    /// Create a client for the given API base URL (e.g. `http://localhost:5000/api`).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn activities_url(&self) -> String {
        format!("{}/activities", self.base_url)
    }

    fn activity_url(&self, id: &str) -> String {
        format!("{}/activities/{}", self.base_url, urlencoding::encode(id))
    }

    /// Generic GET request with JSON response.
    async fn get_json<T: for<'de> Deserialize<'de>>(
        &self,
        url: &str,
        id: Option<&str>,
    ) -> Result<T, TransportError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        let response = check_response(response, id).await?;
        response
            .json()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ActivityGateway for HttpActivityGateway {
    async fn list(&self) -> Result<Vec<Activity>, TransportError> {
        self.get_json(&self.activities_url(), None).await
    }

    async fn get(&self, id: &str) -> Result<Activity, TransportError> {
        self.get_json(&self.activity_url(id), Some(id)).await
    }

    async fn create(&self, activity: &Activity) -> Result<(), TransportError> {
        let response = self
            .http
            .post(self.activities_url())
            .json(activity)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        check_response(response, None).await?;
        Ok(())
    }

    async fn update(&self, activity: &Activity) -> Result<(), TransportError> {
        let response = self
            .http
            .put(self.activity_url(&activity.id))
            .json(activity)
            .send()
            .await
            .map_err(|e| TransportError::Network(e.to_string()))?;

        check_response(response, Some(&activity.id)).await?;
        Ok(())
    }
}

/// Check response status and return error if not successful.
async fn check_response(
    response: reqwest::Response,
    id: Option<&str>,
) -> Result<reqwest::Response, TransportError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();

    if status.as_u16() == 404 {
        if let Some(id) = id {
            return Err(TransportError::NotFound(id.to_string()));
        }
    }

    if status.as_u16() == 503 {
        tracing::warn!("Activities service unavailable (503)");
        return Err(TransportError::Unavailable(body));
    }

    Err(TransportError::Http {
        status: status.as_u16(),
        body,
    })
}
