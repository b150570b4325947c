//! HTTP profile store — client for the remote Jeevan profile resource.
//!
//! Talks to `GET`/`PUT {base}/api/profile` exchanging the wire record as
//! JSON. A 404 on load is the not-found case, not an error. Request
//! timeouts are handled at the client level; the controller above this
//! boundary has no timeout policy of its own.

use std::time::Duration;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::StoreError;
use crate::profile::HealthProfile;
use crate::store::wire::{self, ProfileRecord};
use crate::store::ProfileStore;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote profile store backed by the Jeevan REST backend.
pub struct HttpProfileStore {
    client: reqwest::Client,
    base_url: String,
    token: Option<SecretString>,
}

impl HttpProfileStore {
    /// Create a client for the given base URL (e.g. `https://api.example.com`),
    /// optionally sending a bearer token on every request.
    pub fn new(base_url: impl Into<String>, token: Option<SecretString>) -> Result<Self, StoreError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| StoreError::Http(format!("Failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    fn profile_url(&self) -> String {
        format!("{}/api/profile", self.base_url)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }
}

#[async_trait]
impl ProfileStore for HttpProfileStore {
    async fn load_profile(&self) -> Result<Option<HealthProfile>, StoreError> {
        let url = self.profile_url();
        let response = self
            .authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| StoreError::Http(format!("GET {url}: {e}")))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let record: ProfileRecord = response
            .json()
            .await
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        debug!(url = %url, "Profile fetched from remote store");
        Ok(Some(wire::decode(&record)))
    }

    async fn save_profile(&self, profile: &HealthProfile) -> Result<(), StoreError> {
        let url = self.profile_url();
        let record = wire::encode(profile);
        let response = self
            .authorize(self.client.put(&url))
            .json(&record)
            .send()
            .await
            .map_err(|e| StoreError::Http(format!("PUT {url}: {e}")))?;

        if !response.status().is_success() {
            return Err(StoreError::Status {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        debug!(url = %url, "Profile saved to remote store");
        Ok(())
    }
}
