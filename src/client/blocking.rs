//! Blocking client: each call holds the calling thread until the response
//! arrives or the transport fails.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::{FetchError, Lookup, UserFields, UserSource, absorb, decode_body, user_url};
use crate::config::ApiConfig;
use crate::constants::USER_AGENT;
use crate::models::ValidationError;

/// Synchronous API client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    timeout: Option<Duration>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Build a client from resolved configuration.
    pub fn from_config(api: &ApiConfig) -> Self {
        Self::new(api.base_url.clone()).with_timeout(api.timeout())
    }

    /// Bound each request by `timeout`; `None` waits indefinitely.
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw record for `user_id`, reporting why it failed.
    pub fn try_get_user(&self, user_id: i64) -> Result<UserFields, FetchError> {
        let url = user_url(&self.base_url, user_id);
        debug!(%url, "GET (blocking)");

        // The session lives for this call only.
        let session = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .build()?;

        let response = session.get(&url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes()?;
        decode_body(&url, &body)
    }

    /// Fetch the raw record for `user_id`. Failures are logged and
    /// returned as `None`.
    pub fn get_user(&self, user_id: i64) -> Option<UserFields> {
        absorb(self.try_get_user(user_id))
    }

    /// Fetch and validate `user_id`.
    pub fn lookup_user(&self, user_id: i64) -> Result<Lookup, ValidationError> {
        Lookup::classify(self.try_get_user(user_id))
    }
}

#[async_trait]
impl UserSource for ApiClient {
    /// Runs the blocking request on tokio's blocking pool.
    async fn fetch_user(&self, user_id: i64) -> Option<UserFields> {
        let client = self.clone();
        match tokio::task::spawn_blocking(move || client.get_user(user_id)).await {
            Ok(fields) => fields,
            Err(e) => {
                warn!("Error fetching user: {e}");
                None
            }
        }
    }
}
