//! Async client: the calling task yields while the request is in flight.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{FetchError, Lookup, UserFields, UserSource, absorb, decode_body, user_url};
use crate::config::ApiConfig;
use crate::constants::USER_AGENT;
use crate::models::ValidationError;

/// Non-blocking API client.
///
/// Holds no connection between calls: every request opens its own
/// `reqwest::Client` and drops it before returning, on success or error.
#[derive(Debug, Clone)]
pub struct AsyncApiClient {
    base_url: String,
    timeout: Option<Duration>,
}

impl AsyncApiClient {
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
    pub async fn try_get_user_async(&self, user_id: i64) -> Result<UserFields, FetchError> {
        let url = user_url(&self.base_url, user_id);
        debug!(%url, "GET (async)");

        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let session = builder.build()?;

        let response = session.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await?;
        decode_body(&url, &body)
    }

    /// Fetch the raw record for `user_id`. Failures are logged and
    /// returned as `None`.
    pub async fn get_user_async(&self, user_id: i64) -> Option<UserFields> {
        absorb(self.try_get_user_async(user_id).await)
    }

    /// Fetch and validate `user_id`.
    pub async fn lookup_user_async(&self, user_id: i64) -> Result<Lookup, ValidationError> {
        Lookup::classify(self.try_get_user_async(user_id).await)
    }
}

#[async_trait]
impl UserSource for AsyncApiClient {
    async fn fetch_user(&self, user_id: i64) -> Option<UserFields> {
        self.get_user_async(user_id).await
    }
}
