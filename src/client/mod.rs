//! HTTP clients for the `/users/{id}` endpoint.
//!
//! [`ApiClient`] blocks the calling thread, [`AsyncApiClient`] suspends the
//! calling task. Both open a fresh transport session per call, treat any
//! non-2xx status as a failure, and offer three layers of the same request:
//!
//! - `try_get_user*` returns the cause of a failure as a [`FetchError`]
//! - `get_user*` logs the failure and collapses it to `None`
//! - `lookup_user*` validates the body and classifies the outcome as a [`Lookup`]

pub mod asynchronous;
pub mod blocking;

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::warn;

use crate::models::{User, ValidationError};

pub use asynchronous::AsyncApiClient;
pub use blocking::ApiClient;

/// A decoded JSON object as returned by the API.
pub type UserFields = Map<String, Value>;

/// Why a single fetch failed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("response from {url} is not a JSON object: {reason}")]
    Decode { url: String, reason: String },
}

impl FetchError {
    /// Whether the server answered 404 for this user.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { status: 404, .. })
    }
}

/// Classified result of fetching and validating one user.
#[derive(Debug)]
pub enum Lookup {
    Found(User),
    NotFound,
    Failed(FetchError),
}

impl Lookup {
    /// Validate a fetch result. A 404 or an empty object becomes
    /// [`Lookup::NotFound`]; a body that is not a valid user is an error
    /// rather than an outcome.
    pub fn classify(result: Result<UserFields, FetchError>) -> Result<Self, ValidationError> {
        match result {
            Ok(fields) if fields.is_empty() => Ok(Lookup::NotFound),
            Ok(fields) => User::from_map(fields).map(Lookup::Found),
            Err(e) if e.is_not_found() => Ok(Lookup::NotFound),
            Err(e) => Ok(Lookup::Failed(e)),
        }
    }

    /// Drop the distinction between "not found" and "failed".
    pub fn into_user(self) -> Option<User> {
        match self {
            Lookup::Found(user) => Some(user),
            Lookup::NotFound | Lookup::Failed(_) => None,
        }
    }
}

/// Anything the CLI commands can fetch user records from.
///
/// Implementations return `None` for every failure and report the cause
/// themselves, so callers only see "got a record" or "did not".
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_user(&self, user_id: i64) -> Option<UserFields>;
}

/// `{base_url}/users/{id}`, joined verbatim.
pub(crate) fn user_url(base_url: &str, user_id: i64) -> String {
    format!("{base_url}/users/{user_id}")
}

pub(crate) fn decode_body(url: &str, body: &[u8]) -> Result<UserFields, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        reason: e.to_string(),
    })
}

/// Log a failed fetch and hide it behind `None`.
pub(crate) fn absorb(result: Result<UserFields, FetchError>) -> Option<UserFields> {
    match result {
        Ok(fields) => Some(fields),
        Err(e) => {
            warn!("Error fetching user: {e}");
            None
        }
    }
}
