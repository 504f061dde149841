//! The work behind each CLI subcommand.
//!
//! Commands read from any [`UserSource`] and write to caller-supplied
//! streams, so the binary passes stdout/stderr and tests pass buffers.
//! Fetches run one at a time in ascending id order. A failed fetch never
//! aborts a command; a record that fails validation does.

use std::io::Write;

use thiserror::Error;

use crate::client::{UserFields, UserSource};
use crate::models::{User, ValidationError};
use crate::output::terminal;

/// Errors that end a command early.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Fetch one record, counting an empty object as no record.
async fn fetch_record(source: &dyn UserSource, user_id: i64) -> Option<UserFields> {
    source
        .fetch_user(user_id)
        .await
        .filter(|fields| !fields.is_empty())
}

/// `get-user`: print one user, or a not-found notice on `err`.
pub async fn get_user(
    source: &dyn UserSource,
    user_id: i64,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<(), CommandError> {
    match fetch_record(source, user_id).await {
        Some(fields) => {
            let user = User::from_map(fields)?;
            out.write_all(terminal::user_details(&user).as_bytes())?;
        }
        None => err.write_all(terminal::not_found(user_id).as_bytes())?,
    }
    Ok(())
}

/// `list-users`: print ids `1..=count`, silently skipping failed fetches.
pub async fn list_users(
    source: &dyn UserSource,
    count: i64,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    out.write_all(terminal::progress(count).as_bytes())?;
    out.flush()?;

    for user_id in 1..=count {
        if let Some(fields) = fetch_record(source, user_id).await {
            let user = User::from_map(fields)?;
            out.write_all(terminal::user_summary(&user).as_bytes())?;
        }
    }
    Ok(())
}

/// `demo`: fetch user 1 through `blocking` and user 2 through `suspending`.
pub async fn demo(
    blocking: &dyn UserSource,
    suspending: &dyn UserSource,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    if let Some(fields) = fetch_record(blocking, 1).await {
        let user = User::from_map(fields)?;
        out.write_all(terminal::labelled("User", &user).as_bytes())?;
    }

    if let Some(fields) = fetch_record(suspending, 2).await {
        let user = User::from_map(fields)?;
        out.write_all(terminal::labelled("Async User", &user).as_bytes())?;
    }
    Ok(())
}
