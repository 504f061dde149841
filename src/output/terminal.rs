//! Plain-text terminal rendering.
//!
//! Every line is unstyled so redirected stdout and stderr carry exact text.

use crate::models::User;

/// The four labelled lines printed by `get-user`.
pub fn user_details(user: &User) -> String {
    format!(
        "User ID: {}\nName: {}\nEmail: {}\nActive: {}\n",
        user.id, user.name, user.email, user.active
    )
}

/// One `{id}: {name} ({email})` line for `list-users`.
pub fn user_summary(user: &User) -> String {
    format!("{}: {user}\n", user.id)
}

/// `{label}: {name} ({email})`, used by `demo`.
pub fn labelled(label: &str, user: &User) -> String {
    format!("{label}: {user}\n")
}

/// Progress line printed before a listing starts.
pub fn progress(count: i64) -> String {
    format!("Fetching {count} users...\n")
}

/// Notice for a user that could not be fetched.
pub fn not_found(user_id: i64) -> String {
    format!("User {user_id} not found\n")
}
