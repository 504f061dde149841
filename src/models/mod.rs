//! Shared types used across all modules.
//!
//! The clients hand back raw JSON objects; everything that needs a typed
//! record goes through [`User`] here.

pub mod user;

pub use user::{User, ValidationError, process_users};
