//! userfetch: fetch and print user records from a JSON HTTP API
//! (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod env;
pub mod models;
pub mod output;
