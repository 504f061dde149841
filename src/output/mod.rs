//! Console rendering for user records.
//!
//! Renderers return strings; the commands decide which stream they go to.

pub mod terminal;
