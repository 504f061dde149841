//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names,
//! and the default API endpoint so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "userfetch";

/// Crate version, as reported by `--version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `User-Agent` header sent with every request.
pub const USER_AGENT: &str = concat!("userfetch/", env!("CARGO_PKG_VERSION"));

/// API root used when neither flags, environment, nor config set one.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Number of users `list-users` fetches by default.
pub const DEFAULT_LIST_COUNT: i64 = 5;

/// Local config filename (e.g. `.userfetch.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".userfetch.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "userfetch";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_BASE_URL: &str = "USERFETCH_BASE_URL";
pub const ENV_TIMEOUT: &str = "USERFETCH_TIMEOUT";
