//! Environment variable abstraction for testability.
//!
//! The binary reads through [`Env::real()`]; tests build an [`Env::mock()`]
//! from a `HashMap` instead of mutating the process environment.

use std::collections::HashMap;

/// Environment variable reader used by config loading.
#[derive(Clone, Debug, Default)]
pub struct Env {
    overrides: Option<HashMap<String, String>>,
}

impl Env {
    /// Read from the real process environment.
    pub fn real() -> Self {
        Self { overrides: None }
    }

    /// Serve lookups from explicit key-value pairs only.
    #[cfg(test)]
    pub fn mock(vars: impl IntoIterator<Item = (impl Into<String>, impl Into<String>)>) -> Self {
        Self {
            overrides: Some(
                vars.into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    /// Look up a variable, treating empty and whitespace-only values as unset.
    pub fn get(&self, name: &str) -> Option<String> {
        let value = match &self.overrides {
            Some(map) => map.get(name).cloned(),
            None => std::env::var(name).ok(),
        }?;
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_env_sees_cargo_variables() {
        assert!(Env::real().get("CARGO_PKG_NAME").is_some());
    }

    #[test]
    fn mock_env_returns_set_values() {
        let env = Env::mock([("USERFETCH_BASE_URL", "http://localhost:3000")]);
        assert_eq!(
            env.get("USERFETCH_BASE_URL").as_deref(),
            Some("http://localhost:3000")
        );
        assert!(env.get("USERFETCH_TIMEOUT").is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let env = Env::mock([("EMPTY", ""), ("SPACES", "   "), ("PADDED", " 7 ")]);
        assert!(env.get("EMPTY").is_none());
        assert!(env.get("SPACES").is_none());
        assert_eq!(env.get("PADDED").as_deref(), Some("7"));
    }
}
