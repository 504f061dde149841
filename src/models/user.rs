//! The validated user record.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// A JSON record did not have the shape of a [`User`].
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("invalid user record: expected a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid user record: {0}")]
    Field(#[from] serde_json::Error),
}

/// One remote account record.
///
/// Built from decoded JSON via [`User::from_map`] or [`User::from_value`];
/// extra keys are ignored and `active` defaults to `true`. `id` and `active`
/// accept values that convert losslessly (`"1"`, `1.0`, `"yes"`, `0`);
/// `name` and `email` must be strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(deserialize_with = "lenient_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default = "default_active", deserialize_with = "lenient_bool")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// Integers, floats with no fractional part, and integer strings.
fn lenient_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| D::Error::custom(format!("id: expected an integer, got {value}")))
}

/// Booleans, `0`/`1`, and the usual yes/no spellings.
fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    let parsed = match &value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => Some(false),
            Some(f) if f == 1.0 => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim().to_lowercase().as_str() {
            "1" | "on" | "t" | "true" | "y" | "yes" => Some(true),
            "0" | "off" | "f" | "false" | "n" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    };
    parsed.ok_or_else(|| D::Error::custom(format!("active: expected a boolean, got {value}")))
}

impl User {
    /// Validate a decoded JSON object into a user.
    pub fn from_map(fields: Map<String, Value>) -> Result<Self, ValidationError> {
        Ok(serde_json::from_value(Value::Object(fields))?)
    }

    /// Validate an arbitrary JSON value, rejecting anything but an object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(fields) => Self::from_map(fields),
            other => Err(ValidationError::NotAnObject(json_kind(&other))),
        }
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.email)
    }
}

/// Convert a batch of raw records, failing on the first invalid one.
pub fn process_users(records: Vec<Value>) -> Result<Vec<User>, ValidationError> {
    records.into_iter().map(User::from_value).collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
