use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

use crate::error::{AnalyticsError, Result};

/// Key controlling whether recorded events reach observers.
pub const ANALYTICS_ENABLED_KEY: &str = "isAnalyticsEnabled";

/// Key naming the JSON field that carries the event schema version.
pub const VERSION_KEY: &str = "versionKey";

/// Typed, defaulting lookups over client configuration.
///
/// Lookups never fail: a missing key or a value of the wrong type yields
/// the supplied default.
pub trait Configuration: Send + Sync {
    fn opt_string(&self, key: &str, default: &str) -> String;
    fn opt_boolean(&self, key: &str, default: bool) -> bool;
    fn opt_int(&self, key: &str, default: i64) -> i64;
    fn opt_double(&self, key: &str, default: f64) -> f64;
}

/// Configuration backed by a flat JSON object.
#[derive(Debug, Clone, Default)]
pub struct JsonConfiguration {
    values: Map<String, Value>,
}

impl JsonConfiguration {
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Parse a JSON document. The top level must be an object.
    pub fn from_json_str(content: &str) -> Result<Self> {
        match serde_json::from_str::<Value>(content)? {
            Value::Object(values) => Ok(Self { values }),
            other => Err(AnalyticsError::Config(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Load from a JSON file. A missing file is an error here; callers that
    /// treat configuration as optional should check existence first.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Configuration for JsonConfiguration {
    fn opt_string(&self, key: &str, default: &str) -> String {
        self.values
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or(default)
            .to_string()
    }

    fn opt_boolean(&self, key: &str, default: bool) -> bool {
        self.values.get(key).and_then(Value::as_bool).unwrap_or(default)
    }

    fn opt_int(&self, key: &str, default: i64) -> i64 {
        self.values.get(key).and_then(Value::as_i64).unwrap_or(default)
    }

    fn opt_double(&self, key: &str, default: f64) -> f64 {
        self.values.get(key).and_then(Value::as_f64).unwrap_or(default)
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
