use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::collections::HashMap;

use crate::platform::session::Session;
use crate::platform::time::format_iso8601;

/// Event payload schema version, written under the configured version key.
pub const EVENT_SCHEMA_VERSION: &str = "v2.0";

/// Fully stamped, immutable record of one recorded event.
///
/// Built once per `record_event` and shared with every observer.
#[derive(Debug, Clone, PartialEq)]
pub struct InternalEvent {
    pub(crate) event_type: String,
    pub(crate) timestamp: i64,
    pub(crate) unique_id: String,
    pub(crate) session: Session,
    pub(crate) sdk_name: String,
    pub(crate) sdk_version: String,
    pub(crate) platform: String,
    pub(crate) platform_version: String,
    pub(crate) make: String,
    pub(crate) model: String,
    pub(crate) locale: String,
    pub(crate) carrier: String,
    pub(crate) app_package_name: String,
    pub(crate) app_version_name: String,
    pub(crate) app_version_code: String,
    pub(crate) app_title: String,
    pub(crate) attributes: HashMap<String, String>,
    pub(crate) metrics: HashMap<String, f64>,
    pub(crate) version_key: String,
}

impl InternalEvent {
    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    /// Milliseconds since the Unix epoch.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    pub fn metrics(&self) -> &HashMap<String, f64> {
        &self.metrics
    }

    /// Wire representation of the event.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        object.insert("event_type".into(), json!(self.event_type));
        object.insert("timestamp".into(), json!(format_iso8601(self.timestamp)));
        object.insert("unique_id".into(), json!(self.unique_id));
        object.insert(
            "session".into(),
            json!({
                "id": self.session.id,
                "startTimestamp": format_iso8601(self.session.start_timestamp),
            }),
        );
        object.insert("sdk_name".into(), json!(self.sdk_name));
        object.insert("sdk_version".into(), json!(self.sdk_version));
        object.insert("platform".into(), json!(self.platform));
        object.insert("platform_version".into(), json!(self.platform_version));
        object.insert("make".into(), json!(self.make));
        object.insert("model".into(), json!(self.model));
        object.insert("locale".into(), json!(self.locale));
        object.insert("carrier".into(), json!(self.carrier));
        object.insert("app_package_name".into(), json!(self.app_package_name));
        object.insert("app_version_name".into(), json!(self.app_version_name));
        object.insert("app_version_code".into(), json!(self.app_version_code));
        object.insert("app_title".into(), json!(self.app_title));
        object.insert("attributes".into(), json!(self.attributes));
        object.insert("metrics".into(), json!(self.metrics));
        object.insert(self.version_key.clone(), json!(EVENT_SCHEMA_VERSION));
        Value::Object(object)
    }

    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl Serialize for InternalEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}
