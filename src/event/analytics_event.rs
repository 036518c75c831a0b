use std::collections::HashMap;
use tracing::warn;

use crate::platform::session::Session;

pub const MAX_EVENT_TYPE_LENGTH: usize = 50;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MAX_ATTRIBUTE_VALUE_LENGTH: usize = 1000;
/// Attributes and metrics share one budget per event.
pub const MAX_ATTRIBUTES_AND_METRICS: usize = 40;

/// Caller-facing analytics event.
///
/// Created by an event client, which fixes the event type, timestamp,
/// session and device locale. Callers then attach their own attributes and
/// metrics before handing it back to `record_event`.
///
/// There is no public constructor; events cannot be deserialized either.
///
/// ```compile_fail
/// use mobile_analytics::event::analytics_event::AnalyticsEvent;
///
/// let event: AnalyticsEvent = serde_json::from_str(r#"{"event_type": ""}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsEvent {
    event_type: String,
    timestamp: i64,
    session: Session,
    locale: String,
    attributes: HashMap<String, String>,
    metrics: HashMap<String, f64>,
}

impl AnalyticsEvent {
    pub(crate) fn new(
        event_type: &str,
        timestamp: i64,
        session: Session,
        locale: String,
    ) -> Self {
        Self {
            event_type: truncate("event type", event_type, MAX_EVENT_TYPE_LENGTH),
            timestamp,
            session,
            locale,
            attributes: HashMap::new(),
            metrics: HashMap::new(),
        }
    }

    pub fn event_type(&self) -> &str {
        &self.event_type
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Formatted device locale captured at creation.
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn add_attribute(&mut self, name: &str, value: &str) {
        let name = truncate("attribute name", name, MAX_NAME_LENGTH);
        if !self.attributes.contains_key(&name) && !self.has_room(&name) {
            return;
        }
        let value = truncate("attribute value", value, MAX_ATTRIBUTE_VALUE_LENGTH);
        self.attributes.insert(name, value);
    }

    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        self.add_attribute(name, value);
        self
    }

    pub fn add_metric(&mut self, name: &str, value: f64) {
        let name = truncate("metric name", name, MAX_NAME_LENGTH);
        if !self.metrics.contains_key(&name) && !self.has_room(&name) {
            return;
        }
        self.metrics.insert(name, value);
    }

    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.add_metric(name, value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn has_metric(&self, name: &str) -> bool {
        self.metrics.contains_key(name)
    }

    pub fn remove_attribute(&mut self, name: &str) -> Option<String> {
        self.attributes.remove(name)
    }

    pub fn remove_metric(&mut self, name: &str) -> Option<f64> {
        self.metrics.remove(name)
    }

    pub fn all_attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    pub fn all_metrics(&self) -> &HashMap<String, f64> {
        &self.metrics
    }

    fn has_room(&self, name: &str) -> bool {
        let used = self.attributes.len() + self.metrics.len();
        if used >= MAX_ATTRIBUTES_AND_METRICS {
            warn!(
                event_type = %self.event_type,
                name,
                limit = MAX_ATTRIBUTES_AND_METRICS,
                "Attribute/metric limit reached, dropping entry"
            );
            return false;
        }
        true
    }
}

/// Clip `value` to `max` characters, logging when anything is cut.
pub(crate) fn truncate(what: &str, value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    warn!(what, max, "Value too long, truncating");
    value.chars().take(max).collect()
}
