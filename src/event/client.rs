use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

use super::analytics_event::{
    truncate, AnalyticsEvent, MAX_ATTRIBUTE_VALUE_LENGTH, MAX_NAME_LENGTH,
};
use super::internal_event::InternalEvent;
use super::locale::format_locale;
use super::observer::EventObserver;
use crate::error::{AnalyticsError, Result};
use crate::platform::configuration::{ANALYTICS_ENABLED_KEY, VERSION_KEY};
use crate::platform::context::AnalyticsContext;
use crate::platform::time::now_millis;

pub const DEFAULT_VERSION_KEY: &str = "ver";

/// Creates analytics events and fans recorded events out to observers.
pub trait EventClient {
    fn create_event(&self, event_type: &str) -> Result<AnalyticsEvent>;
    fn record_event(&self, event: &AnalyticsEvent);

    fn add_event_observer(&mut self, observer: Arc<dyn EventObserver>);
    fn remove_event_observer(&mut self, observer: &Arc<dyn EventObserver>);

    fn add_global_attribute(&mut self, name: &str, value: &str);
    fn add_global_attribute_for(&mut self, event_type: &str, name: &str, value: &str);
    fn add_global_metric(&mut self, name: &str, value: f64);
    fn add_global_metric_for(&mut self, event_type: &str, name: &str, value: f64);
    fn remove_global_attribute(&mut self, name: &str);
    fn remove_global_attribute_for(&mut self, event_type: &str, name: &str);
    fn remove_global_metric(&mut self, name: &str);
    fn remove_global_metric_for(&mut self, event_type: &str, name: &str);
}

pub struct DefaultEventClient {
    context: Arc<AnalyticsContext>,
    allows_events: bool,
    observers: Vec<Arc<dyn EventObserver>>,
    global_attributes: HashMap<String, String>,
    global_metrics: HashMap<String, f64>,
    typed_attributes: HashMap<String, HashMap<String, String>>,
    typed_metrics: HashMap<String, HashMap<String, f64>>,
}

impl DefaultEventClient {
    pub fn new(context: Arc<AnalyticsContext>, allows_events: bool) -> Self {
        Self {
            context,
            allows_events,
            observers: Vec::new(),
            global_attributes: HashMap::new(),
            global_metrics: HashMap::new(),
            typed_attributes: HashMap::new(),
            typed_metrics: HashMap::new(),
        }
    }

    pub fn context(&self) -> &AnalyticsContext {
        &self.context
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Whether recorded events currently reach observers.
    pub fn is_enabled(&self) -> bool {
        self.allows_events
            && self
                .context
                .configuration()
                .opt_boolean(ANALYTICS_ENABLED_KEY, true)
    }

    /// Stamp an event with device, app and global data.
    ///
    /// Later layers win on key collisions: global values, then values for
    /// this event type, then the event's own.
    fn build_internal_event(&self, event: &AnalyticsEvent) -> InternalEvent {
        let context = &self.context;
        let device = context.device_details();
        let app = context.app_details();

        let mut attributes = self.global_attributes.clone();
        let mut metrics = self.global_metrics.clone();
        if let Some(typed) = self.typed_attributes.get(event.event_type()) {
            attributes.extend(typed.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        if let Some(typed) = self.typed_metrics.get(event.event_type()) {
            metrics.extend(typed.iter().map(|(k, v)| (k.clone(), *v)));
        }
        attributes.extend(event.all_attributes().iter().map(|(k, v)| (k.clone(), v.clone())));
        metrics.extend(event.all_metrics().iter().map(|(k, v)| (k.clone(), *v)));

        InternalEvent {
            event_type: event.event_type().to_string(),
            timestamp: event.timestamp(),
            unique_id: context.unique_id().to_string(),
            session: event.session().clone(),
            sdk_name: context.sdk_info().name.clone(),
            sdk_version: context.sdk_info().version.clone(),
            platform: device.platform(),
            platform_version: device.platform_version(),
            make: device.make(),
            model: device.model(),
            locale: event.locale().to_string(),
            carrier: device.carrier(),
            app_package_name: app.package_name.clone(),
            app_version_name: app.version_name.clone(),
            app_version_code: app.version_code.clone(),
            app_title: app.title.clone(),
            attributes,
            metrics,
            version_key: context
                .configuration()
                .opt_string(VERSION_KEY, DEFAULT_VERSION_KEY),
        }
    }
}

impl EventClient for DefaultEventClient {
    fn create_event(&self, event_type: &str) -> Result<AnalyticsEvent> {
        if event_type.is_empty() {
            return Err(AnalyticsError::InvalidEventType(event_type.to_string()));
        }

        let locale = format_locale(&self.context.device_details().locale());
        Ok(AnalyticsEvent::new(
            event_type,
            now_millis(),
            self.context.session().clone(),
            locale,
        ))
    }

    fn record_event(&self, event: &AnalyticsEvent) {
        if !self.is_enabled() {
            debug!(event_type = %event.event_type(), "Analytics disabled, event not recorded");
            return;
        }

        let internal = Arc::new(self.build_internal_event(event));
        trace!(
            event_type = %internal.event_type(),
            observers = self.observers.len(),
            "Notifying observers"
        );
        for observer in &self.observers {
            observer.notify(Arc::clone(&internal));
        }
    }

    fn add_event_observer(&mut self, observer: Arc<dyn EventObserver>) {
        self.observers.push(observer);
    }

    fn remove_event_observer(&mut self, observer: &Arc<dyn EventObserver>) {
        self.observers.retain(|registered| !same_observer(registered, observer));
    }

    fn add_global_attribute(&mut self, name: &str, value: &str) {
        let (name, value) = clip_attribute(name, value);
        self.global_attributes.insert(name, value);
    }

    fn add_global_attribute_for(&mut self, event_type: &str, name: &str, value: &str) {
        let (name, value) = clip_attribute(name, value);
        self.typed_attributes
            .entry(event_type.to_string())
            .or_default()
            .insert(name, value);
    }

    fn add_global_metric(&mut self, name: &str, value: f64) {
        self.global_metrics
            .insert(truncate("metric name", name, MAX_NAME_LENGTH), value);
    }

    fn add_global_metric_for(&mut self, event_type: &str, name: &str, value: f64) {
        self.typed_metrics
            .entry(event_type.to_string())
            .or_default()
            .insert(truncate("metric name", name, MAX_NAME_LENGTH), value);
    }

    fn remove_global_attribute(&mut self, name: &str) {
        self.global_attributes.remove(name);
    }

    fn remove_global_attribute_for(&mut self, event_type: &str, name: &str) {
        if let Some(typed) = self.typed_attributes.get_mut(event_type) {
            typed.remove(name);
        }
    }

    fn remove_global_metric(&mut self, name: &str) {
        self.global_metrics.remove(name);
    }

    fn remove_global_metric_for(&mut self, event_type: &str, name: &str) {
        if let Some(typed) = self.typed_metrics.get_mut(event_type) {
            typed.remove(name);
        }
    }
}

fn clip_attribute(name: &str, value: &str) -> (String, String) {
    (
        truncate("attribute name", name, MAX_NAME_LENGTH),
        truncate("attribute value", value, MAX_ATTRIBUTE_VALUE_LENGTH),
    )
}

// Identity by data pointer; vtable pointers are not unique per type.
fn same_observer(a: &Arc<dyn EventObserver>, b: &Arc<dyn EventObserver>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}
