//! Event creation, stamping and observer fan-out.
//!
//! An [`client::EventClient`] creates [`analytics_event::AnalyticsEvent`]s
//! carrying the device locale at creation time. Recording an event turns it
//! into a single immutable [`internal_event::InternalEvent`] that every
//! registered [`observer::EventObserver`] receives, in registration order,
//! before `record_event` returns.

pub mod analytics_event;
pub mod client;
pub mod internal_event;
pub mod locale;
pub mod observer;
