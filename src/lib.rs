pub mod platform;
pub mod error;
pub mod event;

// Re-export specific items for convenient access
pub use crate::platform::configuration::{Configuration, JsonConfiguration};
pub use crate::platform::context::{AnalyticsContext, AnalyticsContextBuilder, AppDetails};
pub use crate::platform::system::{DeviceDetails, StaticDeviceDetails};
pub use error::AnalyticsError;
pub use event::client::{DefaultEventClient, EventClient};
pub use event::locale::{format_locale, LocaleValue};
pub use event::observer::{ChannelObserver, EventObserver, LoggingObserver, RecordingObserver};
