use std::sync::Arc;
use uuid::Uuid;

use super::configuration::{Configuration, JsonConfiguration};
use super::session::Session;
use super::system::{DeviceDetails, StaticDeviceDetails};

pub const DEFAULT_SDK_NAME: &str = "mobile-analytics-rs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkInfo {
    pub name: String,
    pub version: String,
}

impl Default for SdkInfo {
    fn default() -> Self {
        Self {
            name: DEFAULT_SDK_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Facts about the host application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppDetails {
    pub package_name: String,
    pub version_name: String,
    pub version_code: String,
    pub title: String,
}

/// Everything an event client needs to stamp an event: who is sending,
/// from which device, under which configuration and session.
pub struct AnalyticsContext {
    sdk_info: SdkInfo,
    unique_id: String,
    configuration: Arc<dyn Configuration>,
    device_details: Arc<dyn DeviceDetails>,
    app_details: AppDetails,
    session: Session,
}

impl AnalyticsContext {
    pub fn sdk_info(&self) -> &SdkInfo {
        &self.sdk_info
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn configuration(&self) -> &dyn Configuration {
        self.configuration.as_ref()
    }

    pub fn device_details(&self) -> &dyn DeviceDetails {
        self.device_details.as_ref()
    }

    pub fn app_details(&self) -> &AppDetails {
        &self.app_details
    }

    pub fn session(&self) -> &Session {
        &self.session
    }
}

impl std::fmt::Debug for AnalyticsContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsContext")
            .field("sdk_info", &self.sdk_info)
            .field("unique_id", &self.unique_id)
            .field("app_details", &self.app_details)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct AnalyticsContextBuilder {
    sdk_info: Option<SdkInfo>,
    unique_id: Option<String>,
    configuration: Option<Arc<dyn Configuration>>,
    device_details: Option<Arc<dyn DeviceDetails>>,
    app_details: Option<AppDetails>,
    session: Option<Session>,
}

impl AnalyticsContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sdk_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.sdk_info = Some(SdkInfo {
            name: name.into(),
            version: version.into(),
        });
        self
    }

    pub fn with_unique_id_value(mut self, unique_id: impl Into<String>) -> Self {
        self.unique_id = Some(unique_id.into());
        self
    }

    pub fn with_configuration(mut self, configuration: Arc<dyn Configuration>) -> Self {
        self.configuration = Some(configuration);
        self
    }

    pub fn with_device_details(mut self, device_details: Arc<dyn DeviceDetails>) -> Self {
        self.device_details = Some(device_details);
        self
    }

    pub fn with_app_details(mut self, app_details: AppDetails) -> Self {
        self.app_details = Some(app_details);
        self
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Unset pieces fall back to defaults: empty configuration, default
    /// device details, a random unique id and a freshly started session.
    pub fn build(self) -> AnalyticsContext {
        AnalyticsContext {
            sdk_info: self.sdk_info.unwrap_or_default(),
            unique_id: self
                .unique_id
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            configuration: self
                .configuration
                .unwrap_or_else(|| Arc::new(JsonConfiguration::new())),
            device_details: self
                .device_details
                .unwrap_or_else(|| Arc::new(StaticDeviceDetails::default())),
            app_details: self.app_details.unwrap_or_default(),
            session: self.session.unwrap_or_else(Session::start),
        }
    }
}
