use crate::event::locale::LocaleValue;

/// Environment variables consulted for the device locale, highest priority first.
const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Read-only facts about the device an event is recorded on.
///
/// Every accessor is evaluated when an event is created; implementations
/// may change their answers between events.
pub trait DeviceDetails: Send + Sync {
    fn locale(&self) -> LocaleValue;
    fn platform(&self) -> String;
    fn platform_version(&self) -> String;
    fn make(&self) -> String;
    fn model(&self) -> String;
    fn carrier(&self) -> String;
}

/// Fixed device details, set up front.
#[derive(Debug, Clone)]
pub struct StaticDeviceDetails {
    pub locale: LocaleValue,
    pub platform: String,
    pub platform_version: String,
    pub make: String,
    pub model: String,
    pub carrier: String,
}

impl Default for StaticDeviceDetails {
    fn default() -> Self {
        Self {
            locale: LocaleValue::new("en", "US"),
            platform: "UNKNOWN".to_string(),
            platform_version: String::new(),
            make: String::new(),
            model: String::new(),
            carrier: String::new(),
        }
    }
}

impl StaticDeviceDetails {
    pub fn new(locale: LocaleValue) -> Self {
        Self {
            locale,
            ..Default::default()
        }
    }

    /// Details of the host process: locale from `LC_ALL`/`LC_MESSAGES`/`LANG`,
    /// platform from the compile target.
    pub fn from_env() -> Self {
        Self {
            locale: locale_from(|var| std::env::var(var).ok()),
            platform: std::env::consts::OS.to_string(),
            platform_version: String::new(),
            make: String::new(),
            model: std::env::consts::ARCH.to_string(),
            carrier: String::new(),
        }
    }

    pub fn with_platform(
        mut self,
        platform: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.platform = platform.into();
        self.platform_version = version.into();
        self
    }

    pub fn with_hardware(mut self, make: impl Into<String>, model: impl Into<String>) -> Self {
        self.make = make.into();
        self.model = model.into();
        self
    }

    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = carrier.into();
        self
    }
}

impl DeviceDetails for StaticDeviceDetails {
    fn locale(&self) -> LocaleValue {
        self.locale.clone()
    }

    fn platform(&self) -> String {
        self.platform.clone()
    }

    fn platform_version(&self) -> String {
        self.platform_version.clone()
    }

    fn make(&self) -> String {
        self.make.clone()
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    fn carrier(&self) -> String {
        self.carrier.clone()
    }
}

/// First locale variable that parses wins; `en_US` when none does.
fn locale_from(get: impl Fn(&str) -> Option<String>) -> LocaleValue {
    LOCALE_ENV_VARS
        .iter()
        .filter_map(|var| get(*var))
        .find_map(|value| value.parse::<LocaleValue>().ok())
        .unwrap_or_else(|| LocaleValue::new("en", "US"))
}
