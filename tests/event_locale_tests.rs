use mobile_analytics::{
    format_locale, AnalyticsContext, AnalyticsContextBuilder, DefaultEventClient, EventClient,
    EventObserver, JsonConfiguration, LocaleValue, RecordingObserver, StaticDeviceDetails,
};
use std::sync::Arc;

const SDK_NAME: &str = "AppIntelligenceSDK-Analytics";
const SDK_VERSION: &str = "test";
const UNIQUE_ID: &str = "abc123";

const LOCALES: [(&str, &str, &str); 17] = [
    ("en", "US", "en_US"),
    ("en", "CA", "en_CA"),
    ("fr", "CA", "fr_CA"),
    ("zh", "CN", "zh_CN"),
    ("fr", "FR", "fr_FR"),
    ("de", "DE", "de_DE"),
    ("it", "IT", "it_IT"),
    ("ja", "JP", "ja_JP"),
    ("ko", "KR", "ko_KR"),
    ("zh", "TW", "zh_TW"),
    ("en", "GB", "en_GB"),
    ("ar", "SA", "ar_SA"),
    ("nl", "NL", "nl_NL"),
    ("en", "AU", "en_AU"),
    ("es", "ES", "es_ES"),
    ("pt", "BR", "pt_BR"),
    ("es", "MX", "es_MX"),
];

fn context_with_locale(locale: LocaleValue) -> Arc<AnalyticsContext> {
    let configuration = JsonConfiguration::new()
        .with_value("versionKey", "ver")
        .with_value("isAnalyticsEnabled", true);

    Arc::new(
        AnalyticsContextBuilder::new()
            .with_sdk_info(SDK_NAME, SDK_VERSION)
            .with_unique_id_value(UNIQUE_ID)
            .with_configuration(Arc::new(configuration))
            .with_device_details(Arc::new(StaticDeviceDetails::new(locale)))
            .build(),
    )
}

#[test]
fn test_format_locale_fixtures() {
    for (language, country, expected) in LOCALES {
        assert_eq!(format_locale(&LocaleValue::new(language, country)), expected);
    }
}

#[test]
fn test_create_event_verify_locale_format() {
    for (language, country, expected) in LOCALES {
        // 1. Client with one observer attached
        let context = context_with_locale(LocaleValue::new(language, country));
        let mut target = DefaultEventClient::new(context, true);
        let observer = Arc::new(RecordingObserver::new());
        target.add_event_observer(observer.clone());

        // 2. Create and record
        let event = target.create_event("localeEvent").unwrap();
        target.record_event(&event);

        // 3. Exactly one notify, carrying the formatted locale
        assert_eq!(observer.len(), 1, "observer should be notified once for {expected}");
        let recorded = observer.last().unwrap();
        let json = recorded.to_json();
        assert_eq!(json["locale"].as_str(), Some(expected));
    }
}

#[test]
fn test_end_to_end_french_locale() {
    let context = context_with_locale(LocaleValue::new("fr", "FR"));
    let mut target = DefaultEventClient::new(context, true);
    let observer = Arc::new(RecordingObserver::new());
    target.add_event_observer(observer.clone() as Arc<dyn EventObserver>);

    let event = target.create_event("localeEvent").unwrap();
    assert_eq!(event.locale(), "fr_FR");
    target.record_event(&event);

    let events = observer.events();
    assert_eq!(events.len(), 1);
    let json = events[0].to_json();
    assert_eq!(json["locale"], "fr_FR");
    assert_eq!(json["event_type"], "localeEvent");
    assert_eq!(json["sdk_name"], SDK_NAME);
    assert_eq!(json["sdk_version"], SDK_VERSION);
    assert_eq!(json["unique_id"], UNIQUE_ID);
    assert_eq!(json["ver"], "v2.0");
}

/// Device details whose locale can change between events.
struct SwitchableDevice {
    locale: parking_lot::Mutex<LocaleValue>,
}

impl mobile_analytics::DeviceDetails for SwitchableDevice {
    fn locale(&self) -> LocaleValue {
        self.locale.lock().clone()
    }
    fn platform(&self) -> String {
        "ANDROID".to_string()
    }
    fn platform_version(&self) -> String {
        "5.0".to_string()
    }
    fn make(&self) -> String {
        "make".to_string()
    }
    fn model(&self) -> String {
        "model".to_string()
    }
    fn carrier(&self) -> String {
        String::new()
    }
}

#[test]
fn test_locale_read_at_creation_time() {
    let device = Arc::new(SwitchableDevice {
        locale: parking_lot::Mutex::new(LocaleValue::new("en", "US")),
    });
    let context = AnalyticsContextBuilder::new()
        .with_device_details(device.clone())
        .build();
    let mut target = DefaultEventClient::new(Arc::new(context), true);
    let observer = Arc::new(RecordingObserver::new());
    target.add_event_observer(observer.clone());

    let before = target.create_event("first").unwrap();
    *device.locale.lock() = LocaleValue::new("ja", "JP");
    let after = target.create_event("second").unwrap();

    // Recording order does not matter; the locale was fixed at creation.
    target.record_event(&after);
    target.record_event(&before);

    let events = observer.events();
    assert_eq!(events[0].locale(), "ja_JP");
    assert_eq!(events[1].locale(), "en_US");
    assert_eq!(events[0].to_json()["platform"], "ANDROID");
}
