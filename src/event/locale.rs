use std::fmt;
use std::str::FromStr;

use crate::error::AnalyticsError;

/// Platform language + region pair, e.g. `("en", "US")`.
///
/// Values are kept exactly as the platform supplies them; no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleValue {
    language: String,
    country: String,
}

impl LocaleValue {
    pub fn new(language: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            country: country.into(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

/// Canonical wire form of a locale: `language_COUNTRY`.
pub fn format_locale(locale: &LocaleValue) -> String {
    format!("{}_{}", locale.language, locale.country)
}

impl fmt::Display for LocaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.language, self.country)
    }
}

/// Accepts `en_US`, `en-US`, and POSIX forms like `en_US.UTF-8` or `de_DE@euro`.
impl FromStr for LocaleValue {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let base = s
            .split(&['.', '@'][..])
            .next()
            .unwrap_or_default()
            .trim();

        let mut parts = base.splitn(2, &['_', '-'][..]);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();

        if language.is_empty() || country.is_empty() {
            return Err(AnalyticsError::InvalidLocale(s.to_string()));
        }

        Ok(Self::new(language, country))
    }
}
