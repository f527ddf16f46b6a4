//! Weather client settings.

use std::time::Duration;

use secrecy::SecretString;
use url::Url;

/// Provider API root used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// Auto-refresh period used when none is configured.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Shortest auto-refresh period; shorter requests are raised to this.
pub const MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Weather provider configuration.
///
/// Implements `Debug` manually to redact the API key.
#[derive(Clone)]
pub struct WeatherConfig {
    /// Provider API key. A missing key surfaces as an error per request.
    pub api_key: Option<SecretString>,
    /// API root; `current.json` is appended.
    pub base_url: Url,
    pub refresh_interval: Duration,
}

impl std::fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url.as_str())
            .field("refresh_interval", &self.refresh_interval)
            .finish()
    }
}

impl WeatherConfig {
    #[must_use]
    pub fn new(api_key: Option<SecretString>, base_url: Url) -> Self {
        Self {
            api_key,
            base_url,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Set the auto-refresh period, raised to at least [`MIN_REFRESH_INTERVAL`].
    #[must_use]
    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval.max(MIN_REFRESH_INTERVAL);
        self
    }

    /// `{base_url}/current.json`, tolerating a trailing slash on the base.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the joined URL is invalid.
    pub fn current_endpoint(&self) -> Result<Url, url::ParseError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}/current.json"))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_current_endpoint_keeps_version_path() {
        for base in ["https://api.weatherapi.com/v1", "https://api.weatherapi.com/v1/"] {
            let config = WeatherConfig::new(None, Url::parse(base).unwrap());
            assert_eq!(
                config.current_endpoint().unwrap().as_str(),
                "https://api.weatherapi.com/v1/current.json"
            );
        }
    }

    #[test]
    fn test_refresh_interval_has_floor() {
        let base = Url::parse(DEFAULT_BASE_URL).unwrap();
        let config = WeatherConfig::new(None, base.clone()).with_refresh_interval(Duration::ZERO);
        assert_eq!(config.refresh_interval, MIN_REFRESH_INTERVAL);

        let config = WeatherConfig::new(None, base).with_refresh_interval(Duration::from_secs(90));
        assert_eq!(config.refresh_interval, Duration::from_secs(90));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = WeatherConfig::new(
            Some(SecretString::from("k3y-value")),
            Url::parse(DEFAULT_BASE_URL).unwrap(),
        );
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("k3y-value"));
    }
}
