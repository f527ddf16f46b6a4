//! HTTP client for the current-conditions endpoint.

use std::future::Future;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};
use url::Url;

use crate::config::WeatherConfig;
use crate::error::WeatherError;
use crate::types::CurrentWeather;

/// Anything that can answer "what is the weather in `city` right now".
pub trait WeatherSource {
    fn current_weather(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<CurrentWeather, WeatherError>> + Send;
}

// =============================================================================
// WeatherClient
// =============================================================================

/// Client for `GET {base}/current.json?key=..&q=..&aqi=yes`.
#[derive(Clone)]
pub struct WeatherClient {
    inner: Arc<WeatherClientInner>,
}

struct WeatherClientInner {
    client: reqwest::Client,
    endpoint: Url,
    api_key: Option<SecretString>,
}

impl std::fmt::Debug for WeatherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize)]
struct CurrentResponse {
    #[serde(default)]
    current: Option<CurrentWeather>,
}

impl WeatherClient {
    /// Build a client for `config`.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the endpoint cannot be derived from the base URL.
    pub fn new(config: &WeatherConfig) -> Result<Self, url::ParseError> {
        Self::with_http_client(config, reqwest::Client::new())
    }

    /// Build a client that sends requests through `client`.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the endpoint cannot be derived from the base URL.
    pub fn with_http_client(
        config: &WeatherConfig,
        client: reqwest::Client,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            inner: Arc::new(WeatherClientInner {
                client,
                endpoint: config.current_endpoint()?,
                api_key: config.api_key.clone(),
            }),
        })
    }

    /// Fetch current conditions for `city`. One attempt, no retry.
    ///
    /// # Errors
    ///
    /// Returns a `WeatherError` classifying the failure; see
    /// [`WeatherError::kind`].
    #[instrument(skip(self))]
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(WeatherError::MissingCity);
        }
        let api_key = self
            .inner
            .api_key
            .as_ref()
            .ok_or(WeatherError::MissingApiKey)?;

        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("key", api_key.expose_secret())
            .append_pair("q", city)
            .append_pair("aqi", "yes");

        let response = self.inner.client.get(url).send().await?;
        let status = response.status();

        if let Some(err) = WeatherError::from_status(status) {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %body.chars().take(200).collect::<String>(),
                "Weather API returned non-success status"
            );
            return Err(err);
        }

        let body = response.text().await?;
        let parsed: CurrentResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %body.chars().take(200).collect::<String>(),
                    "Failed to parse weather response"
                );
                return Err(WeatherError::Decode(e));
            }
        };

        let weather = parsed.current.ok_or(WeatherError::DataUnavailable)?;
        debug!(condition = %weather.condition.text, "Fetched current weather");
        Ok(weather)
    }
}

impl WeatherSource for WeatherClient {
    fn current_weather(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<CurrentWeather, WeatherError>> + Send {
        Self::current_weather(self, city)
    }
}
