//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DECK_DATA_DIR` - Directory for the file-backed store (default: .demo-deck)
//! - `DECK_CART_RESTORE` - `exact` or `replay` (default: exact)
//! - `WEATHER_API_KEY` - Weather provider API key, needed by `deck weather`
//! - `WEATHER_BASE_URL` - Provider API root (default: <https://api.weatherapi.com/v1>)
//! - `WEATHER_REFRESH_SECS` - Auto-refresh period for `--watch` (default: 30)

use std::path::PathBuf;
use std::time::Duration;

use demo_deck_shop::CartRestore;
use demo_deck_weather::{DEFAULT_BASE_URL, WeatherConfig};
use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_DATA_DIR: &str = ".demo-deck";
const DEFAULT_REFRESH_SECS: &str = "30";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Everything the `deck` binary needs.
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// Directory holding one JSON file per storage key
    pub data_dir: PathBuf,
    /// How the persisted cart is restored on startup
    pub cart_restore: CartRestore,
    /// Weather provider settings
    pub weather: WeatherConfig,
}

impl DeckConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if a variable is set but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let data_dir = PathBuf::from(get_env_or_default(&lookup, "DECK_DATA_DIR", DEFAULT_DATA_DIR));

        let cart_restore = get_env_or_default(&lookup, "DECK_CART_RESTORE", "exact")
            .parse::<CartRestore>()
            .map_err(|e| ConfigError::InvalidEnvVar("DECK_CART_RESTORE".to_string(), e))?;

        let api_key = lookup("WEATHER_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .map(SecretString::from);

        let base_url = Url::parse(&get_env_or_default(&lookup, "WEATHER_BASE_URL", DEFAULT_BASE_URL))
            .map_err(|e| ConfigError::InvalidEnvVar("WEATHER_BASE_URL".to_string(), e.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEnvVar(
                "WEATHER_BASE_URL".to_string(),
                format!("unsupported scheme: {}", base_url.scheme()),
            ));
        }

        let refresh_secs = get_env_or_default(&lookup, "WEATHER_REFRESH_SECS", DEFAULT_REFRESH_SECS)
            .parse::<u64>()
            .ok()
            .filter(|secs| *secs > 0)
            .ok_or_else(|| {
                ConfigError::InvalidEnvVar(
                    "WEATHER_REFRESH_SECS".to_string(),
                    "must be a positive number of seconds".to_string(),
                )
            })?;

        let weather = WeatherConfig::new(api_key, base_url)
            .with_refresh_interval(Duration::from_secs(refresh_secs));

        Ok(Self {
            data_dir,
            cart_restore,
            weather,
        })
    }

    /// Fail early for commands that cannot work without an API key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `WEATHER_API_KEY` is unset or blank.
    pub fn require_weather_key(&self) -> Result<(), ConfigError> {
        if self.weather.api_key.is_none() {
            return Err(ConfigError::MissingEnvVar("WEATHER_API_KEY".to_string()));
        }
        Ok(())
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(lookup: impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}
