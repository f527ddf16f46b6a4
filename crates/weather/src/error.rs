//! Weather error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors from fetching current conditions.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City name is required")]
    MissingCity,

    #[error("WEATHER_API_KEY environment variable is not set")]
    MissingApiKey,

    /// The request never produced a response.
    #[error("Network error: Unable to reach weather service.")]
    Network(#[from] reqwest::Error),

    #[error("Invalid city name or request format.")]
    InvalidRequest,

    #[error("Unauthorized: Invalid API key.")]
    Unauthorized,

    #[error("Forbidden: API key does not have access.")]
    Forbidden,

    #[error("City not found.")]
    CityNotFound,

    /// Any other non-success status.
    #[error("API error! status: {0}")]
    Api(u16),

    /// The response had no `current` object.
    #[error("Weather data not available for this location.")]
    DataUnavailable,

    /// The response body did not decode.
    #[error("Unexpected response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fieldless mirror of [`WeatherError`] for matching and display decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherErrorKind {
    MissingCity,
    MissingApiKey,
    Network,
    InvalidRequest,
    Unauthorized,
    Forbidden,
    CityNotFound,
    Api,
    DataUnavailable,
    Decode,
}

impl WeatherError {
    /// Classify a response status. `None` for success statuses.
    #[must_use]
    pub fn from_status(status: StatusCode) -> Option<Self> {
        if status.is_success() {
            return None;
        }
        Some(match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest,
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::FORBIDDEN => Self::Forbidden,
            StatusCode::NOT_FOUND => Self::CityNotFound,
            other => Self::Api(other.as_u16()),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> WeatherErrorKind {
        match self {
            Self::MissingCity => WeatherErrorKind::MissingCity,
            Self::MissingApiKey => WeatherErrorKind::MissingApiKey,
            Self::Network(_) => WeatherErrorKind::Network,
            Self::InvalidRequest => WeatherErrorKind::InvalidRequest,
            Self::Unauthorized => WeatherErrorKind::Unauthorized,
            Self::Forbidden => WeatherErrorKind::Forbidden,
            Self::CityNotFound => WeatherErrorKind::CityNotFound,
            Self::Api(_) => WeatherErrorKind::Api,
            Self::DataUnavailable => WeatherErrorKind::DataUnavailable,
            Self::Decode(_) => WeatherErrorKind::Decode,
        }
    }

    /// Message shown to the user in place of the weather panel.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self.kind() {
            WeatherErrorKind::Network => {
                "Network error: Unable to reach weather service.".to_string()
            }
            WeatherErrorKind::MissingApiKey
            | WeatherErrorKind::Unauthorized
            | WeatherErrorKind::Forbidden => "API key error: Please check your API key.".to_string(),
            WeatherErrorKind::CityNotFound => {
                "City not found: Please enter a valid city name.".to_string()
            }
            WeatherErrorKind::DataUnavailable => {
                "Weather data not available for this location.".to_string()
            }
            WeatherErrorKind::Decode => format!("Unexpected error: {self}"),
            WeatherErrorKind::MissingCity
            | WeatherErrorKind::InvalidRequest
            | WeatherErrorKind::Api => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_status_mapping() {
        let kind = |code: u16| {
            StatusCode::from_u16(code)
                .ok()
                .and_then(WeatherError::from_status)
                .map(|e| e.kind())
        };
        assert_eq!(kind(200), None);
        assert_eq!(kind(204), None);
        assert_eq!(kind(400), Some(WeatherErrorKind::InvalidRequest));
        assert_eq!(kind(401), Some(WeatherErrorKind::Unauthorized));
        assert_eq!(kind(403), Some(WeatherErrorKind::Forbidden));
        assert_eq!(kind(404), Some(WeatherErrorKind::CityNotFound));
        assert_eq!(kind(500), Some(WeatherErrorKind::Api));
        assert_eq!(kind(429), Some(WeatherErrorKind::Api));
    }

    #[test]
    fn test_api_error_keeps_status() {
        let err = WeatherError::from_status(StatusCode::BAD_GATEWAY);
        assert!(matches!(err, Some(WeatherError::Api(502))));
        assert_eq!(
            err.map(|e| e.user_message()).as_deref(),
            Some("API error! status: 502")
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            WeatherError::Unauthorized.user_message(),
            "API key error: Please check your API key."
        );
        assert_eq!(
            WeatherError::Forbidden.user_message(),
            WeatherError::MissingApiKey.user_message()
        );
        assert_eq!(
            WeatherError::CityNotFound.user_message(),
            "City not found: Please enter a valid city name."
        );
        assert_eq!(
            WeatherError::DataUnavailable.user_message(),
            "Weather data not available for this location."
        );
        assert_eq!(
            WeatherError::InvalidRequest.user_message(),
            "Invalid city name or request format."
        );
        assert_eq!(WeatherError::MissingCity.user_message(), "City name is required");
    }
}
