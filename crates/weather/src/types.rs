//! Current-conditions payload.

use serde::{Deserialize, Serialize};

/// Conditions at one location, as reported under the `current` object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Provider's local observation time, e.g. `2024-05-01 14:30`.
    #[serde(default)]
    pub last_updated: Option<String>,
    pub temp_c: f64,
    pub temp_f: f64,
    pub feelslike_c: f64,
    pub humidity: u32,
    pub wind_kph: f64,
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub uv: f64,
    pub vis_km: f64,
    pub condition: Condition,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    /// Icon URL, often protocol-relative (`//cdn...`).
    pub icon: String,
}

impl CurrentWeather {
    /// Icon URL with a scheme.
    #[must_use]
    pub fn icon_url(&self) -> String {
        if self.condition.icon.starts_with("//") {
            format!("https:{}", self.condition.icon)
        } else {
            self.condition.icon.clone()
        }
    }
}
