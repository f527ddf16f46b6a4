//! Demo Deck Weather - Current conditions client and auto-refreshing dashboard.
//!
//! # Architecture
//!
//! - [`WeatherClient`] performs one `GET current.json` per call and classifies
//!   failures into [`WeatherError`] variants by status code, never by message.
//! - [`WeatherSource`] is the seam between the dashboard and the network.
//! - [`WeatherDashboard`] holds what the panel shows and runs the refresh loop
//!   on a `tokio` interval until a shutdown signal fires.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod types;

pub use client::{WeatherClient, WeatherSource};
pub use config::{DEFAULT_BASE_URL, DEFAULT_REFRESH_INTERVAL, MIN_REFRESH_INTERVAL, WeatherConfig};
pub use dashboard::{DEFAULT_CITY, WeatherDashboard};
pub use error::{WeatherError, WeatherErrorKind};
pub use types::{Condition, CurrentWeather};
