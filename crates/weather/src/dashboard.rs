//! Auto-refreshing weather state for one city.

use std::time::Duration;

use chrono::{DateTime, Local};
use tokio::sync::{mpsc, watch};
use tokio::time::MissedTickBehavior;
use tracing::{info, warn};

use crate::client::WeatherSource;
use crate::config::{DEFAULT_REFRESH_INTERVAL, MIN_REFRESH_INTERVAL};
use crate::error::WeatherError;
use crate::types::CurrentWeather;

/// City shown before the user picks one.
pub const DEFAULT_CITY: &str = "London";

/// What the weather panel displays.
#[derive(Debug)]
pub struct WeatherDashboard<S> {
    source: S,
    city: String,
    weather: Option<CurrentWeather>,
    error: Option<WeatherError>,
    last_updated: Option<DateTime<Local>>,
    loading: bool,
    refresh_interval: Duration,
}

impl<S: WeatherSource> WeatherDashboard<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            city: DEFAULT_CITY.to_string(),
            weather: None,
            error: None,
            last_updated: None,
            loading: false,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
        }
    }

    /// Raised to at least [`MIN_REFRESH_INTERVAL`]; a zero period would never yield.
    #[must_use]
    pub fn with_refresh_interval(mut self, refresh_interval: Duration) -> Self {
        self.refresh_interval = refresh_interval.max(MIN_REFRESH_INTERVAL);
        self
    }

    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        self.refresh_interval
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub const fn weather(&self) -> Option<&CurrentWeather> {
        self.weather.as_ref()
    }

    #[must_use]
    pub const fn error(&self) -> Option<&WeatherError> {
        self.error.as_ref()
    }

    /// The user-facing text for the last failed refresh, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(WeatherError::user_message)
    }

    /// Time of the last successful refresh.
    #[must_use]
    pub const fn last_updated(&self) -> Option<DateTime<Local>> {
        self.last_updated
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch city. Blank input is ignored; returns whether the city changed.
    pub fn set_city(&mut self, city: &str) -> bool {
        let city = city.trim();
        if city.is_empty() || city == self.city {
            return false;
        }
        city.clone_into(&mut self.city);
        true
    }

    /// One fetch attempt for the current city.
    ///
    /// Success replaces the weather and stamps `last_updated`; failure clears
    /// the weather and records the error. `last_updated` survives failures.
    pub async fn refresh(&mut self) {
        self.loading = true;
        self.error = None;

        match self.source.current_weather(&self.city).await {
            Ok(weather) => {
                self.weather = Some(weather);
                self.last_updated = Some(Local::now());
            }
            Err(e) => {
                warn!(city = %self.city, error = %e, "Weather refresh failed");
                self.weather = None;
                self.error = Some(e);
            }
        }

        self.loading = false;
    }

    /// Refresh now and then every `refresh_interval` until `shutdown` fires.
    ///
    /// A new city from `cities` triggers an immediate refresh and restarts the
    /// timer. `on_update` runs after every refresh.
    pub async fn run<F>(
        &mut self,
        mut cities: mpsc::Receiver<String>,
        mut shutdown: watch::Receiver<bool>,
        mut on_update: F,
    ) where
        F: FnMut(&Self),
    {
        let mut ticker = tokio::time::interval(self.refresh_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cities_open = true;

        info!(city = %self.city, interval = ?self.refresh_interval, "Weather refresh loop started");
        while !*shutdown.borrow() {
            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {}
                city = cities.recv(), if cities_open => {
                    match city {
                        Some(city) => {
                            if !self.set_city(&city) {
                                continue;
                            }
                            ticker.reset();
                        }
                        None => {
                            cities_open = false;
                            continue;
                        }
                    }
                }
            }
            self.refresh().await;
            on_update(self);
        }
        info!("Weather refresh loop stopped");
    }
}
