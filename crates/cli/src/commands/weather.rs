//! `deck weather` - current conditions, once or auto-refreshing.

use std::io::{BufRead, Write};

use chrono::{DateTime, Local};
use demo_deck_weather::{
    CurrentWeather, WeatherClient, WeatherConfig, WeatherDashboard, WeatherError, WeatherSource,
};
use tokio::sync::mpsc;
use tracing::{info, warn};

use super::CommandError;

/// Fetch and print current conditions for `city`.
pub async fn once(config: &WeatherConfig, city: &str, out: &mut impl Write) -> Result<(), CommandError> {
    let client = WeatherClient::new(config)?;
    let weather = client.current_weather(city).await?;
    write_weather(city.trim(), &weather, Some(Local::now()), out)?;
    Ok(())
}

/// Keep refreshing until Ctrl-C. Each line typed on stdin switches city.
pub async fn watch(config: &WeatherConfig, city: &str, out: &mut impl Write) -> Result<(), CommandError> {
    if city.trim().is_empty() {
        return Err(WeatherError::MissingCity.into());
    }
    let client = WeatherClient::new(config)?;
    let dashboard = WeatherDashboard::new(client).with_refresh_interval(config.refresh_interval);

    let (city_tx, city_rx) = mpsc::channel(8);
    let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);

    // Blocking stdin reads get their own thread so shutdown never waits on input.
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if city_tx.blocking_send(line).is_err() {
                break;
            }
        }
    });
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Interrupt received, stopping");
            let _ = stop_tx.send(true);
        }
    });

    run_dashboard(dashboard, city, city_rx, stop_rx, out).await;
    Ok(())
}

/// Drive `dashboard` for `city`, rendering after every refresh.
pub async fn run_dashboard<S: WeatherSource>(
    mut dashboard: WeatherDashboard<S>,
    city: &str,
    cities: mpsc::Receiver<String>,
    stop: tokio::sync::watch::Receiver<bool>,
    out: &mut impl Write,
) {
    dashboard.set_city(city);
    dashboard
        .run(cities, stop, |d| {
            if let Err(e) = write_dashboard(d, out) {
                warn!(error = %e, "Failed to write weather output");
            }
        })
        .await;
}

fn write_dashboard<S: WeatherSource>(
    dashboard: &WeatherDashboard<S>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    match (dashboard.weather(), dashboard.error_message()) {
        (Some(weather), _) => write_weather(dashboard.city(), weather, dashboard.last_updated(), out),
        (None, Some(message)) => {
            writeln!(out, "Weather in {}", dashboard.city().to_uppercase())?;
            writeln!(out, "  ! {message}")
        }
        (None, None) => writeln!(out, "Loading weather data..."),
    }
}

fn write_weather(
    city: &str,
    weather: &CurrentWeather,
    fetched_at: Option<DateTime<Local>>,
    out: &mut impl Write,
) -> std::io::Result<()> {
    writeln!(out, "Weather in {}", city.to_uppercase())?;
    writeln!(
        out,
        "  {}  {}°C ({}°F), feels like {}°C",
        weather.condition.text, weather.temp_c, weather.temp_f, weather.feelslike_c
    )?;
    writeln!(
        out,
        "  Humidity {}% | Wind {} km/h {} | Pressure {} mb | UV {} | Visibility {} km",
        weather.humidity, weather.wind_kph, weather.wind_dir, weather.pressure_mb, weather.uv, weather.vis_km
    )?;
    if let Some(at) = fetched_at {
        writeln!(out, "  Last updated: {}", at.format("%H:%M:%S"))?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::future::Future;

    use demo_deck_weather::Condition;

    use super::*;

    struct Scripted(fn(&str) -> Result<CurrentWeather, WeatherError>);

    impl WeatherSource for Scripted {
        fn current_weather(
            &self,
            city: &str,
        ) -> impl Future<Output = Result<CurrentWeather, WeatherError>> + Send {
            let result = (self.0)(city);
            async move { result }
        }
    }

    fn sunny(_: &str) -> Result<CurrentWeather, WeatherError> {
        Ok(CurrentWeather {
            last_updated: None,
            temp_c: 25.5,
            temp_f: 77.9,
            feelslike_c: 26.0,
            humidity: 30,
            wind_kph: 5.0,
            wind_dir: "E".to_string(),
            pressure_mb: 1018.0,
            uv: 7.0,
            vis_km: 10.0,
            condition: Condition {
                text: "Sunny".to_string(),
                icon: String::new(),
            },
        })
    }

    fn unknown_city(_: &str) -> Result<CurrentWeather, WeatherError> {
        Err(WeatherError::CityNotFound)
    }

    async fn render_once(source: Scripted, city: &str) -> String {
        let (_city_tx, city_rx) = mpsc::channel(1);
        let (stop_tx, stop_rx) = tokio::sync::watch::channel(false);
        let mut out = Vec::new();

        let dashboard = WeatherDashboard::new(source);
        let stopper = async {
            tokio::task::yield_now().await;
            let _ = stop_tx.send(true);
        };
        tokio::join!(run_dashboard(dashboard, city, city_rx, stop_rx, &mut out), stopper);
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_renders_weather() {
        let text = render_once(Scripted(sunny), "Cairo").await;
        assert!(text.starts_with("Weather in CAIRO\n"));
        assert!(text.contains("Sunny  25.5°C (77.9°F)"));
        assert!(text.contains("Last updated: "));
    }

    #[tokio::test]
    async fn test_renders_user_message_on_error() {
        let text = render_once(Scripted(unknown_city), "Atlantis").await;
        assert!(text.contains("! City not found: Please enter a valid city name."));
    }

    #[tokio::test]
    async fn test_watch_requires_city() {
        let config = WeatherConfig::new(None, url::Url::parse("http://127.0.0.1:9").unwrap());
        let mut out = Vec::new();
        let err = watch(&config, " ", &mut out).await.unwrap_err();
        assert!(matches!(err, CommandError::Weather(WeatherError::MissingCity)));
    }
}
