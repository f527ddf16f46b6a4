//! Integration tests for the weather dashboard over the HTTP client.
//!
//! No external service is contacted: requests go to local sockets.

#![allow(clippy::unwrap_used)]

use demo_deck_weather::{WeatherClient, WeatherConfig, WeatherDashboard, WeatherErrorKind};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use url::Url;

/// Answer every request on a local port with `status` and `body`.
async fn canned_server(status: &'static str, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0_u8; 2048];
            let _ = socket.read(&mut buf).await;
            let response = format!(
                "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });
    Url::parse(&format!("http://{addr}/v1")).unwrap()
}

fn dashboard(base_url: Url) -> WeatherDashboard<WeatherClient> {
    let config = WeatherConfig::new(Some("test-key".to_string().into()), base_url);
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    WeatherDashboard::new(WeatherClient::with_http_client(&config, http).unwrap())
}

// =============================================================================
// Failure Classification
// =============================================================================

#[tokio::test]
async fn test_unreachable_service_shows_network_message() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut dashboard = dashboard(Url::parse(&format!("http://{addr}/v1")).unwrap());
    dashboard.refresh().await;

    assert!(dashboard.weather().is_none());
    assert_eq!(
        dashboard.error().map(|e| e.kind()),
        Some(WeatherErrorKind::Network)
    );
    assert_eq!(
        dashboard.error_message().as_deref(),
        Some("Network error: Unable to reach weather service.")
    );
}

#[tokio::test]
async fn test_rejected_key_shows_api_key_message() {
    let base = canned_server("401 Unauthorized", r#"{"error": {"code": 2006}}"#).await;
    let mut dashboard = dashboard(base);
    dashboard.refresh().await;

    assert_eq!(
        dashboard.error().map(|e| e.kind()),
        Some(WeatherErrorKind::Unauthorized)
    );
    assert_eq!(
        dashboard.error_message().as_deref(),
        Some("API key error: Please check your API key.")
    );
}

#[tokio::test]
async fn test_server_error_keeps_status_in_message() {
    let base = canned_server("503 Service Unavailable", "{}").await;
    let mut dashboard = dashboard(base);
    dashboard.refresh().await;

    assert_eq!(
        dashboard.error_message().as_deref(),
        Some("API error! status: 503")
    );
}

// =============================================================================
// Success
// =============================================================================

#[tokio::test]
async fn test_successful_refresh_after_city_change() {
    let base = canned_server(
        "200 OK",
        r#"{"current": {"temp_c": 3.0, "temp_f": 37.4, "feelslike_c": 0.5, "humidity": 88,
            "wind_kph": 20.2, "wind_dir": "NNE", "pressure_mb": 1001.0, "uv": 1.0, "vis_km": 8.0,
            "condition": {"text": "Light snow", "icon": "//cdn/326.png"}}}"#,
    )
    .await;
    let mut dashboard = dashboard(base);
    assert!(dashboard.set_city("Reykjavik"));
    dashboard.refresh().await;

    let weather = dashboard.weather().unwrap();
    assert_eq!(weather.condition.text, "Light snow");
    assert_eq!(weather.icon_url(), "https://cdn/326.png");
    assert!(dashboard.last_updated().is_some());
    assert!(dashboard.error().is_none());
}
