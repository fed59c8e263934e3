//! Integration tests for WeatherClient using wiremock.

use movesync_core::WeatherError;
use movesync_weather::WeatherClient;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper to create a forecast entry JSON
fn forecast_entry(dt_txt: &str, temp: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "dt_txt": dt_txt,
        "main": { "temp": temp, "humidity": 60.0 },
        "weather": [{ "description": description, "icon": "01d" }]
    })
}

#[tokio::test]
async fn test_fetch_city_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .and(body_json(serde_json::json!({ "city": "Tokyo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [
                forecast_entry("2026-08-30 09:00:00", 27.1, "clear sky"),
                forecast_entry("2026-08-30 12:00:00", 29.8, "few clouds"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri()).unwrap();
    let forecasts = client.fetch_city("Tokyo").await.unwrap();

    assert_eq!(forecasts.len(), 2);
    assert_eq!(forecasts[0].time_of_day(), "09:00");
    assert_eq!(forecasts[1].rounded_temp(), 30);
    assert_eq!(forecasts[1].condition().unwrap().description, "few clouds");
}

#[tokio::test]
async fn test_fetch_city_preserves_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [
                forecast_entry("2026-08-30 21:00:00", 24.0, "rain"),
                forecast_entry("2026-08-30 09:00:00", 27.0, "clear sky"),
            ]
        })))
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri()).unwrap();
    let forecasts = client.fetch_city("Funabashi").await.unwrap();

    // Endpoint order is rendering order, even when out of chronological order
    assert_eq!(forecasts[0].dt_txt, "2026-08-30 21:00:00");
    assert_eq!(forecasts[1].dt_txt, "2026-08-30 09:00:00");
}

#[tokio::test]
async fn test_fetch_city_error_body_surfaced() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "error": "city not found"
        })))
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri()).unwrap();
    let err = client.fetch_city("Nowhere").await.unwrap_err();

    match err {
        WeatherError::Api { city, status, message } => {
            assert_eq!(city, "Nowhere");
            assert_eq!(status, 404);
            assert!(message.contains("city not found"));
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_pair_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .and(body_json(serde_json::json!({ "city": "Tokyo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [forecast_entry("2026-08-30 09:00:00", 27.0, "clear sky")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .and(body_json(serde_json::json!({ "city": "Yokohama" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [forecast_entry("2026-08-30 09:00:00", 25.0, "light rain")]
        })))
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri()).unwrap();
    let (current, destination) = client.fetch_pair("Tokyo", "Yokohama").await.unwrap();

    assert_eq!(current[0].condition().unwrap().description, "clear sky");
    assert_eq!(destination[0].condition().unwrap().description, "light rain");
}

#[tokio::test]
async fn test_fetch_pair_fails_if_either_side_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .and(body_json(serde_json::json!({ "city": "Tokyo" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "list": [forecast_entry("2026-08-30 09:00:00", 27.0, "clear sky")]
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .and(body_json(serde_json::json!({ "city": "Atlantis" })))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "upstream failure"
        })))
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri()).unwrap();

    assert!(client.fetch_pair("Tokyo", "Atlantis").await.is_err());
    assert!(client.fetch_pair("Atlantis", "Tokyo").await.is_err());
}

#[tokio::test]
async fn test_fetch_pair_dispatches_concurrently() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/weather"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(std::time::Duration::from_millis(250))
                .set_body_json(serde_json::json!({
                    "list": [forecast_entry("2026-08-30 09:00:00", 27.0, "clear sky")]
                })),
        )
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri()).unwrap();

    let started = std::time::Instant::now();
    client.fetch_pair("Tokyo", "Yokohama").await.unwrap();
    let elapsed = started.elapsed();

    // Sequential requests would take at least 500ms
    assert!(
        elapsed < std::time::Duration::from_millis(450),
        "pair fetch took {elapsed:?}, requests were not concurrent"
    );
}
