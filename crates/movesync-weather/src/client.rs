use movesync_core::WeatherError;
use reqwest::Client;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::types::{ForecastEntry, ForecastResponse};

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Request body for the weather endpoint.
#[derive(Debug, Serialize)]
struct CityQuery<'a> {
    city: &'a str,
}

/// Client for the backend weather endpoint.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    base_url: Url,
    client: Arc<Client>,
}

impl WeatherClient {
    /// Create a new weather client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Arc::new(client),
        })
    }

    /// Fetch the forecast sequence for a single city.
    ///
    /// Non-2xx responses carry a JSON error body; it is consumed and logged
    /// with the failing city and URL before the call fails.
    pub async fn fetch_city(&self, city: &str) -> Result<Vec<ForecastEntry>, WeatherError> {
        let url = self.base_url.join("api/weather")?;
        tracing::debug!(city, "Fetching weather forecast");

        let response = self
            .client
            .post(url.clone())
            .json(&CityQuery { city })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(city, %url, %status, %body, "Weather request failed");
            return Err(WeatherError::Api {
                city: city.to_string(),
                status: status.as_u16(),
                message: body,
            });
        }

        let body: ForecastResponse = response.json().await?;
        tracing::info!(city, entries = body.list.len(), "Fetched weather forecast");
        Ok(body.list)
    }

    /// Fetch forecasts for the current location and the destination.
    ///
    /// Both requests are dispatched before either is awaited; a failure on
    /// one side does not cancel the other request, but it fails the pair as
    /// a whole. Returns `(current, destination)` forecast sequences.
    pub async fn fetch_pair(
        &self,
        current_location: &str,
        destination: &str,
    ) -> Result<(Vec<ForecastEntry>, Vec<ForecastEntry>), WeatherError> {
        let (current, destination) = tokio::join!(
            self.fetch_city(current_location),
            self.fetch_city(destination),
        );

        Ok((current?, destination?))
    }
}
