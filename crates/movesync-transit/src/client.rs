use movesync_core::ScheduleError;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use crate::types::TrainDeparture;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Client for the backend train schedule endpoint.
#[derive(Debug, Clone)]
pub struct ScheduleClient {
    base_url: Url,
    client: Arc<Client>,
}

impl ScheduleClient {
    /// Create a new schedule client against the given base URL.
    pub fn new(base_url: &str) -> Result<Self, ScheduleError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            base_url: Url::parse(base_url)?,
            client: Arc::new(client),
        })
    }

    /// Fetch the upcoming departure list, in endpoint order.
    pub async fn fetch_departures(&self) -> Result<Vec<TrainDeparture>, ScheduleError> {
        let url = self.base_url.join("api/schedule")?;
        tracing::debug!(%url, "Fetching train schedule");

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%url, %status, %body, "Schedule request failed");
            return Err(ScheduleError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let departures: Vec<TrainDeparture> = response.json().await?;
        tracing::info!(departures = departures.len(), "Fetched train schedule");
        Ok(departures)
    }
}
