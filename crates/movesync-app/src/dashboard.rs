//! Dashboard state and refresh orchestration.
//!
//! Owns the settings store, both HTTP clients, and the display state the
//! rendering surface reads. Locks are short and never held across an await;
//! overlapping refreshes are not serialized, so whichever fetch settles last
//! writes last.

use parking_lot::RwLock;

use movesync_core::{AppError, Config};
use movesync_transit::{ScheduleClient, TrainDeparture};
use movesync_weather::{ForecastEntry, WeatherClient};

use crate::settings::{RouteSettings, SettingsField, SettingsStore};

/// User-visible sentinel shown in both weather slots after a failed refresh.
pub const WEATHER_ERROR_MESSAGE: &str = "エラーが発生しました";

/// One weather display slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ForecastSlot {
    /// Nothing fetched yet
    #[default]
    Empty,
    /// Forecast sequence in endpoint order
    Forecast(Vec<ForecastEntry>),
    /// Error sentinel replacing the data after a failed refresh
    Error(&'static str),
}

impl ForecastSlot {
    /// Forecast entries, if this slot holds data.
    pub fn entries(&self) -> Option<&[ForecastEntry]> {
        match self {
            Self::Forecast(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Everything the rendering surface needs, replaced wholesale by fetches.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    pub current_weather: ForecastSlot,
    pub destination_weather: ForecastSlot,
    pub departures: Vec<TrainDeparture>,
}

/// Session-scoped dashboard state. All state is in-memory and lost on drop.
pub struct Dashboard {
    settings: RwLock<SettingsStore>,
    state: RwLock<DisplayState>,
    weather: WeatherClient,
    schedule: ScheduleClient,
}

impl Dashboard {
    /// Create a dashboard against the configured backend.
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            settings: RwLock::new(SettingsStore::new()),
            state: RwLock::new(DisplayState::default()),
            weather: WeatherClient::new(&config.api_base_url)?,
            schedule: ScheduleClient::new(&config.api_base_url)?,
        })
    }

    /// Initial mount: fetch the schedule once. Weather waits for an explicit
    /// refresh, matching the dashboard's on-load behavior.
    pub async fn start(&self) {
        self.refresh_schedule().await;
    }

    // Settings dialog operations, forwarded to the staging store.

    pub fn open_settings(&self) {
        self.settings.write().open_dialog();
    }

    pub fn edit_setting(&self, field: SettingsField, value: impl Into<String>) {
        self.settings.write().edit_draft(field, value);
    }

    pub fn save_settings(&self) {
        self.settings.write().save();
    }

    pub fn close_settings(&self) {
        self.settings.write().close_dialog();
    }

    /// Snapshot of the committed route settings.
    pub fn committed_settings(&self) -> RouteSettings {
        self.settings.read().committed().clone()
    }

    /// Snapshot of the display state.
    pub fn display(&self) -> DisplayState {
        self.state.read().clone()
    }

    /// Refresh both weather slots from the committed settings.
    ///
    /// Both city requests go out together. If either fails, both slots get
    /// the error sentinel; a mix of data and sentinel is never shown. The
    /// failing city is logged, not displayed.
    pub async fn refresh_weather(&self) {
        let (current_city, destination_city) = {
            let settings = self.settings.read();
            let committed = settings.committed();
            (
                committed.current_location.clone(),
                committed.destination.clone(),
            )
        };

        match self
            .weather
            .fetch_pair(&current_city, &destination_city)
            .await
        {
            Ok((current, destination)) => {
                let mut state = self.state.write();
                state.current_weather = ForecastSlot::Forecast(current);
                state.destination_weather = ForecastSlot::Forecast(destination);
            }
            Err(e) => {
                tracing::error!(error = %e, "Weather refresh failed");
                let mut state = self.state.write();
                state.current_weather = ForecastSlot::Error(WEATHER_ERROR_MESSAGE);
                state.destination_weather = ForecastSlot::Error(WEATHER_ERROR_MESSAGE);
            }
        }
    }

    /// Refresh the departure list.
    ///
    /// On failure the previous list stays on screen; unlike weather there is
    /// no sentinel. The error is only logged.
    pub async fn refresh_schedule(&self) {
        match self.schedule.fetch_departures().await {
            Ok(departures) => {
                self.state.write().departures = departures;
            }
            Err(e) => {
                tracing::error!(error = %e, "Schedule refresh failed; keeping previous departures");
            }
        }
    }
}
