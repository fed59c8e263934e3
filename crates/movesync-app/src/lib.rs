//! MoveSync dashboard state and fetch orchestration.
//!
//! Glues the settings staging store to the weather and schedule clients and
//! holds the display state the rendering surface reads.

pub mod dashboard;
pub mod settings;

pub use dashboard::{Dashboard, DisplayState, ForecastSlot, WEATHER_ERROR_MESSAGE};
pub use settings::{RouteSettings, SettingsField, SettingsStore};
