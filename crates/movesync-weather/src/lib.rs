//! Weather client for MoveSync
//!
//! Fetches per-city forecast sequences from the backend's weather endpoint,
//! which relays OpenWeatherMap-shaped forecast data.

pub mod client;
pub mod types;

pub use client::WeatherClient;
pub use types::{ConditionTag, ForecastEntry, ForecastMetrics, ForecastResponse};
