use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Base URL for OpenWeatherMap condition icons.
pub const ICON_BASE_URL: &str = "https://openweathermap.org/img/w";

/// Weather endpoint success body: the forecast sequence lives in `list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

/// One forecast slot, in the order returned by the endpoint.
///
/// Rendering order is significant; callers must not re-sort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Forecast timestamp, "YYYY-MM-DD HH:MM:SS"
    pub dt_txt: String,
    pub main: ForecastMetrics,
    pub weather: Vec<ConditionTag>,
}

/// Temperature and humidity block (`main` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastMetrics {
    /// Temperature in Celsius
    pub temp: f64,
    /// Relative humidity in percent
    pub humidity: f64,
}

/// Condition descriptor (`weather[0]` on the wire).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionTag {
    pub description: String,
    pub icon: String,
}

impl ForecastEntry {
    /// Parse `dt_txt` into a timestamp. Returns `None` on malformed input.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.dt_txt, "%Y-%m-%d %H:%M:%S").ok()
    }

    /// The "HH:MM" portion of `dt_txt`, or the whole string if it is shorter
    /// than expected.
    pub fn time_of_day(&self) -> &str {
        self.dt_txt.get(11..16).unwrap_or(&self.dt_txt)
    }

    /// Temperature rounded to the nearest degree for display.
    pub fn rounded_temp(&self) -> i64 {
        self.main.temp.round() as i64
    }

    /// Primary condition tag, if the endpoint supplied one.
    pub fn condition(&self) -> Option<&ConditionTag> {
        self.weather.first()
    }

    /// Icon image URL for the primary condition.
    pub fn icon_url(&self) -> Option<String> {
        self.condition()
            .map(|c| format!("{}/{}.png", ICON_BASE_URL, c.icon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entry() -> ForecastEntry {
        serde_json::from_value(serde_json::json!({
            "dt_txt": "2026-08-30 15:00:00",
            "main": { "temp": 28.64, "humidity": 61.0 },
            "weather": [
                { "description": "scattered clouds", "icon": "03d" }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn deserializes_wire_shape() {
        let entry = sample_entry();
        assert_eq!(entry.dt_txt, "2026-08-30 15:00:00");
        assert_eq!(entry.main.humidity, 61.0);
        assert_eq!(entry.condition().unwrap().icon, "03d");
    }

    #[test]
    fn ignores_extra_wire_fields() {
        // The real endpoint carries more fields (dt, clouds, wind, ...)
        let entry: ForecastEntry = serde_json::from_value(serde_json::json!({
            "dt": 1756537200,
            "dt_txt": "2026-08-30 15:00:00",
            "main": { "temp": 28.64, "humidity": 61.0, "pressure": 1011 },
            "weather": [{ "id": 802, "description": "scattered clouds", "icon": "03d" }],
            "clouds": { "all": 40 }
        }))
        .unwrap();
        assert_eq!(entry.rounded_temp(), 29);
    }

    #[test]
    fn time_of_day_slices_hh_mm() {
        assert_eq!(sample_entry().time_of_day(), "15:00");
    }

    #[test]
    fn time_of_day_short_input_is_total() {
        let mut entry = sample_entry();
        entry.dt_txt = "15:00".to_string();
        assert_eq!(entry.time_of_day(), "15:00");
    }

    #[test]
    fn timestamp_parses_dt_txt() {
        let ts = sample_entry().timestamp().unwrap();
        assert_eq!(ts.format("%H:%M").to_string(), "15:00");
    }

    #[test]
    fn timestamp_malformed_is_none() {
        let mut entry = sample_entry();
        entry.dt_txt = "not a timestamp".to_string();
        assert!(entry.timestamp().is_none());
    }

    #[test]
    fn icon_url_uses_openweathermap() {
        assert_eq!(
            sample_entry().icon_url().as_deref(),
            Some("https://openweathermap.org/img/w/03d.png")
        );
    }

    #[test]
    fn missing_condition_tag_is_none() {
        let mut entry = sample_entry();
        entry.weather.clear();
        assert!(entry.condition().is_none());
        assert!(entry.icon_url().is_none());
    }
}
