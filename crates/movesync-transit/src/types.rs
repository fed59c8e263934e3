use serde::{Deserialize, Serialize};

use crate::delay::DelayCategory;

/// A single upcoming departure as returned by the schedule endpoint.
///
/// The list order is the endpoint's order and is never re-sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainDeparture {
    /// Backend row id; some rows come without one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    pub departure_time: String,
    pub arrival_time: String,

    /// Terminal direction label ("〜方面" suffix is added at render time).
    pub destination: String,

    /// Delay status, keyed by the fixed Japanese label on the wire.
    #[serde(rename = "遅延情報", default)]
    pub delay_status: String,
}

impl TrainDeparture {
    /// Classify this departure's delay status for display.
    pub fn delay_category(&self) -> DelayCategory {
        DelayCategory::from_status(&self.delay_status)
    }
}
