//! Delay-status classification.
//!
//! The schedule backend reports delay status as a free-form Japanese label.
//! Two labels are recognized; everything else (including an absent or empty
//! value) renders the same neutral style.

use serde::{Deserialize, Serialize};

/// Wire label for normal operation.
pub const STATUS_NORMAL: &str = "平常運転";
/// Wire label for a possible delay.
pub const STATUS_POSSIBLE_DELAY: &str = "遅延可能性あり";

/// Display category for a departure's delay status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DelayCategory {
    /// Running on time ("平常運転")
    Normal,
    /// Possible delay ("遅延可能性あり")
    Warning,
    /// Unrecognized or missing status
    #[default]
    Unknown,
}

impl DelayCategory {
    /// Classify a raw delay-status string. Total over all strings.
    pub fn from_status(status: &str) -> Self {
        match status {
            STATUS_NORMAL => Self::Normal,
            STATUS_POSSIBLE_DELAY => Self::Warning,
            _ => Self::Unknown,
        }
    }

    /// Badge style name for the rendering surface.
    pub fn style_name(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Warning => "warning",
            Self::Unknown => "unknown",
        }
    }
}
