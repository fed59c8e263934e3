//! Train schedule client for MoveSync
//!
//! Fetches the upcoming departure list from the backend's schedule endpoint
//! and classifies the Japanese delay-status labels it carries.

pub mod client;
pub mod delay;
pub mod types;

pub use client::ScheduleClient;
pub use delay::DelayCategory;
pub use types::TrainDeparture;
