//! Core engine for the SkyWatch station dashboard
//!
//! Turns raw sensor readings into everything the dashboard shows:
//! a discrete weather state, threshold alerts, a live/offline judgment,
//! and a bounded trend history for charts.
//!
//! The crate is pure: no I/O, no clocks, no rendering. Timestamps come in
//! as arguments, results go out as values, and the station layer decides
//! what to do with them.
//!
//! ```
//! use skywatch_core::classify::classify;
//! use skywatch_core::sample::LightLevel;
//!
//! let state = classify(LightLevel::Light, 35.0, 30.0);
//! assert_eq!(state.label, "Hot & Dry");
//! ```

#![deny(unsafe_code)]

pub mod classify;
pub mod constants;
pub mod liveness;
pub mod sample;
pub mod thresholds;
pub mod time;
pub mod trend;

// Public API
pub use classify::{classify, classify_sample, scene_background, GradientSpec, WeatherState};
pub use liveness::{LivenessState, LivenessTracker};
pub use sample::{LightLevel, Sample};
pub use thresholds::{Alert, AlertKind, Alerts, Thresholds};
pub use time::{TimeSource, Timestamp};
pub use trend::{TrendBuffer, TrendPoint};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
