//! Operational constants for the station engine
//!
//! Every cadence and capacity lives here so the relationships between them
//! stay visible. The three periodic drivers are intentionally decoupled:
//! polling acquires data, the liveness check judges staleness, and the chart
//! gate thins the stream for plotting. None of them share a period.

use crate::time::Timestamp;

/// How often the device is polled for a fresh reading.
pub const POLL_INTERVAL_MS: u64 = 2000;

/// How often the liveness check runs.
///
/// Independent of the poll period: liveness is a judgment about elapsed
/// time since the last accepted sample, not about poll outcomes.
pub const LIVENESS_CHECK_INTERVAL_MS: u64 = 5000;

/// Maximum silence before a monitored connection is declared offline.
pub const LIVENESS_TIMEOUT_MS: u64 = 6000;

/// Clock display refresh period. Presentation only.
pub const CLOCK_TICK_MS: u64 = 1000;

/// Minimum spacing between chart points.
///
/// Charts sample far more coarsely than the poll loop; at one point per
/// 9 seconds a full buffer spans roughly 25 hours of history.
pub const CHART_MIN_SPACING_MS: Timestamp = 9000;

/// Maximum number of points retained per trend series.
pub const TREND_CAPACITY: usize = 10_000;

/// How long a notification stays visible, and therefore how long an
/// identical message is suppressed.
pub const NOTIFICATION_VISIBLE_MS: Timestamp = 2000;

/// Rotation period for the ambient weather facts.
pub const FACT_ROTATE_MS: u64 = 30_000;

/// Canned reading served by the synthetic device: warm, dry, daylight.
pub const SYNTHETIC_TEMPERATURE_C: f32 = 35.0;
pub const SYNTHETIC_HUMIDITY_PCT: f32 = 40.0;
pub const SYNTHETIC_LUX: i64 = 1;
