//! Threshold Monitoring
//!
//! Compares a sample against user-configured bounds and emits alert events.
//! The rules are deliberately simple:
//!
//! - Temperature and humidity are checked independently.
//! - Within one quantity the high bound is checked before the low bound and
//!   the two are mutually exclusive, so a single check emits at most one
//!   temperature alert and at most one humidity alert.
//! - An unset bound disables that check.
//! - Bounds are taken as given. Whether `min <= max` holds is the settings
//!   layer's concern; the monitor treats whatever it receives as absolute.
//!
//! The monitor is side-effect-free. Callers decide how alerts surface
//! (typically as urgent notifications with an audible cue).

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::sample::Sample;

/// User-configured alert bounds.
///
/// `None` means the bound is not configured and its check is skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub temp_min: Option<f32>,
    pub temp_max: Option<f32>,
    pub hum_min: Option<f32>,
    pub hum_max: Option<f32>,
}

/// Which bound a reading crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    TempHigh,
    TempLow,
    HumidityHigh,
    HumidityLow,
}

/// A threshold-breach event.
///
/// Carries the offending value and the bound it crossed. This is an alert
/// about the reading, not a liveness signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alert {
    pub kind: AlertKind,
    pub value: f32,
    pub bound: f32,
}

impl Alert {
    /// User-facing message for this alert.
    pub fn message(&self) -> String {
        match self.kind {
            AlertKind::TempHigh => format!("Temperature above {}°C!", self.bound),
            AlertKind::TempLow => format!("Temperature below {}°C!", self.bound),
            AlertKind::HumidityHigh => format!("Humidity above {}%!", self.bound),
            AlertKind::HumidityLow => format!("Humidity below {}%!", self.bound),
        }
    }
}

/// At most one temperature and one humidity alert per check.
pub type Alerts = Vec<Alert, 2>;

/// Check a sample against the configured bounds.
pub fn check(sample: &Sample, thresholds: &Thresholds) -> Alerts {
    let mut alerts = Alerts::new();

    // High before low, mutually exclusive per quantity. Capacity matches
    // the two quantities, so the pushes cannot fail.
    if let Some(alert) = check_quantity(
        sample.temperature,
        thresholds.temp_min,
        thresholds.temp_max,
        AlertKind::TempLow,
        AlertKind::TempHigh,
    ) {
        let _ = alerts.push(alert);
    }

    if let Some(alert) = check_quantity(
        sample.humidity,
        thresholds.hum_min,
        thresholds.hum_max,
        AlertKind::HumidityLow,
        AlertKind::HumidityHigh,
    ) {
        let _ = alerts.push(alert);
    }

    alerts
}

fn check_quantity(
    value: f32,
    min: Option<f32>,
    max: Option<f32>,
    low: AlertKind,
    high: AlertKind,
) -> Option<Alert> {
    if let Some(bound) = max {
        if value > bound {
            return Some(Alert {
                kind: high,
                value,
                bound,
            });
        }
    }
    if let Some(bound) = min {
        if value < bound {
            return Some(Alert {
                kind: low,
                value,
                bound,
            });
        }
    }
    None
}
