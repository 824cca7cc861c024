//! Sensor reading types
//!
//! A [`Sample`] is one accepted reading from the device: temperature,
//! relative humidity, a binarized light flag, and the arrival timestamp.
//! Samples are immutable once constructed; every downstream component
//! (classifier, threshold monitor, liveness tracker, trend buffer) consumes
//! them read-only.

use crate::time::Timestamp;

/// Binarized ambient light level.
///
/// The device reports a day/night flag rather than a raw analog reading:
/// `0` is dark, `1` is light. Anything else on the wire is preserved as
/// [`LightLevel::Unknown`] so the classifier can still produce a defined
/// state for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightLevel {
    Dark,
    Light,
    Unknown,
}

impl LightLevel {
    /// Map the wire flag to a light level.
    pub fn from_lux(lux: i64) -> Self {
        match lux {
            0 => LightLevel::Dark,
            1 => LightLevel::Light,
            _ => LightLevel::Unknown,
        }
    }
}

/// One sensor reading.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Temperature in degrees Celsius
    pub temperature: f32,
    /// Relative humidity in percent (0-100)
    pub humidity: f32,
    /// Binarized light level
    pub light: LightLevel,
    /// When the reading was accepted, in milliseconds
    pub observed_at: Timestamp,
}

impl Sample {
    pub fn new(temperature: f32, humidity: f32, light: LightLevel, observed_at: Timestamp) -> Self {
        Self {
            temperature,
            humidity,
            light,
            observed_at,
        }
    }
}

/// Convert Celsius to Fahrenheit for the display-unit toggle.
pub fn to_fahrenheit(temp_c: f32) -> f32 {
    temp_c * 9.0 / 5.0 + 32.0
}
