//! Weather-State Classification
//!
//! ## Overview
//!
//! Maps one sensor reading (light, temperature, humidity) to a discrete
//! display state: a label, an icon glyph, and a background gradient. The
//! mapping is an ordered decision table evaluated top to bottom inside each
//! light branch; the first matching row wins.
//!
//! ## Contract
//!
//! [`classify`] is a total pure function. Every input combination yields a
//! defined [`WeatherState`], including [`LightLevel::Unknown`] and
//! non-finite numeric inputs. It never panics, never returns a placeholder,
//! and touches no state.
//!
//! ## Boundary policy
//!
//! Comparisons are a fixed mix of strict and inclusive bounds:
//!
//! | light | temperature      | humidity     | state              |
//! |-------|------------------|--------------|--------------------|
//! | dark  | `< 10`           | `> 80`       | Cold & Damp Night  |
//! | dark  | `10..=20`        | `> 70`       | Cool & Humid Night |
//! | dark  | otherwise        |              | Clear Night        |
//! | light | `< 10`           | `> 80`       | Cold & Damp Morning|
//! | light | `10..=20`        | `> 70`       | Cool & Humid       |
//! | light | `> 20 && <= 30`  | `40..=60`    | Pleasant Weather   |
//! | light | `> 30`           | `< 40`       | Hot & Dry          |
//! | light | `> 30`           | `>= 40`      | Hot & Humid        |
//! | light | otherwise        |              | Uncertain Day      |
//!
//! Edges belong to the inclusive band: 20.0 °C at 75 % humidity is
//! "Cool & Humid", not "Pleasant Weather", because the pleasant band opens
//! strictly above 20.

use crate::sample::{LightLevel, Sample};

/// Background gradient carried as presentation data.
///
/// Two or three CSS color stops plus a direction. The engine never
/// interprets these; they ride along with the label for whatever render
/// sink is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientSpec {
    pub direction: &'static str,
    pub stops: &'static [&'static str],
}

impl GradientSpec {
    const fn rightward(stops: &'static [&'static str]) -> Self {
        Self {
            direction: "to right",
            stops,
        }
    }
}

/// Derived display classification for one sample.
///
/// Fully determined by (light, temperature, humidity). Never persisted;
/// recomputed on every accepted reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherState {
    pub label: &'static str,
    pub icon: &'static str,
    pub background: GradientSpec,
}

const fn state(
    label: &'static str,
    icon: &'static str,
    stops: &'static [&'static str],
) -> WeatherState {
    WeatherState {
        label,
        icon,
        background: GradientSpec::rightward(stops),
    }
}

/// Classify a reading into its display state.
pub fn classify(light: LightLevel, temp_c: f32, humidity: f32) -> WeatherState {
    match light {
        LightLevel::Dark => {
            if temp_c < 10.0 && humidity > 80.0 {
                state("Cold & Damp Night", "🌫️", &["rgb(64, 90, 116)", "rgb(90, 189, 204)"])
            } else if (10.0..=20.0).contains(&temp_c) && humidity > 70.0 {
                state("Cool & Humid Night", "🌃", &["rgb(144, 147, 148)", "#203a43"])
            } else {
                state("Clear Night", "✨", &["rgb(88, 140, 237)", "rgb(108, 154, 206)"])
            }
        }
        LightLevel::Light => {
            if temp_c < 10.0 && humidity > 80.0 {
                state("Cold & Damp Morning", "🌫️", &["#3a6073", "#16222a"])
            } else if (10.0..=20.0).contains(&temp_c) && humidity > 70.0 {
                state("Cool & Humid", "🌥️", &["#bdc3c7", "#2c3e50"])
            } else if temp_c > 20.0 && temp_c <= 30.0 && (40.0..=60.0).contains(&humidity) {
                state("Pleasant Weather", "🌞", &["#56ccf2", "#2f80ed"])
            } else if temp_c > 30.0 && humidity < 40.0 {
                state("Hot & Dry", "🔥", &["#e96443", "#904e95"])
            } else if temp_c > 30.0 && humidity >= 40.0 {
                state("Hot & Humid", "💦", &["#f2994a", "#f2c94c"])
            } else {
                state("Uncertain Day", "❓", &["#757f9a", "#d7dde8"])
            }
        }
        LightLevel::Unknown => state("Unknown Light Level", "❓", &["#bdc3c7", "#2c3e50"]),
    }
}

/// Classify a whole sample.
pub fn classify_sample(sample: &Sample) -> WeatherState {
    classify(sample.light, sample.temperature, sample.humidity)
}

/// Whole-scene backdrop for the current light level.
///
/// Separate from the per-state card gradient: this is the day/night scene
/// behind the dashboard. The unknown level reuses the night scene.
pub fn scene_background(light: LightLevel) -> GradientSpec {
    match light {
        LightLevel::Light => GradientSpec {
            direction: "135deg",
            stops: &["#c9d6ff", "#e2e2e2"],
        },
        LightLevel::Dark | LightLevel::Unknown => GradientSpec {
            direction: "135deg",
            stops: &["#0f2027", "#203a43", "#2c5364"],
        },
    }
}
