//! Render Seam
//!
//! The engine never touches a display technology. Everything it wants shown
//! goes through [`RenderSink`], a narrow trait a dashboard frontend (or a
//! test double) implements. The session pushes classified weather states,
//! liveness flips, thinned chart points, clock text, and the rotating
//! weather fact; the sink decides what any of that looks like.

use skywatch_core::classify::{GradientSpec, WeatherState};
use skywatch_core::sample::Sample;
use skywatch_core::trend::TrendPoint;

/// Receiver for everything the dashboard displays.
pub trait RenderSink: Send {
    /// A sample was accepted and classified.
    fn show_weather(&mut self, state: &WeatherState, sample: &Sample);

    /// The ambient day/night scene changed.
    fn show_scene(&mut self, scene: &GradientSpec);

    /// The connection indicator changed or was reaffirmed.
    fn show_liveness(&mut self, live: bool);

    /// A new point passed the chart spacing gate.
    fn append_chart(&mut self, point: &TrendPoint);

    /// Clock display refresh.
    fn show_clock(&mut self, date: &str, time: &str);

    /// A new ambient weather fact.
    fn show_fact(&mut self, fact: &str);
}

/// Sink that narrates to the `log` facade. Useful headless and in demos.
#[derive(Debug, Default)]
pub struct LogRender;

impl RenderSink for LogRender {
    fn show_weather(&mut self, state: &WeatherState, sample: &Sample) {
        log::info!(
            "{} {} ({}°C, {}%)",
            state.icon,
            state.label,
            sample.temperature,
            sample.humidity
        );
    }

    fn show_scene(&mut self, scene: &GradientSpec) {
        log::debug!("scene gradient: {} {:?}", scene.direction, scene.stops);
    }

    fn show_liveness(&mut self, live: bool) {
        log::info!("connection: {}", if live { "● Live" } else { "● Offline" });
    }

    fn append_chart(&mut self, point: &TrendPoint) {
        log::debug!(
            "chart point @ {}: {}°C / {}%",
            point.label.as_str(),
            point.temperature,
            point.humidity
        );
    }

    fn show_clock(&mut self, date: &str, time: &str) {
        log::trace!("clock: {date} {time}");
    }

    fn show_fact(&mut self, fact: &str) {
        log::info!("did you know? {fact}");
    }
}
