//! Station Session
//!
//! ## Overview
//!
//! A [`Session`] is the explicit state object for one device connection:
//! liveness tracker, threshold bounds, trend history, notification
//! deduplication, and the render sink. No ambient globals; everything a
//! component needs arrives as an argument, which is what makes multiple
//! independent sessions and isolated tests possible.
//!
//! ## Fan-out
//!
//! Each poll outcome enters through exactly one of two doors:
//!
//! - [`Session::handle_reading`]: accept the sample, then fan out to the
//!   four consumers: liveness tracker, classifier, threshold monitor, and
//!   (gated) trend buffer. None of the four depends on another; the order
//!   here only fixes the render sequence.
//! - [`Session::handle_fetch_failure`]: force offline, surface one
//!   deduplicated notification, and change nothing else. No sample is
//!   recorded, nothing classifies, no chart point appears.
//!
//! The periodic liveness check and the clock/fact ticks enter through
//! their own methods, driven by the scheduler on independent cadences.

use chrono::{Local, TimeZone};
use log::{debug, warn};

use skywatch_core::classify::{classify_sample, scene_background};
use skywatch_core::constants::CHART_MIN_SPACING_MS;
use skywatch_core::liveness::LivenessTracker;
use skywatch_core::sample::{LightLevel, Sample};
use skywatch_core::thresholds::{self, Thresholds};
use skywatch_core::time::Timestamp;
use skywatch_core::trend::{TrendBuffer, TrendPoint};

use crate::device::RawReading;
use crate::error::FetchError;
use crate::facts::FactRotation;
use crate::notify::{NotificationSink, Notifier};
use crate::render::RenderSink;

/// Per-connection engine state and fan-out driver.
pub struct Session {
    tracker: LivenessTracker,
    thresholds: Thresholds,
    trend: TrendBuffer,
    notifier: Notifier,
    render: Box<dyn RenderSink>,
    last_chart_append: Option<Timestamp>,
    last_scene: Option<LightLevel>,
    facts: FactRotation,
}

impl Session {
    pub fn new(
        synthetic: bool,
        thresholds: Thresholds,
        notifications: Box<dyn NotificationSink>,
        render: Box<dyn RenderSink>,
    ) -> Self {
        Self {
            tracker: tracker_for(synthetic),
            thresholds,
            trend: TrendBuffer::new(),
            notifier: Notifier::new(notifications),
            render,
            last_chart_append: None,
            last_scene: None,
            facts: FactRotation::new(),
        }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    pub fn trend(&self) -> &TrendBuffer {
        &self.trend
    }

    pub fn is_live(&self) -> bool {
        self.tracker.is_live()
    }

    /// Point the session at a different device. The tracker restarts for
    /// the new connection; trend history and visible notifications are
    /// kept, matching a dashboard that re-targets without reloading.
    pub fn retarget(&mut self, synthetic: bool) {
        self.tracker = tracker_for(synthetic);
    }

    /// One successfully fetched reading.
    pub fn handle_reading(&mut self, now: Timestamp, raw: RawReading) -> Sample {
        let sample = Sample::new(
            raw.temperature,
            raw.humidity,
            LightLevel::from_lux(raw.lux),
            now,
        );
        debug!(
            "accepted sample: {}°C {}% {:?}",
            sample.temperature, sample.humidity, sample.light
        );

        self.tracker.on_sample_accepted(now);
        self.render.show_liveness(true);

        let state = classify_sample(&sample);
        self.render.show_weather(&state, &sample);
        self.update_scene(sample.light);

        for alert in thresholds::check(&sample, &self.thresholds) {
            self.notifier.notify(now, &alert.message(), true);
        }

        self.maybe_chart(now, &sample);
        sample
    }

    /// One failed poll. Offline, one notification, nothing else.
    pub fn handle_fetch_failure(&mut self, now: Timestamp, error: &FetchError) {
        warn!("poll failed: {error}");

        self.tracker.mark_offline();
        self.render.show_liveness(false);
        self.notifier
            .notify(now, &format!("Could not fetch sensor data: {error}"), false);
    }

    /// Periodic staleness check. Returns true if the session just went
    /// offline.
    pub fn check_liveness(&mut self, now: Timestamp) -> bool {
        if self.tracker.on_check(now) {
            self.render.show_liveness(false);
            return true;
        }
        false
    }

    /// Clock display refresh.
    pub fn clock_tick(&mut self, now: Timestamp) {
        let (date, time) = format_clock(now);
        self.render.show_clock(&date, &time);
    }

    /// Swap the ambient weather fact.
    pub fn rotate_fact(&mut self) {
        let fact = self.facts.next(&mut rand::thread_rng());
        self.render.show_fact(fact);
    }

    /// Surface a status message through the deduplicating notifier.
    pub fn notify(&mut self, now: Timestamp, message: &str, urgent: bool) -> bool {
        self.notifier.notify(now, message, urgent)
    }

    /// Flip the day/night scene only when the light level actually changed.
    /// An unknown level leaves the current scene alone.
    fn update_scene(&mut self, light: LightLevel) {
        if light == LightLevel::Unknown || self.last_scene == Some(light) {
            return;
        }
        self.render.show_scene(&scene_background(light));
        self.last_scene = Some(light);
    }

    /// Append a chart point if the spacing gate allows it. The first
    /// accepted sample always charts.
    fn maybe_chart(&mut self, now: Timestamp, sample: &Sample) {
        let due = match self.last_chart_append {
            None => true,
            Some(last) => now.saturating_sub(last) >= CHART_MIN_SPACING_MS,
        };
        if !due {
            return;
        }

        let (_, time) = format_clock(now);
        let point = TrendPoint::new(&time, sample.temperature, sample.humidity);
        self.trend.push(point.clone());
        self.render.append_chart(&point);
        self.last_chart_append = Some(now);
    }
}

fn tracker_for(synthetic: bool) -> LivenessTracker {
    if synthetic {
        LivenessTracker::always_live()
    } else {
        LivenessTracker::new()
    }
}

/// Local date and time strings for a millisecond timestamp.
fn format_clock(now: Timestamp) -> (String, String) {
    match Local.timestamp_millis_opt(now as i64).single() {
        Some(dt) => (
            dt.format("%Y-%m-%d").to_string(),
            dt.format("%H:%M:%S").to_string(),
        ),
        None => ("----------".to_string(), "--:--:--".to_string()),
    }
}
