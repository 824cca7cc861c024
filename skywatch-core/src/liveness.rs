//! Connection Liveness Tracking
//!
//! Decides whether the station is "live" or "offline". Liveness is a
//! timeout judgment about the recency of the last accepted sample, not a
//! direct function of poll outcomes; the periodic check runs on its own
//! cadence, decoupled from the poll loop.
//!
//! Three inputs drive the machine:
//! - an accepted sample transitions to [`LivenessState::Live`] and records
//!   the arrival time,
//! - a periodic check transitions to [`LivenessState::Offline`] once the
//!   silence exceeds the timeout,
//! - a failed fetch forces offline immediately, without waiting for the
//!   next check.
//!
//! A tracker starts offline because nothing has been heard yet. The one
//! exception is the synthetic loopback source: it cannot go stale, so its
//! tracker is constructed [`LivenessTracker::always_live`] and the check
//! becomes a no-op (callers do not even schedule it).

use crate::constants::LIVENESS_TIMEOUT_MS;
use crate::time::Timestamp;

/// Whether the device is currently considered reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LivenessState {
    Live,
    Offline,
}

/// Timeout-driven live/offline state machine.
#[derive(Debug, Clone)]
pub struct LivenessTracker {
    state: LivenessState,
    last_seen: Option<Timestamp>,
    timeout_ms: u64,
    monitored: bool,
}

impl LivenessTracker {
    /// Tracker for a real device: offline until the first accepted sample.
    pub fn new() -> Self {
        Self {
            state: LivenessState::Offline,
            last_seen: None,
            timeout_ms: LIVENESS_TIMEOUT_MS,
            monitored: true,
        }
    }

    /// Tracker for the synthetic source: live from the start, never
    /// timeout-monitored.
    pub fn always_live() -> Self {
        Self {
            state: LivenessState::Live,
            last_seen: None,
            timeout_ms: LIVENESS_TIMEOUT_MS,
            monitored: false,
        }
    }

    /// Override the silence timeout.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn state(&self) -> LivenessState {
        self.state
    }

    pub fn is_live(&self) -> bool {
        self.state == LivenessState::Live
    }

    /// When the last sample was accepted, if any.
    pub fn last_seen(&self) -> Option<Timestamp> {
        self.last_seen
    }

    /// A sample was accepted at `now`. Returns true on a transition to live.
    pub fn on_sample_accepted(&mut self, now: Timestamp) -> bool {
        self.last_seen = Some(now);
        let was_offline = self.state == LivenessState::Offline;
        self.state = LivenessState::Live;
        was_offline
    }

    /// Periodic staleness check. Returns true on a transition to offline.
    pub fn on_check(&mut self, now: Timestamp) -> bool {
        if !self.monitored || self.state == LivenessState::Offline {
            return false;
        }

        match self.last_seen {
            Some(last) if now.saturating_sub(last) > self.timeout_ms => {
                self.state = LivenessState::Offline;
                true
            }
            _ => false,
        }
    }

    /// A fetch failed. Forces offline regardless of elapsed time.
    /// Returns true on a transition.
    pub fn mark_offline(&mut self) -> bool {
        let was_live = self.state == LivenessState::Live;
        self.state = LivenessState::Offline;
        was_live
    }
}

impl Default for LivenessTracker {
    fn default() -> Self {
        Self::new()
    }
}
