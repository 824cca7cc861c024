//! Station Runtime
//!
//! ## Overview
//!
//! [`Station`] wires everything together: it loads settings, owns the
//! [`Session`] behind a lock, and drives it through the [`Scheduler`]'s
//! named tasks. One station is one dashboard.
//!
//! ## Retargeting
//!
//! Switching the device address tears down the old connection's poll and
//! liveness-check tasks *before* the new session state exists, so a stale
//! liveness timer can never flip the new connection offline. The trend
//! history and any visible notifications survive a retarget; only the
//! liveness machine restarts.
//!
//! ## Task layout
//!
//! | task           | period | scheduled when               |
//! |----------------|--------|------------------------------|
//! | poll           | 2 s    | connected                    |
//! | liveness-check | 5 s    | connected to a real device   |
//! | clock-tick     | 1 s    | always                       |
//! | fact-rotate    | 30 s   | always                       |
//!
//! The synthetic source gets no liveness-check task at all: it is live by
//! construction and has nothing to time out.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use log::{info, warn};

use skywatch_core::constants::{
    CLOCK_TICK_MS, FACT_ROTATE_MS, LIVENESS_CHECK_INTERVAL_MS, POLL_INTERVAL_MS,
};
use skywatch_core::thresholds::Thresholds;
use skywatch_core::time::{SystemClock, TimeSource};

use crate::device::{source_for, DeviceAddress, DeviceSource};
use crate::error::{AddressError, SettingsError};
use crate::notify::NotificationSink;
use crate::render::RenderSink;
use crate::scheduler::{Scheduler, TaskId};
use crate::session::Session;
use crate::settings::{self, SettingsStore};

/// A complete dashboard backend: session, scheduler, settings.
pub struct Station {
    session: Arc<Mutex<Session>>,
    scheduler: Scheduler,
    clock: Arc<dyn TimeSource + Send + Sync>,
    settings: Box<dyn SettingsStore>,
    address: Option<DeviceAddress>,
}

impl Station {
    /// Build a station from its collaborators. Thresholds come out of the
    /// settings store; the session starts disconnected.
    pub fn new(
        settings: Box<dyn SettingsStore>,
        notifications: Box<dyn NotificationSink>,
        render: Box<dyn RenderSink>,
    ) -> Self {
        let thresholds = settings::load_thresholds(settings.as_ref());
        let session = Session::new(false, thresholds, notifications, render);

        Self {
            session: Arc::new(Mutex::new(session)),
            scheduler: Scheduler::new(),
            clock: Arc::new(SystemClock),
            settings,
            address: None,
        }
    }

    /// Replace the wall clock. Tests use this to control time.
    pub fn with_clock(mut self, clock: Arc<dyn TimeSource + Send + Sync>) -> Self {
        self.clock = clock;
        self
    }

    /// Shared handle to the session, for embedders that render on demand.
    pub fn session(&self) -> Arc<Mutex<Session>> {
        self.session.clone()
    }

    pub fn address(&self) -> Option<&DeviceAddress> {
        self.address.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Start the always-on display tasks (clock, facts) without touching
    /// the connection. Safe to call repeatedly.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_ambient(&mut self) {
        if !self.scheduler.is_scheduled(TaskId::ClockTick) {
            let session = self.session.clone();
            let clock = self.clock.clone();
            self.scheduler.spawn_recurring(
                TaskId::ClockTick,
                Duration::from_millis(CLOCK_TICK_MS),
                move || {
                    let session = session.clone();
                    let clock = clock.clone();
                    async move {
                        session.lock().unwrap().clock_tick(clock.now());
                    }
                },
            );
        }

        if !self.scheduler.is_scheduled(TaskId::FactRotate) {
            let session = self.session.clone();
            self.scheduler.spawn_recurring(
                TaskId::FactRotate,
                Duration::from_millis(FACT_ROTATE_MS),
                move || {
                    let session = session.clone();
                    async move {
                        session.lock().unwrap().rotate_fact();
                    }
                },
            );
        }
    }

    /// Reconnect to the address stored in settings, if a valid one exists.
    /// Returns whether a connection was started.
    ///
    /// Must be called from within a tokio runtime.
    pub fn resume(&mut self) -> bool {
        match settings::load_device_address(self.settings.as_ref()) {
            Some(address) => {
                let source = source_for(&address);
                self.start(address, source);
                true
            }
            None => false,
        }
    }

    /// Validate an address, persist it, and (re)start polling against it.
    /// A malformed address is rejected with no state change.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect(&mut self, input: &str) -> Result<DeviceAddress, AddressError> {
        let address: DeviceAddress = input.parse()?;

        if let Err(e) = settings::save_device_address(self.settings.as_mut(), &address) {
            warn!("could not persist device address: {e}");
        }

        let source = source_for(&address);
        self.start(address.clone(), source);
        Ok(address)
    }

    /// Like [`Station::connect`] with a caller-supplied transport. Used by
    /// embedders with custom device plumbing and by tests.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect_with(&mut self, address: DeviceAddress, source: Arc<dyn DeviceSource>) {
        self.start(address, source);
    }

    fn start(&mut self, address: DeviceAddress, source: Arc<dyn DeviceSource>) {
        info!("connecting to device at {address}");

        // Old connection's timers must be gone before the new session
        // state exists; a stale check would flip it offline.
        self.scheduler.cancel(TaskId::LivenessCheck);
        self.scheduler.cancel(TaskId::Poll);

        let synthetic = address.is_synthetic();
        self.session.lock().unwrap().retarget(synthetic);

        {
            let session = self.session.clone();
            let clock = self.clock.clone();
            self.scheduler.spawn_recurring(
                TaskId::Poll,
                Duration::from_millis(POLL_INTERVAL_MS),
                move || {
                    let session = session.clone();
                    let clock = clock.clone();
                    let source = source.clone();
                    async move {
                        let result = source.fetch().await;
                        let now = clock.now();
                        let mut session = session.lock().unwrap();
                        match result {
                            Ok(raw) => {
                                session.handle_reading(now, raw);
                            }
                            Err(error) => session.handle_fetch_failure(now, &error),
                        }
                    }
                },
            );
        }

        if !synthetic {
            let session = self.session.clone();
            let clock = self.clock.clone();
            self.scheduler.spawn_recurring(
                TaskId::LivenessCheck,
                Duration::from_millis(LIVENESS_CHECK_INTERVAL_MS),
                move || {
                    let session = session.clone();
                    let clock = clock.clone();
                    async move {
                        session.lock().unwrap().check_liveness(clock.now());
                    }
                },
            );
        }

        self.start_ambient();
        self.address = Some(address);
    }

    /// Persist new threshold bounds and apply them to the running session.
    pub fn save_thresholds(&mut self, thresholds: Thresholds) -> Result<(), SettingsError> {
        settings::save_thresholds(self.settings.as_mut(), &thresholds)?;

        let mut session = self.session.lock().unwrap();
        session.set_thresholds(thresholds);
        session.notify(self.clock.now(), "Thresholds saved!", false);
        Ok(())
    }

    /// Wipe all persisted settings. The running session is untouched.
    pub fn clear_settings(&mut self) -> Result<(), SettingsError> {
        self.settings.clear()
    }

    /// Stop every scheduled task. The session state stays readable.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
        self.address = None;
    }
}
