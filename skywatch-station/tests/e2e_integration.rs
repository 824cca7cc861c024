//! End-to-End Integration Tests for the SkyWatch Station
//!
//! Each test models one realistic dashboard scenario, from device readings
//! through classification, alerting, liveness, and charting. Scheduled
//! scenarios run on tokio's paused clock so the periodic tasks fire
//! deterministically.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use skywatch_core::sample::Sample;
use skywatch_core::thresholds::Thresholds;
use skywatch_core::time::{TimeSource, Timestamp};
use skywatch_core::trend::TrendPoint;
use skywatch_core::{GradientSpec, WeatherState};

use skywatch_station::device::{DeviceAddress, DeviceSource, RawReading, SyntheticDevice};
use skywatch_station::error::FetchError;
use skywatch_station::notify::NotificationSink;
use skywatch_station::render::RenderSink;
use skywatch_station::runtime::Station;
use skywatch_station::session::Session;
use skywatch_station::settings::{self, MemoryStore, SettingsStore, KEY_TEMP_MAX};

// ===== TEST CONSTANTS =====

/// Device poll period, as configured in the engine.
const POLL_MS: u64 = 2000;

/// Silence threshold before a connection is judged offline.
const LIVENESS_TIMEOUT_MS: u64 = 6000;

/// The synthetic device reports 35 °C at 40 % humidity in daylight.
const SYNTHETIC_TEMP_C: f32 = 35.0;

/// A comfortable alert bound that the synthetic reading exceeds.
const ALERT_TEMP_MAX_C: f32 = 30.0;

// ===== TEST DOUBLES =====

/// Records everything both sinks receive.
#[derive(Default)]
struct SinkLog {
    notifications: Vec<(String, bool)>,
    liveness: Vec<bool>,
    weather: Vec<&'static str>,
    chart: Vec<TrendPoint>,
}

#[derive(Default, Clone)]
struct Recorder(Arc<Mutex<SinkLog>>);

impl Recorder {
    fn log(&self) -> std::sync::MutexGuard<'_, SinkLog> {
        self.0.lock().unwrap()
    }
}

impl NotificationSink for Recorder {
    fn notify(&mut self, message: &str, urgent: bool) {
        self.log().notifications.push((message.to_string(), urgent));
    }
}

impl RenderSink for Recorder {
    fn show_weather(&mut self, state: &WeatherState, _sample: &Sample) {
        self.log().weather.push(state.label);
    }

    fn show_scene(&mut self, _scene: &GradientSpec) {}

    fn show_liveness(&mut self, live: bool) {
        self.log().liveness.push(live);
    }

    fn append_chart(&mut self, point: &TrendPoint) {
        self.log().chart.push(point.clone());
    }

    fn show_clock(&mut self, _date: &str, _time: &str) {}

    fn show_fact(&mut self, _fact: &str) {}
}

/// Wall clock the test advances by hand.
#[derive(Clone, Default)]
struct ManualClock(Arc<AtomicU64>);

impl ManualClock {
    fn advance(&self, ms: u64) {
        self.0.fetch_add(ms, Ordering::SeqCst);
    }
}

impl TimeSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.0.load(Ordering::SeqCst)
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Device that refuses every fetch the same way.
struct FailingDevice;

#[async_trait]
impl DeviceSource for FailingDevice {
    async fn fetch(&self) -> Result<RawReading, FetchError> {
        Err(FetchError::Transport("connection refused".into()))
    }
}

fn station_with_recorder(store: MemoryStore) -> (Station, Recorder, ManualClock) {
    let recorder = Recorder::default();
    let clock = ManualClock::default();
    let station = Station::new(
        Box::new(store),
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    )
    .with_clock(Arc::new(clock.clone()));

    (station, recorder, clock)
}

// ===== SCENARIOS =====

/// Connect to the synthetic device with an alert bound configured below
/// its canned temperature: one poll must classify the reading, chart it,
/// flag the station live, and raise exactly one urgent alert.
#[tokio::test(start_paused = true)]
async fn synthetic_poll_classifies_and_alerts() {
    let mut store = MemoryStore::new();
    store
        .set(KEY_TEMP_MAX, &ALERT_TEMP_MAX_C.to_string())
        .unwrap();

    let (mut station, recorder, _clock) = station_with_recorder(store);
    station.connect("test").expect("synthetic address is valid");

    // First poll tick is immediate
    tokio::time::sleep(Duration::from_millis(10)).await;

    {
        let session = station.session();
        let session = session.lock().unwrap();
        assert!(session.is_live());
        assert_eq!(session.trend().len(), 1);
        assert_eq!(
            session.trend().last().unwrap().temperature,
            SYNTHETIC_TEMP_C
        );
    }

    let log = recorder.log();
    assert_eq!(log.weather, vec!["Hot & Humid"]);
    assert_eq!(log.liveness, vec![true]);
    assert_eq!(
        log.notifications,
        vec![("Temperature above 30°C!".to_string(), true)]
    );
    assert_eq!(log.chart.len(), 1);
}

/// A dead device: every poll fails, the station flips offline once, and
/// the identical failure message surfaces exactly once while visible.
#[tokio::test(start_paused = true)]
async fn repeated_fetch_failures_notify_once() {
    let (mut station, recorder, _clock) = station_with_recorder(MemoryStore::new());

    let address: DeviceAddress = "192.168.1.50".parse().unwrap();
    station.connect_with(address, Arc::new(FailingDevice));

    // Three failing polls inside one notification visibility window
    tokio::time::sleep(Duration::from_millis(2 * POLL_MS + 100)).await;

    assert!(!station.session().lock().unwrap().is_live());

    let log = recorder.log();
    let failures: Vec<_> = log
        .notifications
        .iter()
        .filter(|(text, _)| text.contains("connection refused"))
        .collect();
    assert_eq!(failures.len(), 1);
    assert!(!failures[0].1, "fetch failures are not urgent alerts");
    assert!(log.weather.is_empty(), "failures must not classify");
    assert!(log.chart.is_empty(), "failures must not chart");
}

/// Silence after a healthy start: the liveness check, not the poll loop,
/// flips the station offline once the timeout elapses.
#[tokio::test(start_paused = true)]
async fn silence_goes_offline_via_liveness_check() {
    let (mut station, recorder, clock) = station_with_recorder(MemoryStore::new());

    // One good poll, then the device falls silent without erroring:
    // fetches hang longer than any horizon we await here.
    struct OneShotThenHang {
        inner: SyntheticDevice,
        polls: AtomicU64,
    }

    #[async_trait]
    impl DeviceSource for OneShotThenHang {
        async fn fetch(&self) -> Result<RawReading, FetchError> {
            if self.polls.fetch_add(1, Ordering::SeqCst) == 0 {
                return self.inner.fetch().await;
            }
            std::future::pending().await
        }
    }

    let address: DeviceAddress = "10.0.0.9".parse().unwrap();
    station.connect_with(
        address,
        Arc::new(OneShotThenHang {
            inner: SyntheticDevice,
            polls: AtomicU64::new(0),
        }),
    );

    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(station.session().lock().unwrap().is_live());

    // Just under the timeout: the check keeps the station live
    clock.advance(LIVENESS_TIMEOUT_MS - 1);
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(station.session().lock().unwrap().is_live());

    // Past the timeout: the next check flips offline
    clock.advance(2);
    tokio::time::sleep(Duration::from_millis(5000)).await;
    assert!(!station.session().lock().unwrap().is_live());

    let log = recorder.log();
    assert_eq!(log.liveness, vec![true, false]);
}

/// Retargeting to the synthetic device must tear down the old liveness
/// timer: the new session stays live no matter how long the test sleeps.
#[tokio::test(start_paused = true)]
async fn retarget_cancels_stale_liveness_timer() {
    let (mut station, _recorder, _clock) = station_with_recorder(MemoryStore::new());

    let address: DeviceAddress = "192.168.1.50".parse().unwrap();
    station.connect_with(address, Arc::new(FailingDevice));
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!station.session().lock().unwrap().is_live());

    station.connect("test").expect("synthetic address is valid");
    tokio::time::sleep(Duration::from_millis(30_000)).await;

    // No stale check ever flipped the synthetic session offline
    assert!(station.session().lock().unwrap().is_live());
}

/// Saving threshold bounds applies them to the running session
/// immediately and surfaces a confirmation notice.
#[tokio::test(start_paused = true)]
async fn thresholds_persist_and_apply() {
    let (mut station, recorder, _clock) = station_with_recorder(MemoryStore::new());

    let bounds = Thresholds {
        temp_max: Some(ALERT_TEMP_MAX_C),
        hum_min: Some(20.0),
        ..Thresholds::default()
    };
    station.save_thresholds(bounds).unwrap();

    assert_eq!(*station.session().lock().unwrap().thresholds(), bounds);
    assert!(recorder
        .log()
        .notifications
        .iter()
        .any(|(text, urgent)| text == "Thresholds saved!" && !urgent));
}

/// Pure-engine walkthrough of a warming day: classification bands shift,
/// the chart thins the poll stream, and a threshold crossing alerts.
#[test]
fn warming_day_walkthrough() {
    let recorder = Recorder::default();
    let thresholds = Thresholds {
        temp_max: Some(ALERT_TEMP_MAX_C),
        ..Thresholds::default()
    };
    let mut session = Session::new(
        false,
        thresholds,
        Box::new(recorder.clone()),
        Box::new(recorder.clone()),
    );

    // Cool humid morning climbing to a hot dry afternoon, one reading
    // per poll period
    let readings = [
        (15.0, 75.0),
        (18.0, 72.0),
        (24.0, 55.0),
        (29.0, 45.0),
        (33.0, 35.0),
    ];
    for (i, (temp, hum)) in readings.into_iter().enumerate() {
        let now = settings_free_time(i as u64 * POLL_MS);
        session.handle_reading(
            now,
            RawReading {
                temperature: temp,
                humidity: hum,
                lux: 1,
            },
        );
    }

    let log = recorder.log();
    assert_eq!(
        log.weather,
        vec![
            "Cool & Humid",
            "Cool & Humid",
            "Pleasant Weather",
            "Pleasant Weather",
            "Hot & Dry",
        ]
    );

    // Only the final reading crossed the bound
    assert_eq!(
        log.notifications,
        vec![("Temperature above 30°C!".to_string(), true)]
    );

    // Chart gate: readings every 2 s chart at 0 s only (8 s span)
    assert_eq!(log.chart.len(), 1);
    drop(log);

    // The device goes quiet; the station notices past the timeout
    let last_poll = settings_free_time(4 * POLL_MS);
    assert!(!session.check_liveness(last_poll + LIVENESS_TIMEOUT_MS));
    assert!(session.check_liveness(last_poll + LIVENESS_TIMEOUT_MS + 1));
    assert!(!session.is_live());
}

/// Settings survive a round-trip through a real file on disk.
#[test]
fn settings_round_trip_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("station.json");

    {
        let mut store = skywatch_station::JsonFileStore::open(&path).unwrap();
        settings::save_thresholds(
            &mut store,
            &Thresholds {
                temp_min: Some(5.0),
                temp_max: Some(30.0),
                hum_min: None,
                hum_max: Some(80.0),
            },
        )
        .unwrap();
        settings::save_device_address(&mut store, &DeviceAddress::Synthetic).unwrap();
    }

    let store = skywatch_station::JsonFileStore::open(&path).unwrap();
    let thresholds = settings::load_thresholds(&store);
    assert_eq!(thresholds.temp_max, Some(30.0));
    assert_eq!(thresholds.hum_min, None);
    assert_eq!(
        settings::load_device_address(&store),
        Some(DeviceAddress::Synthetic)
    );
}

/// Plain offset used as a wall-clock stand-in for pure-engine scenarios.
fn settings_free_time(offset_ms: u64) -> Timestamp {
    1_700_000_000_000 + offset_ms
}
