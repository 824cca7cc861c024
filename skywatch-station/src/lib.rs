//! Station runtime for the SkyWatch dashboard
//!
//! Everything around the pure engine in `skywatch-core`: polling the
//! device over HTTP, persisting settings, scheduling the periodic drivers,
//! and fanning accepted readings out to the display seams.
//!
//! ## Architecture
//!
//! ```text
//! Scheduler ──(2 s)──▶ DeviceSource::fetch ──▶ Session ──▶ RenderSink
//!     │                                          │  │
//!     ├──(5 s)──▶ liveness check ────────────────┘  └───▶ Notifier ──▶ NotificationSink
//!     ├──(1 s)──▶ clock tick
//!     └──(30 s)─▶ fact rotate
//! ```
//!
//! The session is the only mutable state; every timer callback locks it,
//! runs to completion, and releases. Fetches happen outside the lock, so a
//! slow device never stalls the clock or the staleness judgment.
//!
//! ## Quick start
//!
//! ```no_run
//! use skywatch_station::notify::LogNotifications;
//! use skywatch_station::render::LogRender;
//! use skywatch_station::runtime::Station;
//! use skywatch_station::settings::MemoryStore;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut station = Station::new(
//!         Box::new(MemoryStore::new()),
//!         Box::new(LogNotifications),
//!         Box::new(LogRender),
//!     );
//!
//!     // "test" selects the synthetic loopback device
//!     station.connect("test").expect("synthetic address is valid");
//!     tokio::time::sleep(std::time::Duration::from_secs(30)).await;
//! }
//! ```

#![deny(unsafe_code)]

pub mod device;
pub mod error;
pub mod facts;
pub mod notify;
pub mod render;
pub mod runtime;
pub mod scheduler;
pub mod session;
pub mod settings;

pub use device::{DeviceAddress, DeviceSource, RawReading, SYNTHETIC_ADDRESS};
pub use error::{AddressError, FetchError, SettingsError};
pub use notify::{NotificationSink, Notifier};
pub use render::RenderSink;
pub use runtime::Station;
pub use scheduler::{Scheduler, TaskId};
pub use session::Session;
pub use settings::{JsonFileStore, MemoryStore, SettingsStore};
