//! Headless station demo
//!
//! Runs a complete station against the synthetic device (or a real one,
//! if you pass its IPv4 address) and narrates everything through the log
//! sinks:
//!
//! ```text
//! RUST_LOG=info cargo run --example station_demo            # synthetic
//! RUST_LOG=info cargo run --example station_demo 192.168.1.50
//! ```
//!
//! The preset temperature bound sits below the synthetic reading, so the
//! demo raises an alert on its very first poll.

use skywatch_station::notify::LogNotifications;
use skywatch_station::render::LogRender;
use skywatch_station::runtime::Station;
use skywatch_station::settings::{MemoryStore, SettingsStore, KEY_TEMP_MAX};
use skywatch_station::SYNTHETIC_ADDRESS;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::init();

    let mut store = MemoryStore::new();
    store
        .set(KEY_TEMP_MAX, "30")
        .expect("memory store never fails");

    let mut station = Station::new(
        Box::new(store),
        Box::new(LogNotifications),
        Box::new(LogRender),
    );

    let address = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SYNTHETIC_ADDRESS.to_string());

    match station.connect(&address) {
        Ok(address) => log::info!("station polling {address}, ctrl-c to stop"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }

    tokio::signal::ctrl_c().await.ok();
    station.shutdown();
}
