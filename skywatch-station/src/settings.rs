//! Settings Persistence
//!
//! A small key-value store holding the device address and the four
//! threshold bounds. Values are loaded once at startup and written only on
//! explicit user actions (save, clear); nothing in the poll path touches
//! persistence.
//!
//! The store keeps plain strings. Typed accessors on top of it parse
//! leniently on the way out: an absent or unparseable bound simply comes
//! back as `None` and disables that check, and a stored address that no
//! longer validates is discarded with a warning rather than trusted.

use std::collections::HashMap;
use std::path::PathBuf;

use log::warn;

use skywatch_core::thresholds::Thresholds;

use crate::device::DeviceAddress;
use crate::error::SettingsError;

/// Storage keys.
pub const KEY_DEVICE_ADDR: &str = "device_addr";
pub const KEY_TEMP_MIN: &str = "temp_min";
pub const KEY_TEMP_MAX: &str = "temp_max";
pub const KEY_HUM_MIN: &str = "hum_min";
pub const KEY_HUM_MAX: &str = "hum_max";

/// Key-value persistence seam.
pub trait SettingsStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
    fn remove(&mut self, key: &str) -> Result<(), SettingsError>;
    /// Wipe every stored value.
    fn clear(&mut self) -> Result<(), SettingsError>;
}

/// Volatile store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        self.values.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SettingsError> {
        self.values.clear();
        Ok(())
    }
}

/// JSON-file-backed store. Every mutation rewrites the file, so the
/// on-disk state always matches the in-memory state.
pub struct JsonFileStore {
    path: PathBuf,
    values: HashMap<String, String>,
}

impl JsonFileStore {
    /// Open a store, reading the file if it exists.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let values = if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            serde_json::from_str(&contents)?
        } else {
            HashMap::new()
        };

        Ok(Self { path, values })
    }

    fn persist(&self) -> Result<(), SettingsError> {
        let contents = serde_json::to_string_pretty(&self.values)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_string(), value.to_string());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        self.values.remove(key);
        self.persist()
    }

    fn clear(&mut self) -> Result<(), SettingsError> {
        self.values.clear();
        self.persist()
    }
}

fn parse_bound(store: &dyn SettingsStore, key: &str) -> Option<f32> {
    store.get(key).and_then(|raw| raw.trim().parse().ok())
}

/// Load threshold bounds. Missing or malformed entries disable the bound.
pub fn load_thresholds(store: &dyn SettingsStore) -> Thresholds {
    Thresholds {
        temp_min: parse_bound(store, KEY_TEMP_MIN),
        temp_max: parse_bound(store, KEY_TEMP_MAX),
        hum_min: parse_bound(store, KEY_HUM_MIN),
        hum_max: parse_bound(store, KEY_HUM_MAX),
    }
}

/// Persist threshold bounds. Unset bounds are removed from the store.
pub fn save_thresholds(
    store: &mut dyn SettingsStore,
    thresholds: &Thresholds,
) -> Result<(), SettingsError> {
    let entries = [
        (KEY_TEMP_MIN, thresholds.temp_min),
        (KEY_TEMP_MAX, thresholds.temp_max),
        (KEY_HUM_MIN, thresholds.hum_min),
        (KEY_HUM_MAX, thresholds.hum_max),
    ];

    for (key, bound) in entries {
        match bound {
            Some(value) => store.set(key, &value.to_string())?,
            None => store.remove(key)?,
        }
    }
    Ok(())
}

/// Load the stored device address, discarding one that no longer parses.
pub fn load_device_address(store: &dyn SettingsStore) -> Option<DeviceAddress> {
    let raw = store.get(KEY_DEVICE_ADDR)?;
    match raw.parse() {
        Ok(address) => Some(address),
        Err(_) => {
            warn!("stored device address {raw:?} is invalid, ignoring");
            None
        }
    }
}

/// Persist the device address.
pub fn save_device_address(
    store: &mut dyn SettingsStore,
    address: &DeviceAddress,
) -> Result<(), SettingsError> {
    store.set(KEY_DEVICE_ADDR, &address.to_string())
}
