//! Device Addressing and Polling
//!
//! ## Overview
//!
//! The device speaks one fixed endpoint: `GET http://<address>/data`
//! returning `{"temperature": <number>, "humidity": <number>, "lux": 0|1}`.
//! This module owns everything up to that wire contract: address parsing,
//! the [`DeviceSource`] seam, the HTTP implementation, and the synthetic
//! loopback source used for offline demonstration.
//!
//! ## Address handling
//!
//! Addresses are validated before use. The literal `"test"` selects the
//! synthetic source; anything else must be a well-formed IPv4 address.
//! Rejection happens at parse time with no session state touched.
//!
//! ## Fetch semantics
//!
//! One fetch maps to exactly one [`Result`]:
//! - transport problems (refused, unreachable, timeout) are
//!   [`FetchError::Transport`],
//! - a non-2xx response is [`FetchError::Status`],
//! - a body that is not JSON, or is missing a numeric field, is
//!   [`FetchError::Payload`].
//!
//! There is no retry here: the poll loop itself is the retry, every 2
//! seconds, forever. The blocking HTTP client runs on the blocking thread
//! pool so scheduler timers keep firing while a fetch is outstanding.

use std::net::Ipv4Addr;
use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use skywatch_core::constants::{
    SYNTHETIC_HUMIDITY_PCT, SYNTHETIC_LUX, SYNTHETIC_TEMPERATURE_C,
};

use crate::error::{AddressError, FetchError};

/// Address literal that selects the synthetic loopback source.
pub const SYNTHETIC_ADDRESS: &str = "test";

/// Upper bound on one fetch. Short enough that a dead device cannot hold
/// the serialized poll loop for multiple poll periods.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// A validated polling target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceAddress {
    /// The canned loopback source, no network involved
    Synthetic,
    /// A real device reachable over HTTP
    Ip(Ipv4Addr),
}

impl DeviceAddress {
    pub fn is_synthetic(&self) -> bool {
        matches!(self, DeviceAddress::Synthetic)
    }

    /// Data endpoint URL, if this address involves the network.
    pub fn data_url(&self) -> Option<String> {
        match self {
            DeviceAddress::Synthetic => None,
            DeviceAddress::Ip(ip) => Some(format!("http://{ip}/data")),
        }
    }
}

impl FromStr for DeviceAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == SYNTHETIC_ADDRESS {
            return Ok(DeviceAddress::Synthetic);
        }
        trimmed
            .parse::<Ipv4Addr>()
            .map(DeviceAddress::Ip)
            .map_err(|_| AddressError(trimmed.to_string()))
    }
}

impl std::fmt::Display for DeviceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeviceAddress::Synthetic => f.write_str(SYNTHETIC_ADDRESS),
            DeviceAddress::Ip(ip) => write!(f, "{ip}"),
        }
    }
}

/// Raw reading exactly as the device reports it.
///
/// Field types enforce the wire contract: a missing field or a
/// non-numeric value fails deserialization instead of defaulting.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct RawReading {
    pub temperature: f32,
    pub humidity: f32,
    pub lux: i64,
}

/// Source of readings for the poll loop.
#[async_trait]
pub trait DeviceSource: Send + Sync {
    /// Acquire one reading or fail.
    async fn fetch(&self) -> Result<RawReading, FetchError>;
}

/// HTTP source for a real device.
pub struct HttpDevice {
    agent: ureq::Agent,
    url: String,
}

impl HttpDevice {
    pub fn new(ip: Ipv4Addr) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(FETCH_TIMEOUT)
            .user_agent(&format!("SkyWatch/{}", env!("CARGO_PKG_VERSION")))
            .build();

        Self {
            agent,
            url: format!("http://{ip}/data"),
        }
    }
}

#[async_trait]
impl DeviceSource for HttpDevice {
    async fn fetch(&self) -> Result<RawReading, FetchError> {
        let agent = self.agent.clone();
        let url = self.url.clone();

        // ureq is blocking; keep it off the timer threads.
        let response = tokio::task::spawn_blocking(move || agent.get(&url).call())
            .await
            .map_err(|e| FetchError::Transport(format!("fetch task failed: {e}")))?;

        let response = match response {
            Ok(resp) => resp,
            Err(ureq::Error::Status(status, _)) => {
                return Err(FetchError::Status { status });
            }
            Err(ureq::Error::Transport(e)) => {
                return Err(FetchError::Transport(e.to_string()));
            }
        };

        let body = response
            .into_string()
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        serde_json::from_str(&body).map_err(|e| FetchError::Payload(e.to_string()))
    }
}

/// Loopback source: a fixed warm, dry, daylight reading on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntheticDevice;

#[async_trait]
impl DeviceSource for SyntheticDevice {
    async fn fetch(&self) -> Result<RawReading, FetchError> {
        Ok(RawReading {
            temperature: SYNTHETIC_TEMPERATURE_C,
            humidity: SYNTHETIC_HUMIDITY_PCT,
            lux: SYNTHETIC_LUX,
        })
    }
}

/// Build the source matching an address.
pub fn source_for(address: &DeviceAddress) -> std::sync::Arc<dyn DeviceSource> {
    match address {
        DeviceAddress::Synthetic => std::sync::Arc::new(SyntheticDevice),
        DeviceAddress::Ip(ip) => std::sync::Arc::new(HttpDevice::new(*ip)),
    }
}
