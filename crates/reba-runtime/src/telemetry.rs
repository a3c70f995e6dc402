//! Log output setup
//!
//! The library crates only emit `tracing` events. Installing a subscriber
//! is left to the binary that embeds the engine.

use reba_core::{RebaError, RebaResult};
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Log output options
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// One JSON object per event instead of human-readable lines
    pub json: bool,
    /// Filter used when `RUST_LOG` is unset
    pub default_filter: String,
    /// Include the event target (module path)
    pub with_target: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        TelemetryConfig {
            json: false,
            default_filter: "info".to_string(),
            with_target: false,
        }
    }
}

impl TelemetryConfig {
    /// Machine-readable logs, for batch runs
    pub fn json() -> Self {
        TelemetryConfig {
            json: true,
            with_target: true,
            ..Self::default()
        }
    }

    fn filter(&self) -> RebaResult<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.default_filter)
                .map_err(|e| RebaError::InvalidConfig(format!("log filter: {e}"))),
        }
    }
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for reports.
pub fn init_tracing(config: &TelemetryConfig) -> RebaResult<()> {
    let filter = config.filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| RebaError::InvalidConfig(format!("log subscriber: {e}")))
}
