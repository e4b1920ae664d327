//! Configuration schema definitions.
//!
//! All types derive serde traits so a TOML file can supply any subset;
//! every field has a default.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Port bound when `PORT` is absent or invalid.
pub const DEFAULT_PORT: u16 = 3000;

/// Environment label displayed when `APP_ENV` is absent.
pub const DEFAULT_ENVIRONMENT: &str = "development";

/// Root configuration for the server process.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Port the listener binds.
    pub port: u16,

    /// Environment label, used only for display.
    pub environment: String,

    /// HTTP middleware settings.
    pub http: HttpConfig,

    /// Shutdown behavior.
    pub shutdown: ShutdownConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
            http: HttpConfig::default(),
            shutdown: ShutdownConfig::default(),
        }
    }
}

/// HTTP middleware settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 30,
        }
    }
}

impl HttpConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Shutdown behavior.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ShutdownConfig {
    /// Upper bound on the graceful drain wait, in seconds. In-flight
    /// requests still running when this elapses are abandoned.
    pub drain_timeout_secs: u64,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            drain_timeout_secs: 30,
        }
    }
}

impl ShutdownConfig {
    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.drain_timeout_secs)
    }
}
