//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, APP_ENV, STEWARD_CONFIG)
//!     → loader.rs (optional TOML file, then env overrides)
//!     → ServerConfig (validated, immutable)
//!     → read once at startup, never mutated
//! ```
//!
//! # Design Decisions
//! - Config is init-only; there is no reload path
//! - All fields have defaults so an empty environment still boots
//! - An unparseable PORT falls back to the default instead of aborting

pub mod loader;
pub mod schema;

pub use loader::{from_env, load_file, ConfigError};
pub use schema::{HttpConfig, ServerConfig, ShutdownConfig};
