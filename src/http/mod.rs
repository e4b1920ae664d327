//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! application Router (built-in stand-in or caller-provided)
//!     → server.rs (ambient middleware: timeout, trace, in-flight tracking)
//!     → axum::serve with graceful shutdown
//!     → ListenHandle (owned by the supervisor, closes at most once)
//! ```

pub mod server;

pub use server::{AppServer, CloseOutcome, ListenHandle};
