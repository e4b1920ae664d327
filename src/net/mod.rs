//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming TCP connection
//!     → listener.rs (bind, diagnosable bind failures)
//!     → Hand off to HTTP layer
//!     → connection.rs (in-flight tracking for graceful drain)
//! ```
//!
//! # Design Decisions
//! - Bind failures are their own error path, not an anonymous fault
//! - Every in-flight request is tracked so drain progress is observable

pub mod connection;
pub mod listener;

pub use connection::{ConnectionGuard, ConnectionTracker};
pub use listener::ListenerError;
