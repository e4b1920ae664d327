//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Bind listener → Log status → Hand off to supervisor
//!
//! Serving (supervisor.rs):
//!     SIGTERM/SIGINT (signals.rs) ──┐
//!     background fault (faults.rs) ─┼─▶ one shutdown sequence
//!                                   │   trigger (shutdown.rs) → drain → exit
//!     escaped panic (faults.rs) ────┴─▶ immediate exit, no drain
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: stop accepting, drain in-flight, then exit
//! - Drain wait is bounded: forced exit after the configured deadline
//! - Exit codes distinguish operator-initiated (0) from fault-initiated (1)

pub mod faults;
pub mod shutdown;
pub mod signals;
pub mod supervisor;

pub use shutdown::Shutdown;
pub use supervisor::{Outcome, Supervisor};
