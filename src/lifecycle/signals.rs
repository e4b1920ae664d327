//! OS signal handling.
//!
//! Translates operator termination requests into a typed event the
//! supervisor can select on.

use std::fmt;

/// Termination request received from the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermSignal {
    /// SIGTERM, e.g. from a process manager.
    Terminate,
    /// SIGINT / Ctrl+C.
    Interrupt,
}

impl fmt::Display for TermSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermSignal::Terminate => write!(f, "SIGTERM"),
            TermSignal::Interrupt => write!(f, "SIGINT"),
        }
    }
}

/// Wait for a termination signal.
#[cfg(unix)]
pub async fn shutdown_signal() -> TermSignal {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm =
        signal(SignalKind::terminate()).expect("failed to install SIGTERM handler");
    let mut sigint =
        signal(SignalKind::interrupt()).expect("failed to install SIGINT handler");

    tokio::select! {
        _ = sigterm.recv() => TermSignal::Terminate,
        _ = sigint.recv() => TermSignal::Interrupt,
    }
}

/// Best-effort fallback for non-unix targets.
#[cfg(not(unix))]
pub async fn shutdown_signal() -> TermSignal {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install Ctrl+C handler");
    TermSignal::Interrupt
}
