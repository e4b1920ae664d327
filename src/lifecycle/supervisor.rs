//! Process lifecycle supervision.
//!
//! # Data Flow
//! ```text
//! serving:
//!     termination signal ──┐
//!     background fault ────┼─▶ one shutdown sequence:
//!                          │      log trigger → close handle (drain) → Outcome
//! stopped:
//!     Outcome → process exit code (0 operator, 1 fault)
//! ```
//!
//! # Design Decisions
//! - Exactly one shutdown sequence runs: the select resolves a single
//!   trigger and `close` consumes the handle
//! - Escaped panics never reach the supervisor; the panic hook exits first
//! - The drain wait is bounded by the configured timeout; the trigger's
//!   exit code is preserved when the bound is hit

use std::future::Future;

use tokio::sync::mpsc;

use crate::config::ShutdownConfig;
use crate::http::server::{CloseOutcome, ListenHandle};
use crate::lifecycle::faults::FaultReport;
use crate::lifecycle::signals::{self, TermSignal};

/// Terminal state of the supervised process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Operator-requested shutdown; the drain ran to completion or hit
    /// its bound.
    OperatorShutdown,
    /// A background fault forced a safe shutdown.
    FaultShutdown,
}

impl Outcome {
    /// Exit code reported to the parent process.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::OperatorShutdown => 0,
            Outcome::FaultShutdown => 1,
        }
    }
}

/// Owns the listen handle for the process lifetime and enforces the
/// shutdown policy.
pub struct Supervisor {
    handle: ListenHandle,
    faults: mpsc::Receiver<FaultReport>,
    config: ShutdownConfig,
}

impl Supervisor {
    pub fn new(
        handle: ListenHandle,
        faults: mpsc::Receiver<FaultReport>,
        config: &ShutdownConfig,
    ) -> Self {
        Self {
            handle,
            faults,
            config: config.clone(),
        }
    }

    /// Serve until a termination signal or background fault arrives, then
    /// drain and return the outcome.
    pub async fn run(self) -> Outcome {
        self.run_until(signals::shutdown_signal()).await
    }

    /// Like [`Supervisor::run`] with the signal source injected, for
    /// callers that bring their own termination event.
    pub async fn run_until<S>(mut self, signal: S) -> Outcome
    where
        S: Future<Output = TermSignal>,
    {
        tokio::pin!(signal);

        let outcome = tokio::select! {
            sig = &mut signal => {
                tracing::warn!(signal = %sig, "termination signal received, shutting down gracefully");
                Outcome::OperatorShutdown
            }
            Some(fault) = self.faults.recv() => {
                tracing::error!(task = fault.task, error = %fault.message, "unobserved task failure");
                tracing::error!("shutting down safely");
                Outcome::FaultShutdown
            }
        };

        let drain = self.handle.close(self.config.drain_timeout()).await;
        if let CloseOutcome::TimedOut { abandoned } = drain {
            tracing::warn!(abandoned, "drain timed out, in-flight requests abandoned");
        }

        if outcome == Outcome::OperatorShutdown {
            tracing::info!("server shut down cleanly");
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_distinguish_trigger_class() {
        assert_eq!(Outcome::OperatorShutdown.exit_code(), 0);
        assert_eq!(Outcome::FaultShutdown.exit_code(), 1);
    }
}
