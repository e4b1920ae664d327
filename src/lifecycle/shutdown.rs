//! Shutdown coordination.
//!
//! A broadcast channel fans the stop signal out to every task that needs
//! it. Triggering is idempotent: racing triggers collapse into a single
//! shutdown sequence.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::broadcast;

/// Coordinator for graceful shutdown.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
    triggered: Arc<AtomicBool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self {
            tx,
            triggered: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger shutdown. Only the first call has any effect; later calls
    /// are no-ops.
    pub fn trigger(&self) {
        if self.triggered.swap(true, Ordering::SeqCst) {
            tracing::debug!("shutdown already triggered");
            return;
        }
        let _ = self.tx.send(());
    }

    /// Whether shutdown has been triggered.
    pub fn is_triggered(&self) -> bool {
        self.triggered.load(Ordering::SeqCst)
    }

    /// Resolve once shutdown has been triggered, including triggers that
    /// happened before this call.
    pub async fn triggered(&self) {
        // Subscribe before checking the flag: trigger() sets the flag and
        // then sends, so a send that races this call is either seen by the
        // flag read or received on the subscription.
        let mut rx = self.tx.subscribe();
        if self.is_triggered() {
            return;
        }
        let _ = rx.recv().await;
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_wakes_subscribers() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();

        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), rx.recv())
            .await
            .expect("subscriber should be woken")
            .unwrap();
    }

    #[tokio::test]
    async fn trigger_is_idempotent() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.is_triggered());

        shutdown.trigger();
        shutdown.trigger();

        assert!(shutdown.is_triggered());
    }

    #[tokio::test]
    async fn triggered_resolves_for_late_callers() {
        let shutdown = Shutdown::new();
        shutdown.trigger();

        tokio::time::timeout(Duration::from_secs(1), shutdown.triggered())
            .await
            .expect("already-triggered shutdown should resolve immediately");
    }

    #[tokio::test]
    async fn triggered_pends_until_trigger() {
        let shutdown = Shutdown::new();

        let waiter = tokio::spawn({
            let shutdown = shutdown.clone();
            async move { shutdown.triggered().await }
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        shutdown.trigger();
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter should resolve after trigger")
            .unwrap();
    }
}
