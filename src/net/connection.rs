//! In-flight request tracking.
//!
//! Each request holds a guard for its lifetime. The supervisor reads the
//! count for drain logging and can await quiescence through the tracker's
//! watch channel.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;

/// Global atomic counter for connection IDs. Relaxed ordering is enough:
/// only uniqueness matters, not synchronization.
static CONNECTION_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Generate a new unique ID.
    pub fn new() -> Self {
        Self(CONNECTION_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl Default for ConnectionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Tracks in-flight requests for graceful drain.
///
/// The count lives inside a watch channel so waiters are notified on
/// every change instead of polling.
#[derive(Debug, Clone)]
pub struct ConnectionTracker {
    count: Arc<watch::Sender<u64>>,
}

impl ConnectionTracker {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(0);
        Self {
            count: Arc::new(tx),
        }
    }

    /// Record a new in-flight request. Returns a guard that decrements on
    /// drop.
    pub fn track(&self) -> ConnectionGuard {
        self.count.send_modify(|n| *n += 1);
        ConnectionGuard {
            count: Arc::clone(&self.count),
            id: ConnectionId::new(),
        }
    }

    /// Current in-flight request count.
    pub fn active_count(&self) -> u64 {
        *self.count.borrow()
    }

    /// Wait until no requests are in flight.
    pub async fn wait_idle(&self) {
        let mut rx = self.count.subscribe();
        while *rx.borrow_and_update() > 0 {
            if rx.changed().await.is_err() {
                break;
            }
        }
    }
}

impl Default for ConnectionTracker {
    fn default() -> Self {
        Self::new()
    }
}

/// Guard that tracks one request's lifetime.
/// Decrements the active count when dropped.
#[derive(Debug)]
pub struct ConnectionGuard {
    count: Arc<watch::Sender<u64>>,
    id: ConnectionId,
}

impl ConnectionGuard {
    /// Get this request's ID.
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.count.send_modify(|n| *n -= 1);
        tracing::trace!(connection_id = %self.id, "request finished");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn connection_id_unique() {
        let id1 = ConnectionId::new();
        let id2 = ConnectionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn connection_tracker_counts() {
        let tracker = ConnectionTracker::new();
        assert_eq!(tracker.active_count(), 0);

        let guard1 = tracker.track();
        assert_eq!(tracker.active_count(), 1);

        let guard2 = tracker.track();
        assert_eq!(tracker.active_count(), 2);

        drop(guard1);
        assert_eq!(tracker.active_count(), 1);

        drop(guard2);
        assert_eq!(tracker.active_count(), 0);
    }

    #[tokio::test]
    async fn wait_idle_resolves_when_last_guard_drops() {
        let tracker = ConnectionTracker::new();
        let guard = tracker.track();

        let waiter = tokio::spawn({
            let tracker = tracker.clone();
            async move { tracker.wait_idle().await }
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!waiter.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), waiter)
            .await
            .expect("wait_idle should resolve")
            .unwrap();
    }

    #[tokio::test]
    async fn wait_idle_returns_immediately_when_idle() {
        let tracker = ConnectionTracker::new();
        tokio::time::timeout(Duration::from_millis(100), tracker.wait_idle())
            .await
            .expect("idle tracker should not block");
    }
}
