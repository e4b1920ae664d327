//! Fault reporting for failures nothing else observes.
//!
//! # Design Decisions
//! - A spawned task that fails with `Err` is reported through the fault
//!   channel; the supervisor drains in-flight work before exiting, since
//!   the runtime that dispatched the task is still structurally sound
//! - An escaped panic leaves internal state in an unknown condition, so
//!   the panic hook exits the process immediately without draining

use std::fmt::Display;
use std::future::Future;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A failure observed in a background task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaultReport {
    /// Name of the task that failed.
    pub task: &'static str,
    /// Rendered error message.
    pub message: String,
}

/// Sending half of the fault channel.
#[derive(Debug, Clone)]
pub struct FaultSender {
    tx: mpsc::Sender<FaultReport>,
}

impl FaultSender {
    /// Report a fault. Silently dropped if the supervisor is gone.
    pub async fn report(&self, task: &'static str, message: impl Into<String>) {
        let _ = self
            .tx
            .send(FaultReport {
                task,
                message: message.into(),
            })
            .await;
    }
}

/// Create the fault channel. The receiver belongs to the supervisor.
pub fn channel() -> (FaultSender, mpsc::Receiver<FaultReport>) {
    let (tx, rx) = mpsc::channel(16);
    (FaultSender { tx }, rx)
}

/// Spawn a background task whose failure would otherwise go unobserved.
///
/// An `Err` return is logged and forwarded to the supervisor as a
/// [`FaultReport`].
pub fn spawn_monitored<F, E>(task: &'static str, faults: FaultSender, future: F) -> JoinHandle<()>
where
    F: Future<Output = Result<(), E>> + Send + 'static,
    E: Display + Send,
{
    tokio::spawn(async move {
        if let Err(err) = future.await {
            tracing::error!(task, error = %err, "background task failed");
            faults.report(task, err.to_string()).await;
        }
    })
}

/// Install the process-wide panic policy: log the panic and exit 1
/// immediately, without closing the listener or draining.
pub fn install_panic_exit() {
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        let location = info
            .location()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "unknown".to_string());

        tracing::error!(location = %location, message = %message, "uncaught panic");
        tracing::error!("terminating immediately");
        std::process::exit(1);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn failed_task_is_reported() {
        let (tx, mut rx) = channel();

        spawn_monitored("worker", tx, async {
            Err::<(), _>(std::io::Error::other("boom"))
        });

        let report = rx.recv().await.unwrap();
        assert_eq!(report.task, "worker");
        assert!(report.message.contains("boom"));
    }

    #[tokio::test]
    async fn successful_task_reports_nothing() {
        let (tx, mut rx) = channel();

        let handle = spawn_monitored("worker", tx, async { Ok::<(), std::io::Error>(()) });
        handle.await.unwrap();

        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn report_without_supervisor_does_not_panic() {
        let (tx, rx) = channel();
        drop(rx);

        tx.report("worker", "boom").await;
    }
}
