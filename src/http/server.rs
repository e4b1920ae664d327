//! HTTP server setup and the listen handle.
//!
//! # Responsibilities
//! - Wrap the application router with ambient middleware
//! - Bind the listener and serve with graceful shutdown
//! - Hand the supervisor a handle whose close runs at most once
//! - Report serving-task failures through the fault channel

use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde_json::json;
use tokio::task::JoinHandle;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::lifecycle::faults::FaultSender;
use crate::lifecycle::shutdown::Shutdown;
use crate::net::connection::ConnectionTracker;
use crate::net::listener::{self, ListenerError};

/// HTTP server wrapping the application router.
pub struct AppServer {
    router: Router,
    request_timeout: Duration,
}

impl AppServer {
    /// Server with the built-in stand-in application.
    pub fn new(config: &ServerConfig) -> Self {
        Self::with_router(config, default_router(config))
    }

    /// Server around a caller-provided application router.
    pub fn with_router(config: &ServerConfig, router: Router) -> Self {
        Self {
            router,
            request_timeout: config.http.request_timeout(),
        }
    }

    /// Bind `port` and begin serving. Returns once the listener is bound.
    ///
    /// A serving-task failure after startup is reported through `faults`,
    /// which resolves to the drain-then-exit path.
    pub async fn listen(
        self,
        port: u16,
        faults: FaultSender,
    ) -> Result<ListenHandle, ListenerError> {
        let (listener, local_addr) = listener::bind(port).await?;

        let tracker = ConnectionTracker::new();
        let shutdown = Shutdown::new();

        let app = self
            .router
            .layer(middleware::from_fn_with_state(
                tracker.clone(),
                track_in_flight,
            ))
            .layer(TimeoutLayer::new(self.request_timeout))
            .layer(TraceLayer::new_for_http());

        let stop = shutdown.clone();
        let task = tokio::spawn(async move {
            let serve = axum::serve(listener, app)
                .with_graceful_shutdown(async move { stop.triggered().await });
            if let Err(err) = serve.await {
                tracing::error!(error = %err, "server task failed");
                faults.report("http-server", err.to_string()).await;
            }
        });

        Ok(ListenHandle {
            local_addr,
            tracker,
            shutdown,
            task,
        })
    }
}

/// Middleware counting in-flight requests for graceful drain.
async fn track_in_flight(
    State(tracker): State<ConnectionTracker>,
    request: Request,
    next: Next,
) -> Response {
    let guard = tracker.track();
    tracing::trace!(connection_id = %guard.id(), "request started");
    next.run(request).await
}

fn default_router(config: &ServerConfig) -> Router {
    let environment = config.environment.clone();
    Router::new()
        .route(
            "/",
            get(move || {
                let environment = environment.clone();
                async move {
                    Json(json!({
                        "service": env!("CARGO_PKG_NAME"),
                        "version": env!("CARGO_PKG_VERSION"),
                        "environment": environment,
                    }))
                }
            }),
        )
        .route("/healthz", get(|| async { "ok" }))
}

/// Handle to the bound, serving listener.
///
/// Closing consumes the handle, so the drain sequence can run at most
/// once no matter how shutdown triggers race.
#[derive(Debug)]
pub struct ListenHandle {
    local_addr: SocketAddr,
    tracker: ConnectionTracker,
    shutdown: Shutdown,
    task: JoinHandle<()>,
}

/// How a graceful close finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Every in-flight request finished.
    Drained,
    /// The drain wait hit its bound; remaining requests were abandoned.
    TimedOut { abandoned: u64 },
}

impl ListenHandle {
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    /// URL the service is reachable at locally.
    pub fn local_url(&self) -> String {
        format!("http://localhost:{}", self.port())
    }

    /// In-flight requests right now.
    pub fn in_flight(&self) -> u64 {
        self.tracker.active_count()
    }

    /// Stop accepting new connections, wait for in-flight requests to
    /// finish, then tear the serving task down. The wait is bounded by
    /// `drain_timeout`.
    pub async fn close(mut self, drain_timeout: Duration) -> CloseOutcome {
        tracing::info!(
            in_flight = self.tracker.active_count(),
            "closing listener, draining in-flight requests"
        );
        self.shutdown.trigger();

        match tokio::time::timeout(drain_timeout, &mut self.task).await {
            Ok(joined) => {
                if let Err(err) = joined {
                    tracing::warn!(error = %err, "server task ended abnormally during drain");
                }
                tracing::info!("listener fully closed");
                CloseOutcome::Drained
            }
            Err(_) => {
                self.task.abort();
                CloseOutcome::TimedOut {
                    abandoned: self.tracker.active_count(),
                }
            }
        }
    }
}
