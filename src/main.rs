use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use steward::config;
use steward::http::AppServer;
use steward::lifecycle::faults;
use steward::lifecycle::Supervisor;

#[tokio::main]
async fn main() -> ExitCode {
    faults::install_panic_exit();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "steward=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "steward starting");

    let config = match config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(error = %err, "failed to load configuration");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        port = config.port,
        environment = %config.environment,
        drain_timeout_secs = config.shutdown.drain_timeout_secs,
        "configuration loaded"
    );

    let (faults_tx, faults_rx) = faults::channel();

    let handle = match AppServer::new(&config).listen(config.port, faults_tx).await {
        Ok(handle) => handle,
        Err(err) => {
            tracing::error!(port = config.port, error = %err, "failed to bind listener");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        port = handle.port(),
        url = %handle.local_url(),
        environment = %config.environment,
        "server started"
    );
    tracing::info!("press Ctrl+C to stop");

    let outcome = Supervisor::new(handle, faults_rx, &config.shutdown)
        .run()
        .await;

    ExitCode::from(outcome.exit_code())
}
