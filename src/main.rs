use std::sync::Arc;

use error_stack::ResultExt;
use sheets_append::{
    adapters::{config::app_config::AppConfig, sheets::GoogleSheetsConnector},
    build_router, telemetry, RowAppender,
};
use thiserror::Error;
use tokio::signal;
use tracing::{info, instrument, warn};

#[derive(Error, Debug)]
enum StartupError {
    #[error("Failed to load configuration")]
    Config,
    #[error("Failed to bind listener")]
    Bind,
    #[error("Server stopped with an error")]
    Serve,
}

#[tokio::main]
async fn main() -> error_stack::Result<(), StartupError> {
    let config = AppConfig::load().change_context(StartupError::Config)?;

    telemetry::setup_tracing(config.log_json);
    telemetry::setup_panic_hook();

    run(config).await
}

#[instrument]
async fn run(config: AppConfig) -> error_stack::Result<(), StartupError> {
    let row_appender_config = config.row_appender_config();
    if let Err(error) = row_appender_config.validate() {
        warn!("{}; every append request will fail until it is set", error);
    }

    let row_appender = Arc::new(RowAppender::new(
        row_appender_config,
        Arc::new(GoogleSheetsConnector::new()),
    ));
    let app = build_router(row_appender);

    let address = config.listen_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .change_context(StartupError::Bind)
        .attach_printable_lazy(|| format!("Address: {}", address))?;
    info!(
        "Listening on {}",
        listener.local_addr().change_context(StartupError::Bind)?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .change_context(StartupError::Serve)?;

    info!("Graceful shutdown completed");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = signal::ctrl_c().await {
        warn!("Failed to listen for ctrl-c: {}", error);
        std::future::pending::<()>().await;
    }
    info!("Received shutdown signal, stopping server...");
}
