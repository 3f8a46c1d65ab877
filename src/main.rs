// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use anyhow::Context;
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::copy_service::DashboardCopyService;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::superset_client::SupersetClient;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create Superset client (infrastructure layer)
    let client = Arc::new(SupersetClient::new()?);

    // Create copy workflow (application layer)
    let copy_service = DashboardCopyService::new(client);

    let state = Arc::new(AppState {
        copy_service,
        default_base_url: app_config.superset.default_base_url,
    });

    // Build router (presentation layer)
    let router = build_router(state);

    let addr: SocketAddr = app_config
        .server
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", app_config.server.listen_addr))?;
    tracing::info!("Starting dashboard-copier on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
