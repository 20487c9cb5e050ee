use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::http::HeaderValue;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use firmdex::core::CompanyRegistry;
use firmdex::storage::InMemoryCompanyStore;
use firmdex_server::cli::CliArgs;
use firmdex_server::config::ServerConfig;
use firmdex_server::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<()> {
    let cli_args = CliArgs::parse();

    let filter = if let Some(ref level) = cli_args.log_level {
        tracing_subscriber::EnvFilter::new(level)
    } else {
        tracing_subscriber::EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting Firmdex server v{}", firmdex::VERSION);

    let server_config = ServerConfig::from_cli_and_env(cli_args)?;
    info!("Server configuration loaded");

    let store = Arc::new(InMemoryCompanyStore::new());
    let registry = CompanyRegistry::new(store);
    let state = Arc::new(AppState::new(registry, server_config.clone()));

    let cors = CorsLayer::new()
        .allow_origin(server_config.cors_allowed_origin.parse::<HeaderValue>()?)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = create_router(state).layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], server_config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("Firmdex server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
