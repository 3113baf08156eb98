use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use route_server::config::ServerConfig;
use route_server::directions::{DirectionsClient, DirectionsProvider, MockDirections};
use route_server::translator::RouteTranslator;
use route_server::web::{AppState, create_router};

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "route_server=info,tower_http=info";

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env is fine; real deployments set the environment directly.
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let provider: Arc<dyn DirectionsProvider> = match &config.mock_file {
        Some(path) => {
            warn!(path = %path.display(), "serving mock directions, provider will not be called");
            match MockDirections::from_file(path) {
                Ok(mock) => Arc::new(mock),
                Err(e) => {
                    error!("failed to load mock directions: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => match DirectionsClient::new(config.directions.clone()) {
            Ok(client) => {
                info!(url = client.url(), timeout_secs = config.directions.timeout_secs, "directions client ready");
                Arc::new(client)
            }
            Err(e) => {
                error!("failed to create directions client: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let translator = RouteTranslator::new(config.api_key.clone(), provider);
    let app = create_router(AppState::new(translator));

    let listener = match tokio::net::TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.bind_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.bind_addr, "route server listening");
    info!("  GET  /health     - Health check");
    info!("  POST /api/fetch  - Fetch a route through ordered stops");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    info!("route server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
