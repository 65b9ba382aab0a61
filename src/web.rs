use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};
use crate::config::TravelEaseConfig;

/// The full application router with permissive CORS
#[must_use]
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new().nest("/api", api::router(state)).layer(cors)
}

/// Bind the configured address and serve until the process stops
pub async fn run(config: &TravelEaseConfig, state: AppState) -> crate::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Web server running at http://{}", listener.local_addr()?);
    axum::serve(listener, app(state)).await?;
    Ok(())
}
