use axum::{routing::get, Router};
use event_search::{EventSearch, HttpSparqlEndpoint};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;

mod config;
mod error;
mod search;
mod state;

pub use config::{ServerConfig, DEFAULT_BIND};
pub use error::EventSearchServerError;
pub use search::USAGE;
use crate::search::handle_search;
use crate::state::AppState;

/// Creates the routes of the service on top of `search`.
pub fn create_router(search: EventSearch) -> Router {
    Router::new()
        .route("/", get(|| async { USAGE }))
        .route("/search", get(handle_search))
        .with_state(AppState { search })
        .layer(TraceLayer::new_for_http())
}

/// Serves searches against the configured endpoint until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let endpoint = HttpSparqlEndpoint::new(config.endpoint)?;
    info!(endpoint = endpoint.url(), "Using SPARQL endpoint");

    let app = create_router(EventSearch::new(Arc::new(endpoint)));
    let app = if config.cors {
        app.layer(tower_http::cors::CorsLayer::permissive())
    } else {
        app
    };

    let listener = tokio::net::TcpListener::bind(config.bind.as_str()).await?;
    info!(address = %listener.local_addr()?, "Listening");
    Ok(axum::serve(listener, app).await?)
}
