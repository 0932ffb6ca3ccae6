//! HTTP server for the answer service

pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::generator::AnswerGenerator;

pub use routes::AppState;

/// Router with all routes, permissive CORS and request tracing.
pub fn router(generator: Arc<AnswerGenerator>) -> Router {
    Router::new()
        .merge(routes::health_routes())
        .merge(routes::generate_routes())
        .with_state(generator)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server until the process is stopped.
pub async fn serve(addr: SocketAddr, generator: Arc<AnswerGenerator>) -> crate::Result<()> {
    let app = router(generator);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
