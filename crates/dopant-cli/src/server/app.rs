//! Axum application setup.

use std::net::SocketAddr;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::handlers;
use super::state::AppState;
use crate::web::static_handler;

/// Create the Axum router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The front end is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Precomputed data
        .route("/get-dopant", get(handlers::get_dopants))
        .route("/get-ML", get(handlers::get_predicted_formation_energies))
        .route("/get-bandgap", get(handlers::get_band_gaps))
        .route("/formation-energy", get(handlers::get_formation_energy))
        // Store connectivity
        .route("/check-db", get(handlers::check_db))
        // Structure selection and display
        .route("/select-dopant", post(handlers::select_dopant))
        .route("/structure", get(handlers::get_structure));

    Router::new()
        .nest("/api", api_routes)
        .fallback(static_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the web server.
pub async fn run_server(
    state: AppState,
    addr: SocketAddr,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
