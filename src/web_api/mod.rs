//! WebAPI - HTTP Endpoints and Static Files
//!
//! ## Responsibilities
//!
//! - Camp photo listing and catalog routes
//! - `/data` static mount (photo directories)
//! - UI bundle served from the public directory as fallback

mod routes;

pub use routes::create_router;

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::models::HealthResponse;
use crate::state::AppState;

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_sec: state.uptime_sec(),
        camp_count: state.catalog.len(),
    })
}

/// API routes plus static file serving and HTTP layers
pub fn create_app(state: AppState) -> Router {
    let data_dir = state.config.data_dir.clone();
    let public_dir = state.config.public_dir.clone();

    tracing::info!(
        public_dir = %public_dir.display(),
        data_dir = %data_dir.display(),
        "Static file serving enabled"
    );

    create_router(state)
        .nest_service("/data", ServeDir::new(data_dir))
        .fallback_service(ServeDir::new(public_dir))
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http())
}
