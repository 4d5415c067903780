//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Personnel CRUD
        .route(
            "/personnel",
            get(handlers::list_personnel).post(handlers::create_personnel),
        )
        .route(
            "/personnel/{id}",
            get(handlers::get_personnel)
                .put(handlers::update_personnel)
                .delete(handlers::delete_personnel),
        )
        // Vehicle CRUD
        .route(
            "/vehicles",
            get(handlers::list_vehicles).post(handlers::create_vehicle),
        )
        .route(
            "/vehicles/{id}",
            get(handlers::get_vehicle)
                .put(handlers::update_vehicle)
                .delete(handlers::delete_vehicle),
        )
        // Contract CRUD
        .route(
            "/contracts",
            get(handlers::list_contracts).post(handlers::create_contract),
        )
        .route(
            "/contracts/{id}",
            get(handlers::get_contract)
                .put(handlers::update_contract)
                .delete(handlers::delete_contract),
        )
        // Schedule CRUD, import and calendar. Static segments are registered
        // alongside the `{id}` capture; the router prefers exact matches.
        .route(
            "/schedules",
            get(handlers::list_schedules).post(handlers::create_schedule),
        )
        .route("/schedules/import", post(handlers::import_schedules))
        .route("/schedules/calendar", get(handlers::get_calendar))
        .route(
            "/schedules/{id}",
            get(handlers::get_schedule)
                .put(handlers::update_schedule)
                .delete(handlers::delete_schedule),
        )
        // Dashboard
        .route("/dashboard", get(handlers::get_dashboard))
        // Calculators
        .route(
            "/calculators/resistance-correction",
            post(handlers::resistance_correction),
        )
        .route("/calculators/tan-delta", post(handlers::tan_delta))
        .route(
            "/calculators/contact-resistance",
            post(handlers::contact_resistance),
        )
        .route("/calculators/turns-ratio", post(handlers::turns_ratio));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Allow large import payloads.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
