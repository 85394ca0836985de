use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::handlers::{communications, companies, health, next_communications};
use crate::api::state::AppState;

/// Builds the application router with CORS and request tracing
pub fn router(state: AppState) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Company routes
        .route(
            "/api/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/api/companies/:id",
            get(companies::get_company)
                .put(companies::update_company)
                .delete(companies::delete_company),
        )
        // Communication routes
        .route(
            "/api/communications",
            get(communications::list_communications).post(communications::log_communication),
        )
        .route(
            "/api/communications/:id",
            delete(communications::delete_communication),
        )
        // Next communication routes; GET on :id takes a company id
        .route(
            "/api/next-communications",
            get(next_communications::list_active)
                .post(next_communications::create_next_communication),
        )
        .route(
            "/api/next-communications/:id",
            get(next_communications::list_active_for_company)
                .put(next_communications::update_next_communication)
                .delete(next_communications::cancel_next_communication),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Shared state
        .with_state(state)
}
