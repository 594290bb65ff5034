//! HTTP routes

pub mod health;
pub mod pages;

use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use crate::{error::ApiError, routing::tenant_redirect_middleware, state::AppState};

/// Create all routes. Every request passes through the tenant middleware
/// before reaching a handler, including the fallback.
pub fn create_router(state: AppState) -> Router {
    // Health check routes (at root level for infrastructure monitoring)
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness));

    let page_routes = Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/company", get(pages::company))
        .route("/contact", get(pages::contact))
        .route("/support", get(pages::support))
        .route("/old-page", get(pages::old_page))
        .route("/new-page", get(pages::new_page));

    Router::new()
        .merge(health_routes)
        .merge(page_routes)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            tenant_redirect_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
