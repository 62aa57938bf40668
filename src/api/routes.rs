//! Router configuration for the API.
//!
//! Central route registration and middleware wiring. Middleware layers run
//! in reverse declaration order, so the request-id layer runs first and
//! logging second.

use std::time::Duration;

use axum::{Router, http::HeaderValue, middleware};
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    timeout::TimeoutLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::doc::ApiDoc;
use crate::api::handlers;
use crate::api::middleware::{auth_middleware, logging_middleware, request_id_middleware};
use crate::config::ServerConfig;
use crate::state::AppState;

/// Creates the main application router with all routes and middleware.
///
/// Route groups:
/// - `/api/coaches` - public listing and availability reads, authenticated
///   availability writes
/// - `/api/cart`    - authenticated booking cart
/// - `/api/players` - authenticated player profiles
/// - `/health`      - health check
/// - `/swagger-ui`  - interactive API documentation
pub fn create_router(state: AppState, server: &ServerConfig) -> Router {
    let cart_routes = handlers::cart::cart_routes().route_layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));
    let player_routes = handlers::players::player_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), auth_middleware),
    );

    let api_routes = Router::new()
        .nest("/coaches", handlers::coaches::coach_routes(state.clone()))
        .nest("/cart", cart_routes)
        .nest("/players", player_routes);

    Router::new()
        .nest("/api", api_routes)
        .merge(handlers::health::health_routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(server))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout,
        )))
        .layer(CompressionLayer::new())
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

/// Builds the CORS layer from the configured origin list.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PUT,
            axum::http::Method::DELETE,
        ])
        .allow_headers([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
        ])
}
