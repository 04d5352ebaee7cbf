//! Router assembly and middleware stack.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method, StatusCode, header},
    routing::{get, post},
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use vox_session::SessionStore;

use crate::callback::{AppState, health_check, post_callbacks};
use crate::config::ServerConfig;

fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    if config.allowed_origins.is_empty() {
        // Development mode: any origin.
        cors.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> =
            config.allowed_origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(origins)
    }
}

/// Build the webhook application.
pub fn create_app(config: &ServerConfig, store: Arc<SessionStore>) -> Router {
    let state = AppState { store };

    let api_router = Router::new()
        .route("/health", get(health_check))
        .route("/callbacks", post(post_callbacks))
        .with_state(state);

    Router::new().nest("/api", api_router).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                config.request_timeout,
            ))
            .layer(DefaultBodyLimit::max(config.max_body_size))
            .layer(build_cors_layer(config))
            .layer(SetResponseHeaderLayer::if_not_present(
                header::X_CONTENT_TYPE_OPTIONS,
                HeaderValue::from_static("nosniff"),
            )),
    )
}
