//! quire-server
//!
//! HTTP surface for assessments: create one, list all.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use state::AppState;

/// Build the full application router.
///
/// `mount_path` is where the assessment routes live; an empty path mounts
/// them at the root.
pub fn app(state: AppState, mount_path: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().route("/health", get(routes::health::health_check));
    let router = if mount_path.is_empty() {
        router.merge(routes::assessments::router())
    } else {
        router.nest(mount_path, routes::assessments::router())
    };

    router
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state)
}
