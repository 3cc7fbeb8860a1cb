//! HTTP entry points.

pub mod cors;
pub mod error;
pub mod http;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::app::App;

pub use cors::build_cors_layer;
pub use error::ApiError;

/// The complete service: routes, request tracing and (optional) CORS.
pub fn router(app: Arc<App>, cors: Option<CorsLayer>) -> Router {
    let mut router = http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = cors {
        router = router.layer(cors);
    }

    router
}
