//! Route configuration and setup

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::middleware::{security_headers_middleware, SecurityHeadersConfig};
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use pdf2docx_core::constants::MAX_UPLOAD_SIZE_BYTES;
use pdf2docx_core::Config;
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

/// Headroom for multipart framing on top of the file size ceiling.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Setup all application routes
pub fn build_router(config: &Config, state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = setup_cors(config)?;
    let security_headers_config = Arc::new(SecurityHeadersConfig::new(config.is_production()));

    let app = Router::new()
        .route("/api/convert", post(handlers::convert::convert_pdf))
        .route("/api/history", get(handlers::history::list_history))
        .route("/api/health", get(handlers::health::health_check))
        // Single explicit access path for generated documents; the output
        // directory is never mounted as a static path.
        .route(
            "/downloads/{filename}",
            get(handlers::download::download_document),
        )
        .route("/api/openapi.json", get(openapi_json))
        .nest(
            "/docs",
            utoipa_rapidoc::RapiDoc::new("/api/openapi.json")
                .path("/docs")
                .into(),
        )
        .layer(RequestBodyLimitLayer::new(
            MAX_UPLOAD_SIZE_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
        // the RequestBodyLimitLayer above is the authoritative ceiling; axum's
        // built-in 2 MB default would otherwise cap uploads below it
        .layer(DefaultBodyLimit::disable())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(axum::middleware::from_fn_with_state(
            security_headers_config,
            security_headers_middleware,
        ))
        .with_state(state);

    Ok(app)
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Setup CORS configuration
fn setup_cors(config: &Config) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins().contains(&"*".to_string()) {
        if config.is_production() {
            tracing::warn!("CORS configured to allow all origins - not recommended for production");
        }
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins().iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.map_err(|e| anyhow::anyhow!("Invalid CORS origin: {}", e))?)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };

    Ok(cors)
}
