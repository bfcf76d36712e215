//! emaily-api
//!
//! HTTP JSON API over the template store.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::http::header::{HeaderValue, InvalidHeaderValue, CONTENT_TYPE};
use axum::http::Method;
use axum::middleware as axum_mw;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use emaily_storage::{MemoryTemplateStore, S3TemplateStore, TemplateStore};

use config::{Config, DatabaseUrl};
use state::AppState;

/// Open the template store named by the configuration.
///
/// Called once at startup; the returned handle is shared by every request.
pub async fn connect_store(config: &Config) -> Arc<dyn TemplateStore> {
    match &config.database_url {
        DatabaseUrl::Memory => {
            tracing::warn!("using in-memory template store; data is lost on restart");
            Arc::new(MemoryTemplateStore::new())
        }
        DatabaseUrl::S3 { bucket, prefix } => {
            let client =
                emaily_storage::client::build_client(config.s3_endpoint_url.as_deref()).await;
            tracing::info!(bucket = %bucket, prefix = %prefix, "using S3 template store");
            Arc::new(S3TemplateStore::new(client, bucket.clone(), prefix.clone()))
        }
    }
}

/// CORS for a single credentialed origin.
pub fn cors_layer(origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    Ok(CorsLayer::new()
        .allow_origin(HeaderValue::from_str(origin)?)
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE]))
}

/// Build the application router.
pub fn app(state: AppState, cors: Option<CorsLayer>) -> Router {
    let router = Router::new()
        .route("/", get(routes::health::welcome))
        .route("/health", get(routes::health::health_check))
        .route(
            "/api/templates",
            get(routes::templates::list_templates).post(routes::templates::create_template),
        )
        .route(
            "/api/templates/",
            get(routes::templates::list_templates).post(routes::templates::create_template),
        )
        .route(
            "/api/templates/{id}",
            get(routes::templates::get_template)
                .put(routes::templates::update_template)
                .delete(routes::templates::delete_template),
        )
        .route(
            "/api/templates/{id}/",
            get(routes::templates::get_template)
                .put(routes::templates::update_template)
                .delete(routes::templates::delete_template),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .with_state(state);

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}
