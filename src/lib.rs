use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub mod catalog;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod provisioning;

use crate::config::Config;
use crate::models::Product;

/// Shared application state — cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub catalog: Arc<Vec<Product>>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog::available_products()),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    // The frontend sends credentialed requests, so the origin is mirrored
    // rather than wildcarded (a wildcard origin cannot carry credentials).
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ORIGIN,
            header::ACCEPT,
            HeaderName::from_static("x-requested-with"),
        ])
        .allow_credentials(true);

    Router::new()
        // ── Health ──────────────────────────────────────────────────────────
        .route("/health", get(handlers::health))

        // ── Static route data ───────────────────────────────────────────────
        .route("/routes/clients", get(handlers::routes_data::get_clients))
        .route("/routes/vehicles", get(handlers::routes_data::get_vehicles))

        // ── Products ────────────────────────────────────────────────────────
        .route(
            "/products/available",
            get(handlers::products::available_products),
        )
        .route("/products/upload", post(handlers::products::upload_products))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
