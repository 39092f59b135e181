//! Item Service Library
//!
//! HTTP service that validates submitted item forms: field rules declared on
//! the forms plus a cross-field rule requiring `price * quantity` to reach a
//! configured minimum.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

// Core modules
pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware_helpers;
pub mod models;
pub mod openapi;
pub mod services;
pub mod tracing;
pub mod validation;

use axum::{http::Uri, Router};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::ApiError;
use crate::services::ItemValidationService;

/// Path prefix of the item validation endpoints
pub const ITEMS_API_PREFIX: &str = "/validation/api/items";

// App state definition
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub item_validation: Arc<ItemValidationService>,
}

impl AppState {
    pub fn from_config(config: AppConfig) -> Self {
        let item_validation = ItemValidationService::new(config.validation.min_total_price);
        Self {
            config: Arc::new(config),
            item_validation: Arc::new(item_validation),
        }
    }
}

/// Builds the full application router with tracing and request-id layers.
pub fn build_router(state: AppState) -> Router {
    let mut router = Router::<AppState>::new()
        .nest(ITEMS_API_PREFIX, handlers::item_routes())
        .merge(handlers::health_routes())
        .fallback(route_not_found);

    if state.config.enable_swagger {
        router = router.merge(openapi::swagger_ui());
    }

    router
        // HTTP tracing layer for consistent request/response telemetry
        .layer(crate::tracing::configure_http_tracing())
        // Ensure every request carries a request id for traceability
        .layer(axum::middleware::from_fn(
            middleware_helpers::request_id_middleware,
        ))
        .with_state(state)
}

async fn route_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
