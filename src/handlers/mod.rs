pub mod health;
pub mod items;

use axum::{
    extract::OriginalUri,
    http::Method,
    routing::{get, post},
    Router,
};

use crate::errors::ApiError;

// Re-export AppState so handler modules can import it as crate::handlers::AppState
pub use crate::AppState;

/// Item validation endpoints, nested under `/validation/api/items`
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/add", post(items::add_item).fallback(method_not_allowed))
        .route(
            "/:item_id/edit",
            post(items::edit_item).fallback(method_not_allowed),
        )
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route(
        "/health",
        get(health::liveness_check).fallback(method_not_allowed),
    )
}

/// Answers a known path requested with a method it does not serve.
async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::MethodNotAllowed(format!("{} is not supported for {}", method, uri.path()))
}
