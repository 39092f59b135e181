use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use item_service::{build_router, config::AppConfig, AppState};
use serde_json::Value;
use tower::ServiceExt;

/// Helper harness wrapping the application router for in-process requests.
pub struct TestApp {
    router: Router,
}

/// Status, headers and parsed JSON body of a test response.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: Value,
}

impl TestApp {
    /// Construct a test application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            router: build_router(AppState::from_config(config)),
        }
    }

    /// Send a request against the router with an optional JSON body.
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json) = body {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&json).expect("failed to serialize json request body"))
        } else {
            Body::empty()
        };

        self.send(builder.body(body).expect("failed to build request"))
            .await
    }

    /// Convenience helper for JSON POST requests.
    pub async fn post_json(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("router error during test request");

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("read response body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl TestResponse {
    /// Error descriptors without a `field`.
    #[allow(dead_code)]
    pub fn global_errors(&self) -> Vec<&Value> {
        self.errors()
            .into_iter()
            .filter(|e| e.get("field").is_none())
            .collect()
    }

    /// Error descriptors reported for `field`.
    #[allow(dead_code)]
    pub fn field_errors(&self, field: &str) -> Vec<&Value> {
        self.errors()
            .into_iter()
            .filter(|e| e["field"] == field)
            .collect()
    }

    #[allow(dead_code)]
    pub fn errors(&self) -> Vec<&Value> {
        self.body
            .as_array()
            .map(|errors| errors.iter().collect())
            .unwrap_or_default()
    }
}
