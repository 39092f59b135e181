mod common;

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use item_service::config::AppConfig;
use serde_json::json;

use common::TestApp;

const ADD: &str = "/validation/api/items/add";

#[tokio::test]
async fn valid_item_is_echoed_back() {
    let app = TestApp::new();
    let payload = json!({"itemName": "itemA", "price": 10000, "quantity": 10});

    let response = app.post_json(ADD, payload.clone()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, payload);
}

#[tokio::test]
async fn total_below_minimum_reports_global_error() {
    let app = TestApp::new();

    // Passes every field rule, misses the total by 1000
    let response = app
        .post_json(ADD, json!({"itemName": "itemA", "price": 1000, "quantity": 9}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    let errors = response.errors();
    assert_eq!(errors.len(), 1);
    let global = errors[0];
    assert_eq!(global["objectName"], "itemSaveForm");
    assert_eq!(global["code"], "totalPriceMin");
    assert_eq!(global["arguments"], json!([10000, 9000]));
    assert_eq!(
        global["codes"],
        json!(["totalPriceMin.itemSaveForm", "totalPriceMin"])
    );
    assert_eq!(
        global["defaultMessage"],
        "price * quantity must be at least 10000. Current value = 9000"
    );
}

#[tokio::test]
async fn low_price_reports_field_and_global_errors() {
    let app = TestApp::new();

    let response = app
        .post_json(ADD, json!({"itemName": "itemA", "price": 100, "quantity": 10}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    let global = response.global_errors();
    assert_eq!(global.len(), 1);
    assert_eq!(global[0]["arguments"], json!([10000, 1000]));
    // price 100 is also below the field range
    let price = response.field_errors("price");
    assert_eq!(price.len(), 1);
    assert_eq!(price[0]["code"], "range");
    assert_eq!(price[0]["rejectedValue"], 100);
}

#[tokio::test]
async fn exact_minimum_is_accepted() {
    let app = TestApp::new();

    let response = app
        .post_json(ADD, json!({"itemName": "itemA", "price": 1000, "quantity": 10}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn missing_quantity_skips_total_rule() {
    let app = TestApp::new();

    let response = app
        .post_json(ADD, json!({"itemName": "itemA", "price": 1000}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    assert!(response.global_errors().is_empty());
    let quantity = response.field_errors("quantity");
    assert_eq!(quantity.len(), 1);
    assert_eq!(quantity[0]["code"], "required");
    assert_eq!(quantity[0]["defaultMessage"], "quantity is required");
}

#[tokio::test]
async fn empty_body_reports_every_required_field() {
    let app = TestApp::new();

    let response = app.post_json(ADD, json!({})).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    let fields: Vec<_> = response
        .errors()
        .iter()
        .map(|e| e["field"].as_str().unwrap_or_default().to_string())
        .collect();
    assert_eq!(fields, vec!["itemName", "price", "quantity"]);
}

#[tokio::test]
async fn blank_name_and_large_quantity_are_field_errors() {
    let app = TestApp::new();

    let response = app
        .post_json(ADD, json!({"itemName": "  ", "price": 10000, "quantity": 10000}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    assert_eq!(response.field_errors("itemName")[0]["code"], "not_blank");
    let quantity = response.field_errors("quantity");
    assert_eq!(quantity[0]["code"], "range");
    assert_eq!(quantity[0]["arguments"], json!([9999]));
    assert_eq!(quantity[0]["defaultMessage"], "quantity must be at most 9999");
    assert!(response.global_errors().is_empty());
}

#[tokio::test]
async fn mistyped_field_is_rejected_before_validation() {
    let app = TestApp::new();

    let response = app
        .post_json(ADD, json!({"itemName": "itemA", "price": "lots", "quantity": 1}))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["message"], "Invalid request body");
    assert!(response.body["request_id"].is_string());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri(ADD)
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Bad Request");
}

#[tokio::test]
async fn missing_content_type_is_unsupported_media_type() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri(ADD)
        .body(Body::from(r#"{"itemName":"itemA","price":10000,"quantity":10}"#))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
}

#[tokio::test]
async fn edit_accepts_quantity_above_save_limit() {
    let app = TestApp::new();
    let payload = json!({"id": 1, "itemName": "itemA", "price": 1000, "quantity": 20000});

    let response = app
        .post_json("/validation/api/items/1/edit", payload.clone())
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, payload);
}

#[tokio::test]
async fn edit_requires_id_and_applies_total_rule() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/validation/api/items/1/edit",
            json!({"itemName": "itemA", "price": 1000, "quantity": 1}),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    let id = response.field_errors("id");
    assert_eq!(id.len(), 1);
    assert_eq!(id[0]["objectName"], "itemUpdateForm");
    assert_eq!(id[0]["defaultMessage"], "id is required to update an item");
    let global = response.global_errors();
    assert_eq!(global.len(), 1);
    assert_eq!(global[0]["arguments"], json!([10000, 1000]));
}

#[tokio::test]
async fn configured_minimum_changes_threshold() {
    let mut config = AppConfig::default();
    config.validation.min_total_price = 20_000;
    let app = TestApp::with_config(config);

    let response = app
        .post_json(ADD, json!({"itemName": "itemA", "price": 1000, "quantity": 10}))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_array());
    assert_eq!(response.global_errors()[0]["arguments"], json!([20000, 10000]));
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = TestApp::new();
    let request = Request::builder()
        .method(Method::POST)
        .uri(ADD)
        .header("content-type", "application/json")
        .header("x-request-id", "req-items-1")
        .body(Body::from(r#"{"itemName":"itemA","price":10000,"quantity":10}"#))
        .unwrap();

    let response = app.send(request).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["x-request-id"], "req-items-1");
}

#[tokio::test]
async fn non_numeric_item_id_is_bad_request() {
    let app = TestApp::new();

    let response = app
        .post_json(
            "/validation/api/items/abc/edit",
            json!({"id": 1, "itemName": "itemA", "price": 1000, "quantity": 10}),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Bad Request");
    assert_eq!(response.body["message"], "Invalid path parameter");
    assert!(response.body["details"].is_string());
    assert!(response.body["request_id"].is_string());
}

#[tokio::test]
async fn wrong_method_is_json_method_not_allowed() {
    let app = TestApp::new();

    let response = app.request(Method::GET, ADD, None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error"], "Method Not Allowed");
    assert_eq!(
        response.body["message"],
        "GET is not supported for /validation/api/items/add"
    );
    assert!(response.body["request_id"].is_string());
}

#[tokio::test]
async fn wrong_method_on_health_is_json_method_not_allowed() {
    let app = TestApp::new();

    let response = app.request(Method::DELETE, "/health", None).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["error"], "Method Not Allowed");
}

#[tokio::test]
async fn unknown_route_is_json_not_found() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/validation/api/items", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["error"], "Not Found");
}

#[tokio::test]
async fn health_reports_up() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "up");
    assert_eq!(response.body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn openapi_document_is_served_when_enabled() {
    let app = TestApp::new();

    let response = app.request(Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["paths"]["/validation/api/items/add"].is_object());
}

#[tokio::test]
async fn openapi_document_is_absent_when_disabled() {
    let mut config = AppConfig::default();
    config.enable_swagger = false;
    let app = TestApp::with_config(config);

    let response = app.request(Method::GET, "/api-docs/openapi.json", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
