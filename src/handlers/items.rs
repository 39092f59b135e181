use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    Json,
};
use tracing::{info, warn};

use crate::{
    dto::{ItemSaveForm, ItemUpdateForm},
    errors::ApiError,
    AppState,
};

fn reject_body(rejection: JsonRejection) -> ApiError {
    warn!(error = %rejection, "rejected item payload");
    ApiError::from(rejection)
}

fn reject_path(rejection: PathRejection) -> ApiError {
    warn!(error = %rejection, "rejected item path");
    ApiError::from(rejection)
}

/// Validate a new item
#[utoipa::path(
    post,
    path = "/validation/api/items/add",
    summary = "Validate a new item",
    description = "Runs the save rules and the total price rule; echoes the form when it is valid",
    request_body = ItemSaveForm,
    responses(
        (status = 200, description = "Form accepted and echoed back. When validation fails the body is a JSON array of ErrorDescriptor instead", body = ItemSaveForm,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Malformed JSON", body = crate::errors::ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = crate::errors::ErrorResponse),
        (status = 422, description = "Body does not match the form", body = crate::errors::ErrorResponse),
    ),
    tag = "items"
)]
pub async fn add_item(
    State(state): State<AppState>,
    payload: Result<Json<ItemSaveForm>, JsonRejection>,
) -> Result<Json<ItemSaveForm>, ApiError> {
    info!("item add API called");
    let Json(form) = payload.map_err(reject_body)?;

    let form = state.item_validation.validate_save(form)?;

    info!(item_name = ?form.item_name, "item form accepted");
    Ok(Json(form))
}

/// Validate changes to an existing item
#[utoipa::path(
    post,
    path = "/validation/api/items/{item_id}/edit",
    summary = "Validate an item update",
    description = "Runs the update rules and the total price rule; echoes the form when it is valid",
    params(("item_id" = i64, Path, description = "Item identifier")),
    request_body = ItemUpdateForm,
    responses(
        (status = 200, description = "Form accepted and echoed back. When validation fails the body is a JSON array of ErrorDescriptor instead", body = ItemUpdateForm,
            headers(("X-Request-Id" = String, description = "Unique request id"))
        ),
        (status = 400, description = "Malformed JSON or item id", body = crate::errors::ErrorResponse),
        (status = 415, description = "Missing JSON content type", body = crate::errors::ErrorResponse),
        (status = 422, description = "Body does not match the form", body = crate::errors::ErrorResponse),
    ),
    tag = "items"
)]
pub async fn edit_item(
    State(state): State<AppState>,
    item_id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<ItemUpdateForm>, JsonRejection>,
) -> Result<Json<ItemUpdateForm>, ApiError> {
    let Path(item_id) = item_id.map_err(reject_path)?;
    info!(item_id, "item edit API called");
    let Json(form) = payload.map_err(reject_body)?;

    let form = state.item_validation.validate_update(form)?;

    info!(item_id, "item update form accepted");
    Ok(Json(form))
}
