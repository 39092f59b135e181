use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Item Service API",
        version = "0.1.0",
        description = r#"
# Item validation API

Validates submitted item forms. Each form runs its field rules and the
cross-field total price rule (`price * quantity` must reach the configured
minimum, 10000 by default).

## Error Handling

Validation failures answer `200 OK` with a JSON array of error descriptors
in place of the echoed form. Errors without a `field` are global errors attached to the whole
form:

```json
[
  {
    "objectName": "itemSaveForm",
    "code": "totalPriceMin",
    "codes": ["totalPriceMin.itemSaveForm", "totalPriceMin"],
    "arguments": [10000, 1000],
    "defaultMessage": "price * quantity must be at least 10000. Current value = 1000"
  }
]
```

Malformed bodies, unparsable item ids, unknown routes and unsupported methods
answer with a standard error object carrying the request id.
"#
    ),
    paths(
        crate::handlers::items::add_item,
        crate::handlers::items::edit_item,
        crate::handlers::health::liveness_check,
    ),
    components(schemas(
        crate::dto::ItemSaveForm,
        crate::dto::ItemUpdateForm,
        crate::models::Item,
        crate::validation::ErrorDescriptor,
        crate::errors::ErrorResponse,
        crate::handlers::health::LivenessResponse,
    )),
    tags(
        (name = "items", description = "Item form validation"),
        (name = "health", description = "Service health"),
    )
)]
pub struct ApiDocV1;

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDocV1::openapi())
        .config(utoipa_swagger_ui::Config::from("/api-docs/openapi.json").try_it_out_enabled(true))
}
