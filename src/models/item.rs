use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An item offered for sale.
///
/// Every field is optional so that a partially filled submission can still be
/// bound and reported on; the forms in [`crate::dto::item`] decide which
/// fields are mandatory for each scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Option<i64>,
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl Item {
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }
}
