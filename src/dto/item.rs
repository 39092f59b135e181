use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::models::Item;

/// A submitted item form that carries the operands of the total price rule.
pub trait ItemForm: Validate {
    /// Name the form's errors are reported under.
    const OBJECT_NAME: &'static str;

    fn price(&self) -> Option<i32>;
    fn quantity(&self) -> Option<i32>;
}

/// Payload for registering a new item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemSaveForm {
    #[validate(required, custom = "validate_not_blank")]
    #[schema(example = "itemA")]
    pub item_name: Option<String>,

    #[validate(required, range(min = 1000, max = 1000000))]
    #[schema(example = 10000)]
    pub price: Option<i32>,

    #[validate(required, range(max = 9999))]
    #[schema(example = 10)]
    pub quantity: Option<i32>,
}

impl ItemForm for ItemSaveForm {
    const OBJECT_NAME: &'static str = "itemSaveForm";

    fn price(&self) -> Option<i32> {
        self.price
    }

    fn quantity(&self) -> Option<i32> {
        self.quantity
    }
}

impl From<ItemSaveForm> for Item {
    fn from(form: ItemSaveForm) -> Self {
        Item {
            id: None,
            item_name: form.item_name,
            price: form.price,
            quantity: form.quantity,
        }
    }
}

/// Payload for editing an existing item. Quantity is unbounded on update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdateForm {
    #[validate(required)]
    #[schema(example = 1)]
    pub id: Option<i64>,

    #[validate(required, custom = "validate_not_blank")]
    #[schema(example = "itemA")]
    pub item_name: Option<String>,

    #[validate(required, range(min = 1000, max = 1000000))]
    #[schema(example = 10000)]
    pub price: Option<i32>,

    #[validate(required)]
    #[schema(example = 10)]
    pub quantity: Option<i32>,
}

impl ItemForm for ItemUpdateForm {
    const OBJECT_NAME: &'static str = "itemUpdateForm";

    fn price(&self) -> Option<i32> {
        self.price
    }

    fn quantity(&self) -> Option<i32> {
        self.quantity
    }
}

impl From<ItemUpdateForm> for Item {
    fn from(form: ItemUpdateForm) -> Self {
        Item {
            id: form.id,
            item_name: form.item_name,
            price: form.price,
            quantity: form.quantity,
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("must not be blank".into());
        return Err(err);
    }
    Ok(())
}
