use serde_json::json;
use tracing::{debug, info, instrument};

use crate::dto::{ItemForm, ItemSaveForm, ItemUpdateForm};
use crate::validation::{BindingResult, MessageSource};

/// Smallest accepted `price * quantity` unless configured otherwise.
pub const DEFAULT_MIN_TOTAL_PRICE: i64 = 10_000;

/// Message code of the global error raised by the total price rule.
pub const TOTAL_PRICE_MIN_CODE: &str = "totalPriceMin";

/// A total price that fell below the required minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalPriceShortfall {
    pub expected: i64,
    pub actual: i64,
}

/// Checks `price * quantity >= minimum`.
///
/// The rule only applies when both operands are present. The product is
/// computed in 64 bits and cannot overflow.
pub fn check_total_price(
    price: Option<i32>,
    quantity: Option<i32>,
    minimum: i64,
) -> Option<TotalPriceShortfall> {
    let (price, quantity) = price.zip(quantity)?;
    let actual = i64::from(price) * i64::from(quantity);
    (actual < minimum).then_some(TotalPriceShortfall {
        expected: minimum,
        actual,
    })
}

/// Runs the field rules and the total price rule over submitted item forms.
#[derive(Debug, Clone)]
pub struct ItemValidationService {
    min_total_price: i64,
    messages: MessageSource,
}

impl Default for ItemValidationService {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_TOTAL_PRICE)
    }
}

impl ItemValidationService {
    pub fn new(min_total_price: i64) -> Self {
        Self {
            min_total_price,
            messages: MessageSource::with_defaults(),
        }
    }

    pub fn with_messages(mut self, messages: MessageSource) -> Self {
        self.messages = messages;
        self
    }

    pub fn min_total_price(&self) -> i64 {
        self.min_total_price
    }

    /// Collects every field and global error for `form`.
    ///
    /// The total price rule runs even when field errors were found.
    pub fn validate<F: ItemForm>(&self, form: &F) -> BindingResult {
        let mut binding = BindingResult::from_validation(F::OBJECT_NAME, form.validate());

        if let Some(shortfall) =
            check_total_price(form.price(), form.quantity(), self.min_total_price)
        {
            debug!(
                expected = shortfall.expected,
                actual = shortfall.actual,
                "total price below minimum"
            );
            binding.reject(
                TOTAL_PRICE_MIN_CODE,
                vec![json!(shortfall.expected), json!(shortfall.actual)],
            );
        }

        binding.resolve_messages(&self.messages);
        binding
    }

    #[instrument(skip_all, fields(object = ItemSaveForm::OBJECT_NAME))]
    pub fn validate_save(&self, form: ItemSaveForm) -> Result<ItemSaveForm, BindingResult> {
        self.accept(form)
    }

    #[instrument(skip_all, fields(object = ItemUpdateForm::OBJECT_NAME))]
    pub fn validate_update(&self, form: ItemUpdateForm) -> Result<ItemUpdateForm, BindingResult> {
        self.accept(form)
    }

    fn accept<F: ItemForm>(&self, form: F) -> Result<F, BindingResult> {
        let binding = self.validate(&form);
        if binding.has_errors() {
            info!(errors = %binding, "validation errors found");
            return Err(binding);
        }
        Ok(form)
    }
}
