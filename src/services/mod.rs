// Item form validation
pub mod item_validation;

pub use item_validation::{
    check_total_price, ItemValidationService, TotalPriceShortfall, DEFAULT_MIN_TOTAL_PRICE,
    TOTAL_PRICE_MIN_CODE,
};
