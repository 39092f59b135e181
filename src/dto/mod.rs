pub mod item;

pub use item::{ItemForm, ItemSaveForm, ItemUpdateForm};
