//! Binding results for submitted forms
//!
//! A [`BindingResult`] collects every failure found while validating one form:
//! field errors raised by the `validator` derive rules and global errors
//! registered by cross-field business rules. Each failure is reported as an
//! [`ErrorDescriptor`] whose message is resolved through a [`MessageSource`].

pub mod binding;
pub mod messages;

pub use binding::{BindingResult, ErrorDescriptor};
pub use messages::MessageSource;
