use std::collections::HashMap;

use serde_json::Value;

/// Message codes for a global error, most specific first.
pub fn object_codes(code: &str, object_name: &str) -> Vec<String> {
    vec![format!("{}.{}", code, object_name), code.to_string()]
}

/// Message codes for a field error, most specific first.
pub fn field_codes(code: &str, object_name: &str, field: &str) -> Vec<String> {
    vec![
        format!("{}.{}.{}", code, object_name, field),
        format!("{}.{}", code, field),
        code.to_string(),
    ]
}

/// Message templates keyed by message code.
///
/// Templates use positional placeholders: `{0}` is replaced by the first
/// argument of the error, `{1}` by the second and so on. Placeholders without
/// a matching argument are left untouched.
#[derive(Debug, Clone, Default)]
pub struct MessageSource {
    templates: HashMap<String, String>,
}

impl MessageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// English templates for every rule the item forms use.
    pub fn with_defaults() -> Self {
        Self::new()
            .with_message("required", "must not be null")
            .with_message("required.itemName", "item name is required")
            .with_message("not_blank", "must not be blank")
            .with_message("not_blank.itemName", "item name is required")
            .with_message("required.id", "id is required to update an item")
            .with_message("required.price", "price is required")
            .with_message("range.price", "price must be between {1} and {0}")
            .with_message("required.quantity", "quantity is required")
            .with_message("range.quantity", "quantity must be at most {0}")
            .with_message(
                "totalPriceMin",
                "price * quantity must be at least {0}. Current value = {1}",
            )
    }

    pub fn with_message(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(code, template);
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.templates.insert(code.into(), template.into());
    }

    /// Formats the template of the first code that has one.
    pub fn resolve(&self, codes: &[String], arguments: &[Value]) -> Option<String> {
        codes
            .iter()
            .find_map(|code| self.templates.get(code))
            .map(|template| format_template(template, arguments))
    }
}

/// Replaces `{n}` placeholders with the matching argument.
///
/// The template is scanned once, so placeholder-like text inside an argument
/// is copied through as is.
pub fn format_template(template: &str, arguments: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let argument = after.find('}').and_then(|close| {
            let index: usize = after[..close].parse().ok()?;
            arguments.get(index).map(|arg| (close, arg))
        });
        match argument {
            Some((close, argument)) => {
                match argument {
                    Value::String(s) => out.push_str(s),
                    other => out.push_str(&other.to_string()),
                }
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
