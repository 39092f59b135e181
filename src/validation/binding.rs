use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use validator::{ValidationError, ValidationErrors, ValidationErrorsKind};

use super::messages::{field_codes, object_codes, MessageSource};

/// Key `validator` files struct-level (schema) errors under.
const GLOBAL_KEY: &str = "__all__";

/// One validation failure, either attached to a field or to the whole object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "objectName": "itemSaveForm",
    "code": "totalPriceMin",
    "codes": ["totalPriceMin.itemSaveForm", "totalPriceMin"],
    "arguments": [10000, 1000],
    "defaultMessage": "price * quantity must be at least 10000. Current value = 1000"
}))]
pub struct ErrorDescriptor {
    pub object_name: String,
    /// Absent for global errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    /// Message codes, most specific first
    pub codes: Vec<String>,
    #[schema(value_type = Vec<Object>)]
    pub arguments: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub rejected_value: Option<Value>,
}

impl ErrorDescriptor {
    pub fn global(object_name: &str, code: &str, arguments: Vec<Value>) -> Self {
        Self {
            object_name: object_name.to_string(),
            field: None,
            code: code.to_string(),
            codes: object_codes(code, object_name),
            arguments,
            default_message: None,
            rejected_value: None,
        }
    }

    pub fn field(
        object_name: &str,
        field: &str,
        code: &str,
        arguments: Vec<Value>,
        rejected_value: Value,
    ) -> Self {
        Self {
            object_name: object_name.to_string(),
            field: Some(field.to_string()),
            code: code.to_string(),
            codes: field_codes(code, object_name, field),
            arguments,
            default_message: None,
            rejected_value: Some(rejected_value),
        }
    }

    pub fn is_global(&self) -> bool {
        self.field.is_none()
    }
}

impl fmt::Display for ErrorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{}.{}: {}", self.object_name, field, self.code)?,
            None => write!(f, "{}: {}", self.object_name, self.code)?,
        }
        if let Some(message) = &self.default_message {
            write!(f, " ({})", message)?;
        }
        Ok(())
    }
}

/// Errors collected while validating a single submitted object.
#[derive(Debug, Clone, PartialEq)]
pub struct BindingResult {
    object_name: String,
    errors: Vec<ErrorDescriptor>,
}

impl BindingResult {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            errors: Vec::new(),
        }
    }

    /// Builds a binding result from the outcome of `Validate::validate`.
    pub fn from_validation(
        object_name: impl Into<String>,
        outcome: Result<(), ValidationErrors>,
    ) -> Self {
        let mut binding = Self::new(object_name);
        if let Err(errors) = outcome {
            binding.add_validation_errors(&errors);
        }
        binding
    }

    /// Converts `validator` errors into descriptors.
    ///
    /// Field errors are appended ordered by field name, then code, so the
    /// output does not depend on hash map iteration order. Nested struct and
    /// list errors are not produced by the item forms and are skipped.
    pub fn add_validation_errors(&mut self, errors: &ValidationErrors) {
        let mut entries: Vec<(&str, &ValidationError)> = errors
            .errors()
            .iter()
            .filter_map(|(field, kind)| match kind {
                ValidationErrorsKind::Field(errs) => Some((*field, errs)),
                _ => None,
            })
            .flat_map(|(field, errs)| errs.iter().map(move |err| (field, err)))
            .collect();
        entries.sort_by(|(a_field, a_err), (b_field, b_err)| {
            (*a_field == GLOBAL_KEY)
                .cmp(&(*b_field == GLOBAL_KEY))
                .then_with(|| a_field.cmp(b_field))
                .then_with(|| a_err.code.cmp(&b_err.code))
        });

        for (field, err) in entries {
            let arguments = arguments_from_params(err);
            let mut descriptor = if field == GLOBAL_KEY {
                ErrorDescriptor::global(&self.object_name, &err.code, arguments)
            } else {
                let rejected = err
                    .params
                    .get("value")
                    .cloned()
                    .map(normalize_number)
                    .unwrap_or(Value::Null);
                ErrorDescriptor::field(
                    &self.object_name,
                    &to_camel_case(field),
                    &err.code,
                    arguments,
                    rejected,
                )
            };
            descriptor.default_message = err.message.as_ref().map(|m| m.to_string());
            self.errors.push(descriptor);
        }
    }

    /// Registers a global error for the whole object.
    pub fn reject(&mut self, code: &str, arguments: Vec<Value>) {
        let descriptor = ErrorDescriptor::global(&self.object_name, code, arguments);
        self.errors.push(descriptor);
    }

    /// Registers an error against a single field.
    pub fn reject_value(
        &mut self,
        field: &str,
        code: &str,
        arguments: Vec<Value>,
        rejected_value: Value,
    ) {
        let descriptor =
            ErrorDescriptor::field(&self.object_name, field, code, arguments, rejected_value);
        self.errors.push(descriptor);
    }

    /// Fills in `default_message` from `source` wherever a template exists.
    pub fn resolve_messages(&mut self, source: &MessageSource) {
        for error in &mut self.errors {
            if let Some(message) = source.resolve(&error.codes, &error.arguments) {
                error.default_message = Some(message);
            }
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_global_errors(&self) -> bool {
        self.errors.iter().any(ErrorDescriptor::is_global)
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn global_errors(&self) -> impl Iterator<Item = &ErrorDescriptor> {
        self.errors.iter().filter(|e| e.is_global())
    }

    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ErrorDescriptor> {
        self.errors
            .iter()
            .filter(move |e| e.field.as_deref() == Some(field))
    }

    pub fn all_errors(&self) -> &[ErrorDescriptor] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ErrorDescriptor> {
        self.errors
    }
}

impl fmt::Display for BindingResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} error(s) for object '{}'",
            self.errors.len(),
            self.object_name
        )?;
        for error in &self.errors {
            write!(f, "; {}", error)?;
        }
        Ok(())
    }
}

/// Parameters other than the rejected value, ordered by name.
fn arguments_from_params(err: &ValidationError) -> Vec<Value> {
    let mut params: Vec<(&str, &Value)> = err
        .params
        .iter()
        .filter(|(name, _)| *name != "value")
        .map(|(name, value)| (&**name, value))
        .collect();
    params.sort_by(|a, b| a.0.cmp(b.0));
    params
        .into_iter()
        .map(|(_, value)| normalize_number(value.clone()))
        .collect()
}

/// Range bounds arrive as floats; report whole numbers as integers.
fn normalize_number(value: Value) -> Value {
    match value.as_f64() {
        Some(f) if value.is_f64() && f.fract() == 0.0 && f.abs() < 9.0e15 => {
            Value::from(f as i64)
        }
        _ => value,
    }
}

fn to_camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
