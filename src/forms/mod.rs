//! Form definitions backing the shipment creation surface.

use std::collections::BTreeMap;

use validator::{ValidationErrors, ValidationErrorsKind};

pub mod shipment;

/// Field name mapped to the messages of every rule it violated.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Flattens [`ValidationErrors`] into per-field display messages.
///
/// Falls back to the rule code for rules that carry no message.
#[must_use]
pub fn collect_field_errors(errors: &ValidationErrors) -> FieldErrors {
    let mut collected = FieldErrors::new();
    for (field, kind) in errors.errors() {
        if let ValidationErrorsKind::Field(violations) = kind {
            let messages = violations
                .iter()
                .map(|violation| match &violation.message {
                    Some(message) => message.to_string(),
                    None => violation.code.to_string(),
                })
                .collect();
            collected.insert(field.to_string(), messages);
        }
    }
    collected
}
