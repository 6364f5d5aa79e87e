//! Validated JSON extractor - Combines deserialization with validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors, ValidationErrorsKind};

use crate::errors::AppError;

/// Validated JSON extractor that automatically validates requests.
///
/// Malformed bodies become `AppError::BadRequest`; bodies that parse but
/// break a declared constraint become `AppError::Validation` listing every
/// offending field, so the handler only ever sees valid input.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(format_validation_errors(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Format validation errors as `field: message` pairs, nested fields dotted
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.sort();
    messages.join(", ")
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{}.{}", prefix, field)
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                out.extend(errs.iter().map(|e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| "is invalid".to_string());
                    format!("{}: {}", path, message)
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_messages(&format!("{}[{}]", path, index), nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_format_flat_field_errors() {
        let mut name_error = ValidationError::new("length");
        name_error.message = Some("Nome deve ter entre 3 e 100 caracteres".into());

        let mut errors = ValidationErrors::new();
        errors.add("name", name_error);
        errors.add("crm", ValidationError::new("length"));

        let formatted = format_validation_errors(&errors);
        assert_eq!(
            formatted,
            "crm: is invalid, name: Nome deve ter entre 3 e 100 caracteres"
        );
    }
}
