//! Field constraints for user-editable post fields.
//!
//! The same rules run on the server before anything is persisted and on the
//! client before a form is submitted. The client copy is advisory only.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError, ValidationErrors};

pub const TITLE_MAX_CHARS: usize = 200;
pub const CONTENT_MIN_CHARS: usize = 10;
pub const AUTHOR_MAX_CHARS: usize = 100;

/// A single failed constraint, tagged with the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Joins the messages of `errors` into one human-readable line.
    pub fn join(errors: &[FieldError]) -> String {
        errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Runs the `validator` rules of `value` and flattens the result into
/// field-tagged errors, ordered the way the fields appear on a form.
pub fn check<T: Validate>(value: &T) -> Result<(), Vec<FieldError>> {
    value.validate().map_err(|errors| flatten(&errors))
}

fn flatten(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut flat: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_else(|| error.code.to_string());
                FieldError::new(field.clone(), message)
            })
        })
        .collect();

    flat.sort_by_key(|e| field_rank(&e.field));
    flat
}

fn field_rank(field: &str) -> usize {
    match field {
        "title" => 0,
        "content" => 1,
        "author" => 2,
        _ => 3,
    }
}

fn failed(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::Borrowed(message));
    error
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    let len = title.chars().count();
    if len == 0 {
        return Err(failed("required", "Title is required"));
    }
    if len > TITLE_MAX_CHARS {
        return Err(failed("length", "Title cannot exceed 200 characters"));
    }
    Ok(())
}

pub(crate) fn validate_content(content: &str) -> Result<(), ValidationError> {
    let len = content.chars().count();
    if len == 0 {
        return Err(failed("required", "Content is required"));
    }
    if len < CONTENT_MIN_CHARS {
        return Err(failed("length", "Content must be at least 10 characters"));
    }
    Ok(())
}

pub(crate) fn validate_author(author: &str) -> Result<(), ValidationError> {
    let len = author.chars().count();
    if len == 0 {
        return Err(failed("required", "Author is required"));
    }
    if len > AUTHOR_MAX_CHARS {
        return Err(failed(
            "length",
            "Author name cannot exceed 100 characters",
        ));
    }
    Ok(())
}
