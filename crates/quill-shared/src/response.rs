//! Standardized error body returned by the API.

use serde::{Deserialize, Serialize};

use quill_core::validation::FieldError;

/// Error body for every non-2xx response.
///
/// `errors` carries the plain messages; `fieldErrors` carries the same
/// messages tagged with the field they belong to, for clients that map
/// them back onto a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// The HTTP status code.
    #[serde(default)]
    pub status: u16,

    /// A human-readable summary.
    pub message: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

impl ErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            errors: Vec::new(),
            field_errors: Vec::new(),
        }
    }

    // Common error constructors
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    pub fn validation(field_errors: Vec<FieldError>) -> Self {
        Self {
            errors: field_errors.iter().map(|e| e.message.clone()).collect(),
            field_errors,
            ..Self::new(400, "Validation failed")
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal server error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn validation_body_carries_plain_and_tagged_errors() {
        let body = ErrorResponse::validation(vec![FieldError::new("title", "Title is required")]);

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": 400,
                "message": "Validation failed",
                "errors": ["Title is required"],
                "fieldErrors": [{ "field": "title", "message": "Title is required" }],
            })
        );
    }

    #[test]
    fn plain_body_omits_empty_lists() {
        let value = serde_json::to_value(ErrorResponse::not_found("Post not found")).unwrap();
        assert_eq!(value, json!({ "status": 404, "message": "Post not found" }));
    }

    #[test]
    fn bare_message_bodies_deserialize() {
        let body: ErrorResponse = serde_json::from_value(json!({ "message": "nope" })).unwrap();
        assert_eq!(body.status, 0);
        assert!(body.field_errors.is_empty());
    }
}
