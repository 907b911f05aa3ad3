use quill_shared::FieldError;

use crate::error::ClientError;

/// An editable post field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Content,
    Author,
    Tags,
}

impl Field {
    /// Looks up a field by the tag the server puts on its errors.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "title" => Some(Self::Title),
            "content" => Some(Self::Content),
            "author" => Some(Self::Author),
            "tags" => Some(Self::Tags),
            _ => None,
        }
    }
}

/// Per-field messages plus a general banner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<String>,
    pub general: Option<String>,
}

impl FormErrors {
    /// Places each error on its field. Errors for unknown fields go to the
    /// general banner.
    pub fn from_field_errors(errors: &[FieldError]) -> Self {
        let mut form = Self::default();
        for error in errors {
            match Field::from_tag(&error.field) {
                Some(field) => {
                    let slot = form.slot(field);
                    if slot.is_none() {
                        *slot = Some(error.message.clone());
                    }
                }
                None => form.push_general(&error.message),
            }
        }
        form
    }

    /// Maps any failed API call onto the form.
    pub fn from_client_error(error: &ClientError) -> Self {
        match error {
            ClientError::Validation(errors) => Self::from_field_errors(errors),
            other => Self {
                general: Some(other.to_string()),
                ..Self::default()
            },
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Title => self.title.as_deref(),
            Field::Content => self.content.as_deref(),
            Field::Author => self.author.as_deref(),
            Field::Tags => self.tags.as_deref(),
        }
    }

    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn slot(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
            Field::Author => &mut self.author,
            Field::Tags => &mut self.tags,
        }
    }

    fn push_general(&mut self, message: &str) {
        self.general = Some(match self.general.take() {
            Some(existing) => format!("{existing}, {message}"),
            None => message.to_string(),
        });
    }
}
