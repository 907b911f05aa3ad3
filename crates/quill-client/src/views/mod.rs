//! View state for the client front ends.

mod browse;
mod card;
mod create;
mod form;

#[cfg(test)]
pub(crate) mod fake;

pub use browse::{BrowseView, EditDialog, LOAD_ERROR};
pub use card::{EXCERPT_CHARS, PostCard, excerpt, format_date};
pub use create::{CreateForm, REDIRECT_DELAY, Submission};
pub use form::{Field, FormErrors};
