//! # Quill Client
//!
//! Talks to the Quill API and holds the state of the client views: the
//! browse view (list, detail, edit and delete dialogs) and the create form.
//! Rendering is left to the front end.

pub mod api;
pub mod error;
pub mod views;

pub use api::{HttpPostsApi, PostsApi};
pub use error::ClientError;
