//! # Quill Shared
//!
//! Wire types shared between the API server and its clients.

pub mod dto;
pub mod response;

pub use quill_core::validation::FieldError;
pub use response::ErrorResponse;
