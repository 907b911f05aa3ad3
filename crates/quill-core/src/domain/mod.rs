//! Domain entities - the core business objects.

mod post;

pub use post::{Post, PostChanges, PostDraft, normalize_tags, parse_tags, slugify};
