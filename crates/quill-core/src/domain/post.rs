use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Post entity - represents a blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post from an already validated draft.
    pub fn new(draft: PostDraft) -> Self {
        let now = now();
        Self {
            id: Uuid::new_v4(),
            slug: slugify(&draft.title),
            title: draft.title,
            content: draft.content,
            author: draft.author,
            tags: draft.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// The user-editable fields of this post.
    pub fn draft(&self) -> PostDraft {
        PostDraft {
            title: self.title.clone(),
            content: self.content.clone(),
            author: self.author.clone(),
            tags: self.tags.clone(),
        }
    }

    /// Replace the editable fields with `draft`, keeping identity and creation time.
    pub fn apply(&mut self, draft: PostDraft) {
        if draft.title != self.title {
            self.slug = slugify(&draft.title);
        }
        self.title = draft.title;
        self.content = draft.content;
        self.author = draft.author;
        self.tags = draft.tags;
        self.touch();
    }

    /// Refresh `updated_at`. The new value is always later than the old one.
    fn touch(&mut self) {
        let now = now();
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::milliseconds(1)
        };
    }
}

/// Millisecond precision keeps timestamps stable across store round trips.
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(3)
}

/// The user-editable fields of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct PostDraft {
    #[validate(custom(function = "crate::validation::validate_title"))]
    pub title: String,
    #[validate(custom(function = "crate::validation::validate_content"))]
    pub content: String,
    #[validate(custom(function = "crate::validation::validate_author"))]
    pub author: String,
    pub tags: Vec<String>,
}

impl PostDraft {
    /// Build a draft, trimming every field and dropping blank tags.
    pub fn new(
        title: impl AsRef<str>,
        content: impl AsRef<str>,
        author: impl AsRef<str>,
        tags: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Self {
        Self {
            title: title.as_ref().trim().to_string(),
            content: content.as_ref().trim().to_string(),
            author: author.as_ref().trim().to_string(),
            tags: normalize_tags(tags),
        }
    }

    /// Trim a draft that was built field by field (e.g. deserialized).
    pub fn normalized(self) -> Self {
        Self::new(self.title, self.content, self.author, self.tags)
    }
}

/// A partial set of replacements for an existing post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl PostChanges {
    /// Overlay the provided fields on `post` and return the trimmed result.
    pub fn merge_into(self, post: &Post) -> PostDraft {
        let current = post.draft();
        PostDraft::new(
            self.title.unwrap_or(current.title),
            self.content.unwrap_or(current.content),
            self.author.unwrap_or(current.author),
            self.tags.unwrap_or(current.tags),
        )
    }
}

/// Trim each tag and drop the ones left empty. Order is preserved.
pub fn normalize_tags(tags: impl IntoIterator<Item = impl AsRef<str>>) -> Vec<String> {
    tags.into_iter()
        .map(|t| t.as_ref().trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Split comma separated free text ("tech, life") into tags.
pub fn parse_tags(text: &str) -> Vec<String> {
    normalize_tags(text.split(','))
}

/// Derive a URL-friendly slug from a title.
///
/// Runs of anything other than ASCII letters and digits collapse into a
/// single `-`. Titles with nothing usable fall back to `post`.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_dash = false;

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            pending_dash = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }

    if slug.is_empty() {
        "post".to_string()
    } else {
        slug
    }
}
