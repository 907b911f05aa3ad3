use chrono::{DateTime, Utc};
use uuid::Uuid;

use quill_shared::dto::PostResponse;

/// Characters of content shown on a card before it is cut off.
pub const EXCERPT_CHARS: usize = 150;

/// A post as shown in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCard {
    pub id: Uuid,
    pub title: String,
    pub author: String,
    pub date: String,
    pub excerpt: String,
    pub tags: Vec<String>,
}

impl From<&PostResponse> for PostCard {
    fn from(post: &PostResponse) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            author: post.author.clone(),
            date: format_date(&post.created_at),
            excerpt: excerpt(&post.content, EXCERPT_CHARS),
            tags: post.tags.clone(),
        }
    }
}

/// Long-form date, e.g. "January 5, 2025".
pub fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d, %Y").to_string()
}

/// Cuts `content` to `max` characters, marking the cut with an ellipsis.
pub fn excerpt(content: &str, max: usize) -> String {
    match content.char_indices().nth(max) {
        Some((end, _)) => format!("{}...", content[..end].trim_end()),
        None => content.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn formats_long_month_dates() {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 18, 30, 0).unwrap();
        assert_eq!(format_date(&at), "January 5, 2025");

        let at = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        assert_eq!(format_date(&at), "December 31, 2024");
    }

    #[test]
    fn short_content_is_kept_whole() {
        assert_eq!(excerpt("Hello world!", 150), "Hello world!");
        assert_eq!(excerpt(&"a".repeat(150), 150), "a".repeat(150));
    }

    #[test]
    fn long_content_is_cut_on_characters() {
        let content = "é".repeat(151);
        assert_eq!(excerpt(&content, 150), format!("{}...", "é".repeat(150)));
    }

    #[test]
    fn card_uses_creation_date() {
        let created = Utc.with_ymd_and_hms(2025, 3, 9, 10, 0, 0).unwrap();
        let post = PostResponse {
            id: Uuid::new_v4(),
            title: "Hello".to_string(),
            content: "x".repeat(200),
            author: "Ann".to_string(),
            tags: vec!["tech".to_string()],
            created_at: created,
            updated_at: created + chrono::Duration::days(3),
            slug: "hello".to_string(),
        };

        let card = PostCard::from(&post);
        assert_eq!(card.date, "March 9, 2025");
        assert_eq!(card.excerpt.chars().count(), 153);
        assert_eq!(card.tags, vec!["tech"]);
    }
}
