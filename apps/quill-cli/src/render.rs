//! Text rendering of the client views.

use std::fmt::Write;

use colored::Colorize;

use quill_client::views::{FormErrors, PostCard, format_date};
use quill_shared::dto::PostResponse;

pub fn cards(cards: &[PostCard]) -> String {
    if cards.is_empty() {
        return "No posts yet. Create one with `quill create`.\n".to_string();
    }

    let mut out = String::new();
    for card in cards {
        let _ = writeln!(out, "{}", card.title.bold());
        let _ = writeln!(out, "  {} · {}", card.author, card.date.dimmed());
        let _ = writeln!(out, "  {}", card.excerpt);
        if !card.tags.is_empty() {
            let _ = writeln!(out, "  {}", tag_list(&card.tags));
        }
        let _ = writeln!(out, "  {}", card.id.to_string().dimmed());
        out.push('\n');
    }
    out
}

pub fn detail(post: &PostResponse) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", post.title.bold());
    let _ = writeln!(
        out,
        "by {} · {}",
        post.author,
        format_date(&post.created_at).dimmed()
    );
    if post.updated_at != post.created_at {
        let _ = writeln!(out, "updated {}", format_date(&post.updated_at).dimmed());
    }
    if !post.tags.is_empty() {
        let _ = writeln!(out, "{}", tag_list(&post.tags));
    }
    out.push('\n');
    let _ = writeln!(out, "{}", post.content);
    out
}

pub fn form_errors(errors: &FormErrors) -> String {
    let mut out = String::new();
    if let Some(general) = &errors.general {
        let _ = writeln!(out, "{} {}", "✗".red(), general);
    }

    let fields = [
        ("title", &errors.title),
        ("content", &errors.content),
        ("author", &errors.author),
        ("tags", &errors.tags),
    ];
    for (name, message) in fields {
        if let Some(message) = message {
            let _ = writeln!(out, "  {} {}: {}", "✗".red(), name, message);
        }
    }
    out
}

fn tag_list(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    use super::*;

    fn post() -> PostResponse {
        let at = Utc.with_ymd_and_hms(2025, 1, 5, 12, 0, 0).unwrap();
        PostResponse {
            id: Uuid::new_v4(),
            title: "Hello".to_string(),
            content: "Hello world!".to_string(),
            author: "Ann".to_string(),
            tags: vec!["tech".to_string(), "life".to_string()],
            created_at: at,
            updated_at: at,
            slug: "hello".to_string(),
        }
    }

    #[test]
    fn renders_cards_with_tags_and_date() {
        colored::control::set_override(false);
        let post = post();
        let out = cards(&[PostCard::from(&post)]);

        assert!(out.starts_with("Hello\n"));
        assert!(out.contains("Ann · January 5, 2025"));
        assert!(out.contains("#tech #life"));
        assert!(out.contains(&post.id.to_string()));
    }

    #[test]
    fn empty_list_has_a_hint() {
        assert!(cards(&[]).starts_with("No posts yet"));
    }

    #[test]
    fn detail_shows_full_content() {
        colored::control::set_override(false);
        let out = detail(&post());

        assert!(out.contains("by Ann · January 5, 2025"));
        assert!(!out.contains("updated"));
        assert!(out.ends_with("Hello world!\n"));
    }

    #[test]
    fn form_errors_list_general_then_fields() {
        colored::control::set_override(false);
        let errors = FormErrors {
            title: Some("Title is required".to_string()),
            general: Some("Validation failed".to_string()),
            ..FormErrors::default()
        };

        assert_eq!(
            form_errors(&errors),
            "✗ Validation failed\n  ✗ title: Title is required\n"
        );
    }
}
