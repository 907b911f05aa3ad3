//! The "new post" form.

use std::time::Duration;

use quill_core::domain::{PostDraft, parse_tags};
use quill_core::validation;
use quill_shared::dto::{CreatePostRequest, PostResponse};

use super::form::{Field, FormErrors};
use crate::api::PostsApi;

/// How long the success message stays up before returning to the list.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(2);

/// Outcome of [`CreateForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Local checks failed; nothing was sent.
    Invalid,
    /// The server refused or could not be reached. See [`CreateForm::errors`].
    Failed,
    /// Stored. Show the list again after `redirect_after`.
    Created {
        post: PostResponse,
        redirect_after: Duration,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CreateForm {
    title: String,
    content: String,
    author: String,
    tags: String,
    errors: FormErrors,
    submitting: bool,
    submitted: bool,
}

impl CreateForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, value: impl Into<String>) {
        self.set(Field::Title, value);
    }

    pub fn set_content(&mut self, value: impl Into<String>) {
        self.set(Field::Content, value);
    }

    pub fn set_author(&mut self, value: impl Into<String>) {
        self.set(Field::Author, value);
    }

    pub fn set_tags(&mut self, value: impl Into<String>) {
        self.set(Field::Tags, value);
    }

    /// Replaces a field's text and clears its error.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Title => self.title = value,
            Field::Content => self.content = value,
            Field::Author => self.author = value,
            Field::Tags => self.tags = value,
        }
        self.errors.clear(field);
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn draft(&self) -> PostDraft {
        PostDraft::new(
            &self.title,
            &self.content,
            &self.author,
            parse_tags(&self.tags),
        )
    }

    /// Runs the post field rules locally. Returns `true` when nothing failed.
    pub fn validate(&mut self) -> bool {
        self.errors = match validation::check(&self.draft()) {
            Ok(()) => FormErrors::default(),
            Err(errors) => FormErrors::from_field_errors(&errors),
        };
        self.errors.is_empty()
    }

    pub async fn submit<A: PostsApi + ?Sized>(&mut self, api: &A) -> Submission {
        if !self.validate() {
            return Submission::Invalid;
        }

        self.submitting = true;
        let result = api.create(&CreatePostRequest::from(self.draft())).await;
        self.submitting = false;

        match result {
            Ok(post) => {
                tracing::info!(post_id = %post.id, "Post created");
                self.submitted = true;
                Submission::Created {
                    post,
                    redirect_after: REDIRECT_DELAY,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create post");
                self.errors = FormErrors::from_client_error(&e);
                Submission::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::fake::FakeApi;

    fn filled() -> CreateForm {
        let mut form = CreateForm::new();
        form.set_title("Hello");
        form.set_content("Hello world!");
        form.set_author("Ann");
        form.set_tags("tech, life");
        form
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let mut form = CreateForm::new();
        assert!(!form.validate());

        let errors = form.errors();
        assert_eq!(errors.get(Field::Title), Some("Title is required"));
        assert_eq!(errors.get(Field::Content), Some("Content is required"));
        assert_eq!(errors.get(Field::Author), Some("Author is required"));
        assert!(errors.general.is_none());
    }

    #[test]
    fn editing_a_field_clears_only_its_error() {
        let mut form = CreateForm::new();
        form.validate();

        form.set_title("Hi");
        assert_eq!(form.errors().get(Field::Title), None);
        assert_eq!(form.errors().get(Field::Author), Some("Author is required"));
    }

    #[test]
    fn limits_match_the_server() {
        let mut form = filled();
        form.set_title("t".repeat(201));
        form.set_content("too short");
        form.set_author("a".repeat(101));
        assert!(!form.validate());

        let errors = form.errors();
        assert_eq!(
            errors.get(Field::Title),
            Some("Title cannot exceed 200 characters")
        );
        assert_eq!(
            errors.get(Field::Content),
            Some("Content must be at least 10 characters")
        );
        assert_eq!(
            errors.get(Field::Author),
            Some("Author name cannot exceed 100 characters")
        );
    }

    #[test]
    fn draft_parses_tag_text() {
        let mut form = filled();
        form.set_tags(" tech , , life,");
        assert_eq!(form.draft().tags, vec!["tech", "life"]);
    }

    #[tokio::test]
    async fn invalid_form_is_not_sent() {
        let api = FakeApi::new();
        let mut form = CreateForm::new();

        assert_eq!(form.submit(&api).await, Submission::Invalid);
        assert!(api.list().await.unwrap().is_empty());
        assert!(!form.is_submitted());
    }

    #[tokio::test]
    async fn successful_submit_reports_redirect() {
        let api = FakeApi::new();
        let mut form = filled();

        let Submission::Created {
            post,
            redirect_after,
        } = form.submit(&api).await
        else {
            panic!("expected the post to be created");
        };

        assert_eq!(redirect_after, Duration::from_secs(2));
        assert_eq!(post.tags, vec!["tech", "life"]);
        assert!(form.is_submitted());
        assert!(!form.is_submitting());
        assert_eq!(api.list().await.unwrap(), vec![post]);
    }

    #[tokio::test]
    async fn server_failure_becomes_general_banner() {
        let api = FakeApi::new();
        api.set_down(true);
        let mut form = filled();

        assert_eq!(form.submit(&api).await, Submission::Failed);
        assert_eq!(
            form.errors().general.as_deref(),
            Some("Service unavailable")
        );
        assert!(!form.is_submitted());
    }
}
