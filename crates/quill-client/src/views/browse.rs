//! The post list, with its detail, edit and delete dialogs.

use uuid::Uuid;

use quill_core::domain::{PostDraft, parse_tags};
use quill_core::validation;
use quill_shared::dto::{PostResponse, UpdatePostRequest};

use super::card::PostCard;
use super::form::{Field, FormErrors};
use crate::api::PostsApi;
use crate::error::ClientError;

pub const LOAD_ERROR: &str = "Failed to load posts. Please make sure the backend server is running.";

/// The edit dialog's working copy of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDialog {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    /// Tags as comma-separated text.
    pub tags: String,
    pub errors: FormErrors,
}

impl EditDialog {
    fn open(post: &PostResponse) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: post.author.clone(),
            tags: post.tags.join(", "),
            errors: FormErrors::default(),
        }
    }

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

    /// Trimmed full replacement of the post's fields.
    pub fn draft(&self) -> PostDraft {
        PostDraft::new(
            &self.title,
            &self.content,
            &self.author,
            parse_tags(&self.tags),
        )
    }
}

/// State of the browse screen.
#[derive(Debug, Default)]
pub struct BrowseView {
    posts: Vec<PostResponse>,
    loading: bool,
    error: Option<String>,
    detail: Option<Uuid>,
    edit: Option<EditDialog>,
    pending_delete: Option<Uuid>,
}

impl BrowseView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the list. A failure keeps the previous posts and raises the banner.
    pub async fn load<A: PostsApi + ?Sized>(&mut self, api: &A) {
        self.loading = true;
        match api.list().await {
            Ok(posts) => {
                self.posts = posts;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load posts");
                self.error = Some(LOAD_ERROR.to_string());
            }
        }
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn posts(&self) -> &[PostResponse] {
        &self.posts
    }

    pub fn cards(&self) -> Vec<PostCard> {
        self.posts.iter().map(PostCard::from).collect()
    }

    fn find(&self, id: Uuid) -> Option<&PostResponse> {
        self.posts.iter().find(|p| p.id == id)
    }

    // Detail dialog

    pub fn open_detail(&mut self, id: Uuid) -> bool {
        let found = self.find(id).is_some();
        if found {
            self.detail = Some(id);
        }
        found
    }

    pub fn detail(&self) -> Option<&PostResponse> {
        self.detail.and_then(|id| self.find(id))
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    // Edit dialog

    /// Opens the edit dialog pre-filled with the post's current values.
    pub fn open_edit(&mut self, id: Uuid) -> bool {
        self.edit = self.find(id).map(EditDialog::open);
        self.edit.is_some()
    }

    pub fn edit_dialog(&self) -> Option<&EditDialog> {
        self.edit.as_ref()
    }

    pub fn edit_dialog_mut(&mut self) -> Option<&mut EditDialog> {
        self.edit.as_mut()
    }

    pub fn close_edit(&mut self) {
        self.edit = None;
    }

    /// Send the dialog's fields and reload the list on success.
    ///
    /// Invalid fields and rejected submissions keep the dialog open with the
    /// errors attached. Returns `true` once the server accepted the update.
    pub async fn submit_edit<A: PostsApi + ?Sized>(&mut self, api: &A) -> bool {
        let Some(dialog) = self.edit.as_mut() else {
            return false;
        };

        let draft = dialog.draft();
        if let Err(errors) = validation::check(&draft) {
            dialog.errors = FormErrors::from_field_errors(&errors);
            return false;
        }

        match api.update(dialog.id, &UpdatePostRequest::from(draft)).await {
            Ok(post) => {
                tracing::debug!(post_id = %post.id, "Post updated");
                self.edit = None;
                self.load(api).await;
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to update post");
                dialog.errors = FormErrors::from_client_error(&e);
                false
            }
        }
    }

    // Delete dialog

    pub fn request_delete(&mut self, id: Uuid) -> bool {
        let found = self.find(id).is_some();
        if found {
            self.pending_delete = Some(id);
        }
        found
    }

    pub fn pending_delete(&self) -> Option<&PostResponse> {
        self.pending_delete.and_then(|id| self.find(id))
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Delete the pending post. The card is dropped only after the server
    /// confirmed the delete; on failure the dialog stays open.
    pub async fn confirm_delete<A: PostsApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> Result<(), ClientError> {
        let Some(id) = self.pending_delete else {
            return Ok(());
        };

        if let Err(e) = api.delete(id).await {
            tracing::warn!(post_id = %id, error = %e, "Failed to delete post");
            return Err(e);
        }

        self.pending_delete = None;
        self.posts.retain(|p| p.id != id);
        if self.detail == Some(id) {
            self.detail = None;
        }
        Ok(())
    }
}
