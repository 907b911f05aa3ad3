//! Post use cases: validate at the boundary, then talk to the store.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Post, PostChanges, PostDraft};
use crate::error::{DomainError, RepoError};
use crate::ports::PostRepository;
use crate::validation;

/// Create/list/get/update/delete over a [`PostRepository`].
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>) -> Self {
        Self { posts }
    }

    /// Validate and persist a new post.
    pub async fn create(&self, draft: PostDraft) -> Result<Post, DomainError> {
        let draft = draft.normalized();
        validation::check(&draft).map_err(DomainError::Validation)?;

        let post = self.posts.insert(Post::new(draft)).await?;
        tracing::debug!(post_id = %post.id, slug = %post.slug, "Post created");
        Ok(post)
    }

    /// All posts, oldest first.
    pub async fn list(&self) -> Result<Vec<Post>, DomainError> {
        Ok(self.posts.find_all().await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::post_not_found(id))
    }

    /// Apply `changes` to an existing post. The merged result must still be valid.
    pub async fn update(&self, id: Uuid, changes: PostChanges) -> Result<Post, DomainError> {
        let mut post = self.get(id).await?;

        let draft = changes.merge_into(&post);
        validation::check(&draft).map_err(DomainError::Validation)?;
        post.apply(draft);

        let post = self.posts.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            e => e.into(),
        })?;
        tracing::debug!(post_id = %post.id, "Post updated");
        Ok(post)
    }

    /// Remove a post and return what was removed.
    pub async fn delete(&self, id: Uuid) -> Result<Post, DomainError> {
        let post = self.get(id).await?;

        self.posts.delete(id).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::post_not_found(id),
            e => e.into(),
        })?;
        tracing::debug!(post_id = %id, "Post deleted");
        Ok(post)
    }
}
