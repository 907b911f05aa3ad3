//! In-process [`PostsApi`] for view tests, backed by the real post rules.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use uuid::Uuid;

use quill_core::DomainError;
use quill_core::service::PostService;
use quill_infra::InMemoryPostRepository;
use quill_shared::dto::{
    CreatePostRequest, DeletePostResponse, HealthResponse, PostResponse, UpdatePostRequest,
};

use crate::api::PostsApi;
use crate::error::ClientError;

pub struct FakeApi {
    service: PostService,
    down: AtomicBool,
    list_calls: AtomicUsize,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            service: PostService::new(Arc::new(InMemoryPostRepository::new())),
            down: AtomicBool::new(false),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// Every call fails with a 503 until brought back up.
    pub fn set_down(&self, down: bool) {
        self.down.store(down, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    pub async fn seed(&self, title: &str) -> PostResponse {
        let req = CreatePostRequest {
            title: title.to_string(),
            content: format!("{title} has plenty of content"),
            author: "Ann".to_string(),
            tags: vec!["tech".to_string()],
        };
        self.service.create(req.into()).await.unwrap().into()
    }

    fn check_up(&self) -> Result<(), ClientError> {
        if self.down.load(Ordering::SeqCst) {
            return Err(ClientError::Server {
                status: 503,
                message: "Service unavailable".to_string(),
            });
        }
        Ok(())
    }
}

fn client_error(e: DomainError) -> ClientError {
    match e {
        DomainError::NotFound { .. } => ClientError::NotFound,
        DomainError::Validation(errors) => ClientError::Validation(errors),
        DomainError::Repository(_) => ClientError::Server {
            status: 500,
            message: "Internal server error".to_string(),
        },
    }
}

#[async_trait]
impl PostsApi for FakeApi {
    async fn list(&self) -> Result<Vec<PostResponse>, ClientError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_up()?;
        let posts = self.service.list().await.map_err(client_error)?;
        Ok(posts.into_iter().map(PostResponse::from).collect())
    }

    async fn get(&self, id: Uuid) -> Result<PostResponse, ClientError> {
        self.check_up()?;
        Ok(self.service.get(id).await.map_err(client_error)?.into())
    }

    async fn create(&self, req: &CreatePostRequest) -> Result<PostResponse, ClientError> {
        self.check_up()?;
        let post = self
            .service
            .create(req.clone().into())
            .await
            .map_err(client_error)?;
        Ok(post.into())
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdatePostRequest,
    ) -> Result<PostResponse, ClientError> {
        self.check_up()?;
        let post = self
            .service
            .update(id, req.clone().into())
            .await
            .map_err(client_error)?;
        Ok(post.into())
    }

    async fn delete(&self, id: Uuid) -> Result<DeletePostResponse, ClientError> {
        self.check_up()?;
        let post = self.service.delete(id).await.map_err(client_error)?;
        Ok(DeletePostResponse {
            message: "Post deleted successfully".to_string(),
            post: post.into(),
        })
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        self.check_up()?;
        Ok(HealthResponse {
            message: "Backend server is running".to_string(),
            status: "OK".to_string(),
            version: "test".to_string(),
            timestamp: String::new(),
        })
    }
}
