//! Typed access to the posts API.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;
use uuid::Uuid;

use quill_shared::ErrorResponse;
use quill_shared::dto::{
    CreatePostRequest, DeletePostResponse, HealthResponse, PostListResponse, PostResponse,
    UpdatePostRequest,
};

use crate::error::ClientError;

/// Operations the client views need from the server.
#[async_trait]
pub trait PostsApi: Send + Sync {
    async fn list(&self) -> Result<Vec<PostResponse>, ClientError>;
    async fn get(&self, id: Uuid) -> Result<PostResponse, ClientError>;
    async fn create(&self, req: &CreatePostRequest) -> Result<PostResponse, ClientError>;
    async fn update(&self, id: Uuid, req: &UpdatePostRequest)
    -> Result<PostResponse, ClientError>;
    async fn delete(&self, id: Uuid) -> Result<DeletePostResponse, ClientError>;
    async fn health(&self) -> Result<HealthResponse, ClientError>;
}

/// [`PostsApi`] over HTTP.
#[derive(Debug, Clone)]
pub struct HttpPostsApi {
    client: reqwest::Client,
    base: Url,
}

impl HttpPostsApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: &str) -> Result<Self, ClientError> {
        let mut base = Url::parse(base_url)?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { client, base })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    fn post_url(&self, id: Uuid) -> Result<Url, ClientError> {
        self.url(&format!("api/posts/{id}"))
    }

    async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ClientError> {
        let res = req.send().await.map_err(|e| {
            tracing::warn!(error = %e, "Request to API failed");
            ClientError::Network(e)
        })?;
        decode(res).await
    }
}

async fn decode<T: DeserializeOwned>(res: Response) -> Result<T, ClientError> {
    let status = res.status();
    if status.is_success() {
        return res.json::<T>().await.map_err(ClientError::Decode);
    }

    let body = res.json::<ErrorResponse>().await.ok();
    tracing::debug!(status = status.as_u16(), ?body, "API returned an error");

    Err(match (status, body) {
        (StatusCode::NOT_FOUND, _) => ClientError::NotFound,
        (StatusCode::BAD_REQUEST, Some(body)) if !body.field_errors.is_empty() => {
            ClientError::Validation(body.field_errors)
        }
        (_, Some(body)) => {
            let message = if body.errors.is_empty() {
                body.message
            } else {
                body.errors.join(", ")
            };
            ClientError::Server {
                status: status.as_u16(),
                message,
            }
        }
        (_, None) => ClientError::Server {
            status: status.as_u16(),
            message: status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string(),
        },
    })
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn list(&self) -> Result<Vec<PostResponse>, ClientError> {
        let url = self.url("api/posts")?;
        let body: PostListResponse = self.send(self.client.get(url)).await?;
        Ok(body.posts)
    }

    async fn get(&self, id: Uuid) -> Result<PostResponse, ClientError> {
        let url = self.post_url(id)?;
        self.send(self.client.get(url)).await
    }

    async fn create(&self, req: &CreatePostRequest) -> Result<PostResponse, ClientError> {
        let url = self.url("api/posts")?;
        self.send(self.client.post(url).json(req)).await
    }

    async fn update(
        &self,
        id: Uuid,
        req: &UpdatePostRequest,
    ) -> Result<PostResponse, ClientError> {
        let url = self.post_url(id)?;
        self.send(self.client.put(url).json(req)).await
    }

    async fn delete(&self, id: Uuid) -> Result<DeletePostResponse, ClientError> {
        let url = self.post_url(id)?;
        self.send(self.client.delete(url)).await
    }

    async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = self.url("api/health")?;
        self.send(self.client.get(url)).await
    }
}
