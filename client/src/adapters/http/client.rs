//! PostFlow API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Post, PostId};
use crate::domain::ports::PostsApi;
use crate::error::ApiError;

/// Implementation of the posts API over HTTP
pub struct HttpPostsApi {
    http: Client,
    base_url: String,
}

impl HttpPostsApi {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &'static str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn post_json<B: Serialize>(
        &self,
        endpoint: &'static str,
        body: &B,
    ) -> Result<reqwest::Response, ApiError> {
        self.http
            .post(self.url(endpoint))
            .json(body)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let status = response.status();

        if status.is_success() {
            response.json().await.map_err(|e| ApiError::Decode {
                endpoint,
                message: e.to_string(),
            })
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn handle_empty_response(
        &self,
        endpoint: &'static str,
        response: reqwest::Response,
    ) -> Result<(), ApiError> {
        let status = response.status();

        if status.is_success() {
            // Body is an opaque success signal, ignore it
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// Request types for the PostFlow API
#[derive(Serialize)]
struct AddPostRequest<'a> {
    content: &'a str,
}

#[derive(Serialize)]
struct PostRef {
    post_id: PostId,
}

#[derive(Serialize)]
struct AddCommentRequest<'a> {
    post_id: PostId,
    content: &'a str,
}

#[derive(Deserialize)]
struct ShareResponse {
    share_link: String,
}

#[async_trait]
impl PostsApi for HttpPostsApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let endpoint = "/posts";
        let response = self
            .http
            .get(self.url(endpoint))
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        self.handle_response(endpoint, response).await
    }

    async fn add_post(&self, content: &str) -> Result<(), ApiError> {
        let endpoint = "/add_post";
        let response = self.post_json(endpoint, &AddPostRequest { content }).await?;
        self.handle_empty_response(endpoint, response).await
    }

    async fn like_post(&self, id: PostId) -> Result<(), ApiError> {
        let endpoint = "/like_post";
        let response = self.post_json(endpoint, &PostRef { post_id: id }).await?;
        self.handle_empty_response(endpoint, response).await
    }

    async fn dislike_post(&self, id: PostId) -> Result<(), ApiError> {
        let endpoint = "/dislike_post";
        let response = self.post_json(endpoint, &PostRef { post_id: id }).await?;
        self.handle_empty_response(endpoint, response).await
    }

    async fn share_post(&self, id: PostId) -> Result<String, ApiError> {
        let endpoint = "/share_post";
        let response = self.post_json(endpoint, &PostRef { post_id: id }).await?;
        let share: ShareResponse = self.handle_response(endpoint, response).await?;
        Ok(share.share_link)
    }

    async fn add_comment(&self, id: PostId, content: &str) -> Result<(), ApiError> {
        let endpoint = "/add_comment";
        let response = self
            .post_json(endpoint, &AddCommentRequest { post_id: id, content })
            .await?;
        self.handle_empty_response(endpoint, response).await
    }
}
