//! HTTP client for the remote identity service

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use shared::{Identity, IdentityUpdate, LoginRequest, LoginResponse, RegisterRequest};

use crate::{ClientConfig, ClientError, ClientResult};

/// Remote identity service
///
/// Every failure is reported as-is: no retry, no rewriting of the payload.
#[async_trait]
pub trait IdentityService: Send + Sync {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse>;
    async fn register(&self, request: &RegisterRequest) -> ClientResult<LoginResponse>;
    /// Token-validated "current user" retrieval
    async fn current_user(&self, token: &str) -> ClientResult<Identity>;
    async fn update_current_user(
        &self,
        token: &str,
        update: &IdentityUpdate,
    ) -> ClientResult<Identity>;
}

/// 网络 HTTP 客户端
#[derive(Debug, Clone)]
pub struct NetworkIdentityService {
    client: Client,
    base_url: String,
}

impl NetworkIdentityService {
    /// Create a client from configuration
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// 获取基础 URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(token: &str) -> String {
        format!("Token {}", token)
    }

    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            return Err(status_error(status, text));
        }
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", e, text)))
    }
}

/// Map a non-success status to an error, keeping the body verbatim
pub(crate) fn status_error(status: StatusCode, body: String) -> ClientError {
    match status {
        StatusCode::UNAUTHORIZED => ClientError::Unauthorized(body),
        StatusCode::FORBIDDEN => ClientError::Forbidden(body),
        StatusCode::NOT_FOUND => ClientError::NotFound(body),
        StatusCode::BAD_REQUEST => ClientError::Validation(body),
        other => ClientError::Remote {
            status: other.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl IdentityService for NetworkIdentityService {
    async fn login(&self, request: &LoginRequest) -> ClientResult<LoginResponse> {
        let response = self
            .client
            .post(self.url("auth/users/login/"))
            .json(request)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn register(&self, request: &RegisterRequest) -> ClientResult<LoginResponse> {
        let response = self
            .client
            .post(self.url("auth/users/register/"))
            .json(request)
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn current_user(&self, token: &str) -> ClientResult<Identity> {
        let response = self
            .client
            .get(self.url("auth/users/me/"))
            .header(reqwest::header::AUTHORIZATION, Self::auth_header(token))
            .send()
            .await?;
        Self::handle_response(response).await
    }

    async fn update_current_user(
        &self,
        token: &str,
        update: &IdentityUpdate,
    ) -> ClientResult<Identity> {
        let response = self
            .client
            .patch(self.url("auth/users/me/"))
            .header(reqwest::header::AUTHORIZATION, Self::auth_header(token))
            .json(update)
            .send()
            .await?;
        Self::handle_response(response).await
    }
}
