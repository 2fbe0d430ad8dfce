use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use taskman_config::ClientConfig;
use taskman_core::{Board, NewTask, Task, TaskChanges, User};
use tracing::{debug, warn};

use crate::api::{
    BoardTitleRequest, CreatedId, DataEnvelope, ErrorBody, LoginRequest, RegisterRequest,
    TokenResponse,
};
use crate::auth::AuthContext;
use crate::error::{ClientError, ClientResult};

/// HTTP client for the TaskMan API.
///
/// Endpoints behind the API's JWT middleware take an [`AuthContext`], which
/// only a session holding a token hands out.
#[derive(Clone)]
pub struct ApiClient {
    http_client: Client,
    config: ClientConfig,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            config,
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Test connection to the API
    pub async fn health(&self) -> ClientResult<bool> {
        let response = self
            .http_client
            .get(self.config.endpoint("/health"))
            .send()
            .await?;

        Ok(response.status().is_success())
    }

    /// Exchange credentials for a bearer token
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<String> {
        let request = self
            .http_client
            .post(self.config.endpoint("/login"))
            .json(&LoginRequest { email, password });

        let body: TokenResponse = self.send_json(request).await?;
        if body.token.is_empty() {
            return Err(ClientError::invalid_response("Login returned an empty token"));
        }
        Ok(body.token)
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> ClientResult<()> {
        let request = self
            .http_client
            .post(self.config.endpoint("/register"))
            .json(&RegisterRequest {
                name,
                email,
                password,
            });

        self.send_empty(request).await
    }

    /// List the user's boards with their tasks
    pub async fn list_boards(&self, auth: &AuthContext) -> ClientResult<Vec<Board>> {
        let request = self.authed(auth, self.http_client.get(self.config.endpoint("/boards")));
        self.send_list(request).await
    }

    pub async fn create_board(&self, auth: &AuthContext, title: &str) -> ClientResult<u64> {
        let request = self.authed(
            auth,
            self.http_client
                .post(self.config.endpoint("/boards"))
                .json(&BoardTitleRequest { title }),
        );

        let body: DataEnvelope<CreatedId> = self.send_json(request).await?;
        Ok(body.data.id)
    }

    pub async fn update_board(
        &self,
        auth: &AuthContext,
        board_id: u64,
        title: &str,
    ) -> ClientResult<()> {
        let request = self.authed(
            auth,
            self.http_client
                .put(self.config.endpoint(&format!("/boards/{}", board_id)))
                .json(&BoardTitleRequest { title }),
        );
        self.send_empty(request).await
    }

    pub async fn delete_board(&self, auth: &AuthContext, board_id: u64) -> ClientResult<()> {
        let request = self.authed(
            auth,
            self.http_client
                .delete(self.config.endpoint(&format!("/boards/{}", board_id))),
        );
        self.send_empty(request).await
    }

    /// List tasks across all of the user's boards
    pub async fn list_tasks(&self, auth: &AuthContext) -> ClientResult<Vec<Task>> {
        let request = self.authed(auth, self.http_client.get(self.config.endpoint("/tasks")));
        self.send_list(request).await
    }

    pub async fn get_task(&self, auth: &AuthContext, task_id: u64) -> ClientResult<Task> {
        let request = self.authed(
            auth,
            self.http_client
                .get(self.config.endpoint(&format!("/tasks/{}", task_id))),
        );

        let body: DataEnvelope<Option<Task>> = self.send_json(request).await?;
        body.data
            .ok_or_else(|| ClientError::not_found(format!("Task {}", task_id)))
    }

    pub async fn create_task(&self, auth: &AuthContext, task: &NewTask) -> ClientResult<u64> {
        let request = self.authed(
            auth,
            self.http_client
                .post(self.config.endpoint("/tasks"))
                .json(task),
        );

        let body: DataEnvelope<CreatedId> = self.send_json(request).await?;
        Ok(body.data.id)
    }

    pub async fn update_task(
        &self,
        auth: &AuthContext,
        task_id: u64,
        changes: &TaskChanges,
    ) -> ClientResult<()> {
        let request = self.authed(
            auth,
            self.http_client
                .put(self.config.endpoint(&format!("/tasks/{}", task_id)))
                .json(changes),
        );
        self.send_empty(request).await
    }

    pub async fn delete_task(&self, auth: &AuthContext, task_id: u64) -> ClientResult<()> {
        let request = self.authed(
            auth,
            self.http_client
                .delete(self.config.endpoint(&format!("/tasks/{}", task_id))),
        );
        self.send_empty(request).await
    }

    pub async fn list_users(&self, auth: &AuthContext) -> ClientResult<Vec<User>> {
        let request = self.authed(auth, self.http_client.get(self.config.endpoint("/users")));
        self.send_list(request).await
    }

    fn authed(&self, auth: &AuthContext, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(auth.token())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Response did not match the expected shape: {}", e);
            ClientError::invalid_response(e.to_string())
        })
    }

    async fn send_list<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<Vec<T>> {
        let body: DataEnvelope<Option<Vec<T>>> = self.send_json(request).await?;
        if let Some(source) = &body.source {
            debug!("List served from {}", source);
        }
        Ok(body.data.unwrap_or_default())
    }

    async fn send_empty(&self, request: RequestBuilder) -> ClientResult<()> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> ClientResult<Response> {
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let response = self.http_client.execute(request).await.map_err(|e| {
            warn!("{} {} failed: {}", method, url, e);
            ClientError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = error_message(response).await;
        warn!("{} {} returned {}: {}", method, url, status, message);
        Err(match status {
            StatusCode::UNAUTHORIZED => ClientError::Unauthorized(message),
            StatusCode::NOT_FOUND => ClientError::NotFound(message),
            _ => ClientError::Api {
                status: status.as_u16(),
                message,
            },
        })
    }
}

/// The server's `error` text when the body carries one, else the status reason
async fn error_message(response: Response) -> String {
    let status = response.status();
    let fallback = status
        .canonical_reason()
        .unwrap_or("unexpected status")
        .to_string();

    match response.text().await {
        Ok(text) => match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) if !body.error.is_empty() => body.error,
            _ if !text.trim().is_empty() => text,
            _ => fallback,
        },
        Err(_) => fallback,
    }
}
