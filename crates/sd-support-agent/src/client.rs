//! HTTP client for the database agent.

use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

use sd_protocol::{ActionRequest, ActionResponse, AgentCard};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request to database agent failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("database agent returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("unexpected response from database agent: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

pub struct DbAgentClient {
    http: reqwest::Client,
    base_url: String,
}

impl DbAgentClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET /.well-known/agent.json
    pub async fn agent_card(&self) -> ClientResult<AgentCard> {
        let response = self
            .http
            .get(format!("{}/.well-known/agent.json", self.base_url))
            .send()
            .await?;
        decode(response).await
    }

    /// POST /api/v1/actions
    pub async fn send(&self, request: &ActionRequest) -> ClientResult<ActionResponse> {
        tracing::debug!(action = %request.action, "sending action");
        let response = self
            .http
            .post(format!("{}/api/v1/actions", self.base_url))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        // Error bodies are `{"error": …, "status": …}` when they come from the agent.
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v["error"].as_str().map(str::to_string))
            .unwrap_or(body);
        return Err(ClientError::Status {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
