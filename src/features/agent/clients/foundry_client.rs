use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::config::FoundryConfig;
use crate::core::error::{AppError, Result};

/// Agent definition returned by the agent service
#[derive(Debug, Clone, Deserialize)]
pub struct AgentInfo {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Conversation thread returned by the agent service
#[derive(Debug, Clone, Deserialize)]
pub struct AgentThread {
    pub id: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Author of a thread message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Assistant,
    #[serde(other)]
    Unknown,
}

impl MessageRole {
    pub fn as_str(self) -> &'static str {
        match self {
            MessageRole::User => "user",
            MessageRole::Assistant => "assistant",
            MessageRole::Unknown => "unknown",
        }
    }
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content item of a thread message. Only text items carry a reply;
/// anything else (images, files, future item kinds) is ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MessageContent {
    Text { text: TextContent },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextContent {
    pub value: String,
}

/// Message on a conversation thread
#[derive(Debug, Clone, Deserialize)]
pub struct ThreadMessage {
    pub id: String,
    pub role: MessageRole,
    #[serde(default)]
    pub content: Vec<MessageContent>,
}

/// One page of a thread's message listing
#[derive(Debug, Clone, Deserialize)]
struct MessageList {
    #[serde(default)]
    data: Vec<ThreadMessage>,
    #[serde(default)]
    has_more: bool,
    #[serde(default)]
    last_id: Option<String>,
}

/// Status of an agent run. Anything other than `Queued` or `InProgress` is
/// terminal, including statuses this client does not know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Queued,
    InProgress,
    RequiresAction,
    Cancelling,
    Cancelled,
    Failed,
    Completed,
    Expired,
    #[serde(other)]
    Unknown,
}

impl RunStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunStatus::Queued | RunStatus::InProgress)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunStatus::Queued => "queued",
            RunStatus::InProgress => "in_progress",
            RunStatus::RequiresAction => "requires_action",
            RunStatus::Cancelling => "cancelling",
            RunStatus::Cancelled => "cancelled",
            RunStatus::Failed => "failed",
            RunStatus::Completed => "completed",
            RunStatus::Expired => "expired",
            RunStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Agent run on a thread
#[derive(Debug, Clone, Deserialize)]
pub struct Run {
    pub id: String,
    pub status: RunStatus,
    #[serde(default)]
    pub last_error: Option<RunError>,
}

/// Failure detail attached to a run by the agent service
#[derive(Debug, Clone, Deserialize)]
pub struct RunError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
struct CreateMessageRequest<'a> {
    role: MessageRole,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct CreateRunRequest<'a> {
    assistant_id: &'a str,
}

/// Client for the hosted agent service REST API
pub struct FoundryClient {
    http_client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl FoundryClient {
    const MESSAGE_PAGE_SIZE: u32 = 100; // the largest page the service allows

    pub fn new(config: &FoundryConfig) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetch an agent definition, verifying the id exists before running it
    pub async fn get_agent(&self, agent_id: &str) -> Result<AgentInfo> {
        let url = format!(
            "{}/assistants/{}",
            self.base_url,
            urlencoding::encode(agent_id)
        );

        tracing::debug!("Fetching agent definition: {}", agent_id);

        self.execute(self.http_client.get(&url), "get agent").await
    }

    /// Create an empty conversation thread
    pub async fn create_thread(&self) -> Result<AgentThread> {
        let url = format!("{}/threads", self.base_url);

        tracing::debug!("Creating agent thread");

        self.execute(
            self.http_client.post(&url).json(&serde_json::json!({})),
            "create thread",
        )
        .await
    }

    /// Append a message to a thread
    pub async fn create_message(
        &self,
        thread_id: &str,
        role: MessageRole,
        content: &str,
    ) -> Result<ThreadMessage> {
        let url = format!(
            "{}/threads/{}/messages",
            self.base_url,
            urlencoding::encode(thread_id)
        );
        let request_body = CreateMessageRequest { role, content };

        tracing::debug!("Posting {} message to thread {}", role, thread_id);

        self.execute(
            self.http_client.post(&url).json(&request_body),
            "create message",
        )
        .await
    }

    /// Start a run of the given agent on a thread
    pub async fn create_run(&self, thread_id: &str, agent_id: &str) -> Result<Run> {
        let url = format!(
            "{}/threads/{}/runs",
            self.base_url,
            urlencoding::encode(thread_id)
        );
        let request_body = CreateRunRequest {
            assistant_id: agent_id,
        };

        tracing::debug!("Starting run of agent {} on thread {}", agent_id, thread_id);

        self.execute(
            self.http_client.post(&url).json(&request_body),
            "create run",
        )
        .await
    }

    /// Fetch the current state of a run
    pub async fn get_run(&self, thread_id: &str, run_id: &str) -> Result<Run> {
        let url = format!(
            "{}/threads/{}/runs/{}",
            self.base_url,
            urlencoding::encode(thread_id),
            urlencoding::encode(run_id)
        );

        self.execute(self.http_client.get(&url), "get run").await
    }

    /// List every message on a thread, oldest first, following the
    /// service's pagination cursors until the listing is exhausted
    pub async fn list_messages(&self, thread_id: &str) -> Result<Vec<ThreadMessage>> {
        let mut messages = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let mut url = format!(
                "{}/threads/{}/messages?order=asc&limit={}",
                self.base_url,
                urlencoding::encode(thread_id),
                Self::MESSAGE_PAGE_SIZE
            );
            if let Some(cursor) = &after {
                url.push_str(&format!("&after={}", urlencoding::encode(cursor)));
            }

            tracing::debug!(
                "Listing messages on thread {} (after: {:?})",
                thread_id,
                after
            );

            let page: MessageList = self
                .execute(self.http_client.get(&url), "list messages")
                .await?;
            messages.extend(page.data);

            // has_more without a cursor cannot be followed; treat it as the end
            if !page.has_more || page.last_id.is_none() {
                break;
            }
            after = page.last_id;
        }

        Ok(messages)
    }

    async fn execute<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        operation: &'static str,
    ) -> Result<T> {
        let request = if self.api_key.is_empty() {
            request
        } else {
            request.bearer_auth(&self.api_key)
        };

        let response = request.send().await.map_err(|e| {
            tracing::error!("Agent service unreachable during {}: {}", operation, e);
            AppError::AgentService(format!("{} failed: {}", operation, e))
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                "Agent service rejected {}: HTTP {} - {}",
                operation,
                status,
                body
            );
            return Err(AppError::AgentService(format!(
                "{} failed with HTTP {}",
                operation, status
            )));
        }

        response.json::<T>().await.map_err(|e| {
            tracing::error!("Malformed agent service response for {}: {}", operation, e);
            AppError::AgentService(format!("{} returned a malformed body: {}", operation, e))
        })
    }
}
