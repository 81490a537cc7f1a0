use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

use crate::core::config::FoundryConfig;
use crate::core::error::{AppError, Result};
use crate::features::agent::clients::{
    FoundryClient, MessageContent, MessageRole, Run, ThreadMessage,
};
use crate::shared::constants::NO_ASSISTANT_REPLY;

/// Runs a user message through an agent and waits for the reply.
///
/// One invocation is: verify the agent exists, append the user message to
/// the thread, start a run, poll the run until it reaches a terminal status,
/// then read the newest assistant text off the thread. Threads are owned by
/// the agent service; this service only ever holds their ids.
pub struct AgentInvocationService {
    client: Arc<FoundryClient>,
    default_agent_id: Option<String>,
    poll_interval: Duration,
    poll_timeout: Duration,
}

impl AgentInvocationService {
    pub fn new(client: Arc<FoundryClient>, config: &FoundryConfig) -> Self {
        Self {
            client,
            default_agent_id: config.default_agent_id.clone(),
            poll_interval: config.poll_interval,
            poll_timeout: config.poll_timeout,
        }
    }

    /// Create a fresh conversation thread and return its id
    pub async fn open_thread(&self) -> Result<String> {
        let thread = self.client.create_thread().await?;

        tracing::info!(
            "Thread created: {} (created_at: {:?})",
            thread.id,
            thread.created_at
        );

        Ok(thread.id)
    }

    /// Send `message` to an agent on an existing thread and return the
    /// assistant's reply text
    pub async fn invoke(
        &self,
        thread_id: &str,
        agent_override: Option<&str>,
        message: &str,
    ) -> Result<String> {
        let agent_id = self.resolve_agent_id(agent_override);

        let agent = self.client.get_agent(&agent_id).await?;
        tracing::debug!(
            "Agent resolved: {} ({})",
            agent.id,
            agent.name.as_deref().unwrap_or("unnamed")
        );

        let posted = self
            .client
            .create_message(thread_id, MessageRole::User, message)
            .await?;
        tracing::debug!("User message posted: {}", posted.id);

        let run = self.client.create_run(thread_id, &agent.id).await?;
        tracing::debug!("Run created: {} (status: {})", run.id, run.status);

        let run = self.wait_for_terminal(thread_id, run).await?;
        match &run.last_error {
            Some(error) => tracing::warn!(
                "Run {} finished with status {} ({}: {})",
                run.id,
                run.status,
                error.code,
                error.message
            ),
            None => tracing::info!("Run {} finished with status {}", run.id, run.status),
        }

        // Messages are listed even after a failed run: an assistant may have
        // produced partial output before the failure.
        let messages = self.client.list_messages(thread_id).await?;

        match latest_assistant_reply(&messages) {
            Some(reply) => Ok(reply),
            None => {
                tracing::info!("No assistant reply on thread {}", thread_id);
                Ok(NO_ASSISTANT_REPLY.to_string())
            }
        }
    }

    fn resolve_agent_id(&self, agent_override: Option<&str>) -> String {
        match agent_override {
            Some(id) => {
                tracing::debug!("Using agent id from request: {}", id);
                id.to_string()
            }
            // An unset default is passed through as an empty id and rejected
            // by the agent service, mirroring the other credential failures.
            None => self.default_agent_id.clone().unwrap_or_default(),
        }
    }

    /// Poll the run on a fixed interval until it reaches a terminal status
    /// or the wall-clock budget runs out
    async fn wait_for_terminal(&self, thread_id: &str, mut run: Run) -> Result<Run> {
        let deadline = Instant::now() + self.poll_timeout;

        while !run.status.is_terminal() {
            if Instant::now() >= deadline {
                tracing::warn!(
                    "Run {} still {} after {:?}, giving up",
                    run.id,
                    run.status,
                    self.poll_timeout
                );
                return Err(AppError::PollTimeout(self.poll_timeout));
            }

            tracing::debug!("Run {} is {}, waiting", run.id, run.status);
            tokio::time::sleep(self.poll_interval).await;
            run = self.client.get_run(thread_id, &run.id).await?;
        }

        Ok(run)
    }
}

/// Pick the reply out of a thread listed in ascending order: the newest
/// assistant message that carries text wins, with multiple text items of
/// that message joined by a blank line. Blank text items are skipped.
fn latest_assistant_reply(messages: &[ThreadMessage]) -> Option<String> {
    let mut reply = None;

    for message in messages {
        if message.role != MessageRole::Assistant {
            continue;
        }

        let text = message
            .content
            .iter()
            .filter_map(|item| match item {
                MessageContent::Text { text } => Some(text.value.as_str()),
                MessageContent::Unsupported => None,
            })
            .filter(|value| !value.trim().is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        if !text.is_empty() {
            reply = Some(text);
        }
    }

    reply
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::agent::clients::TextContent;

    fn text_message(role: MessageRole, values: &[&str]) -> ThreadMessage {
        ThreadMessage {
            id: "msg".to_string(),
            role,
            content: values
                .iter()
                .map(|value| MessageContent::Text {
                    text: TextContent {
                        value: value.to_string(),
                    },
                })
                .collect(),
        }
    }

    #[test]
    fn returns_none_for_empty_thread() {
        assert_eq!(latest_assistant_reply(&[]), None);
    }

    #[test]
    fn returns_none_when_only_user_messages() {
        let messages = vec![text_message(MessageRole::User, &["hello?"])];
        assert_eq!(latest_assistant_reply(&messages), None);
    }

    #[test]
    fn picks_the_newest_assistant_message() {
        let messages = vec![
            text_message(MessageRole::Assistant, &["first answer"]),
            text_message(MessageRole::User, &["another question"]),
            text_message(MessageRole::Assistant, &["second answer"]),
        ];
        assert_eq!(
            latest_assistant_reply(&messages).as_deref(),
            Some("second answer")
        );
    }

    #[test]
    fn joins_multiple_text_items_with_blank_line() {
        let messages = vec![text_message(MessageRole::Assistant, &["part one", "part two"])];
        assert_eq!(
            latest_assistant_reply(&messages).as_deref(),
            Some("part one\n\npart two")
        );
    }

    #[test]
    fn text_free_assistant_message_does_not_shadow_earlier_reply() {
        let messages = vec![
            text_message(MessageRole::Assistant, &["the joke"]),
            ThreadMessage {
                id: "msg".to_string(),
                role: MessageRole::Assistant,
                content: vec![MessageContent::Unsupported],
            },
        ];
        assert_eq!(latest_assistant_reply(&messages).as_deref(), Some("the joke"));
    }

    #[test]
    fn blank_text_items_do_not_shadow_earlier_reply() {
        let messages = vec![
            text_message(MessageRole::Assistant, &["the joke"]),
            text_message(MessageRole::Assistant, &["", "   "]),
        ];
        assert_eq!(latest_assistant_reply(&messages).as_deref(), Some("the joke"));
    }

    #[test]
    fn blank_text_items_are_dropped_from_the_join() {
        let messages = vec![text_message(MessageRole::Assistant, &["", "still here"])];
        assert_eq!(
            latest_assistant_reply(&messages).as_deref(),
            Some("still here")
        );
    }
}
