use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request DTO for invoking an agent on an existing thread.
///
/// Every field is optional at the parsing layer so that a malformed or empty
/// body still produces a value; which fields are actually required is decided
/// in the handler.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InvokeAgentDto {
    /// Agent to run. Falls back to the configured default agent.
    pub agent: Option<String>,

    /// The user's message. Falls back to a canned prompt.
    pub message: Option<String>,

    /// Thread to continue. Required; threads are minted via `GET /thread`.
    pub thread_id: Option<String>,
}

impl InvokeAgentDto {
    pub fn agent(&self) -> Option<&str> {
        trimmed(&self.agent)
    }

    pub fn message(&self) -> Option<&str> {
        trimmed(&self.message)
    }

    pub fn thread_id(&self) -> Option<&str> {
        trimmed(&self.thread_id)
    }
}

/// Whitespace-only strings count as absent
fn trimmed(field: &Option<String>) -> Option<&str> {
    field
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Response DTO carrying the assistant's reply
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct InvokeAgentResponseDto {
    /// The assistant's reply text
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_field_names() {
        let dto: InvokeAgentDto =
            serde_json::from_str(r#"{"threadId": "thread-1", "message": "hi", "agent": "a-1"}"#)
                .unwrap();

        assert_eq!(dto.thread_id(), Some("thread-1"));
        assert_eq!(dto.message(), Some("hi"));
        assert_eq!(dto.agent(), Some("a-1"));
    }

    #[test]
    fn missing_fields_default_to_none() {
        let dto: InvokeAgentDto = serde_json::from_str("{}").unwrap();

        assert_eq!(dto.agent(), None);
        assert_eq!(dto.message(), None);
        assert_eq!(dto.thread_id(), None);
    }

    #[test]
    fn whitespace_only_values_count_as_absent() {
        let dto: InvokeAgentDto =
            serde_json::from_str(r#"{"threadId": "   ", "message": "  hi  "}"#).unwrap();

        assert_eq!(dto.thread_id(), None);
        assert_eq!(dto.message(), Some("hi"));
    }
}
