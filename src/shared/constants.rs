// =============================================================================
// AGENT INVOCATION CONSTANTS
// =============================================================================

/// Prompt sent to the agent when the request body carries no message
pub const DEFAULT_USER_MESSAGE: &str = "Please give me a funny joke.";

/// Reply returned when the run finishes without any assistant text
pub const NO_ASSISTANT_REPLY: &str = "No assistant response.";

// =============================================================================
// CLIENT-FACING ERROR MESSAGES
// =============================================================================

/// Returned for any upstream agent service fault; detail stays in the logs
pub const AGENT_SERVICE_ERROR: &str = "Agent service request failed";

/// Returned when a run does not reach a terminal status within the poll budget
pub const POLL_TIMEOUT_ERROR: &str = "Timed out waiting for the agent run to complete";
