mod foundry_client;

pub use foundry_client::{FoundryClient, MessageContent, MessageRole, Run, ThreadMessage};

#[cfg(test)]
pub use foundry_client::TextContent;
