//! Agent relay feature.
//!
//! Fronts a hosted conversational-agent service: callers mint a thread,
//! then post messages to it and get the assistant's reply back once the
//! agent run has finished. All conversation state lives on the remote
//! service; this process holds nothing between requests.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/agent` | Run a message through the agent, wait for the reply |
//! | GET | `/thread` | Create a new conversation thread |

pub mod clients;
pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;
