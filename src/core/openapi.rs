use utoipa::{Modify, OpenApi};

use crate::features::agent::{dtos as agent_dtos, handlers as agent_handlers};
use crate::features::programmers::{dtos as programmers_dtos, handlers as programmers_handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Agent relay
        agent_handlers::invoke_handler::invoke_agent,
        agent_handlers::thread_handler::create_thread,
        // Programmers
        programmers_handlers::programmer_handler::get_best_programmer,
    ),
    components(
        schemas(
            agent_dtos::InvokeAgentDto,
            agent_dtos::InvokeAgentResponseDto,
            agent_dtos::CreateThreadResponseDto,
            programmers_dtos::BestProgrammerDto,
        )
    ),
    tags(
        (name = "agent", description = "Agent invocation and thread management"),
        (name = "programmers", description = "Static demo endpoint"),
    ),
    info(
        title = "Foundry Relay API",
        version = "0.1.0",
        description = "HTTP relay for a hosted conversational agent",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
