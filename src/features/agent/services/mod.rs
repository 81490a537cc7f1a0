mod invocation_service;

pub use invocation_service::AgentInvocationService;
