mod invoke_dto;
mod thread_dto;

pub use invoke_dto::{InvokeAgentDto, InvokeAgentResponseDto};
pub use thread_dto::CreateThreadResponseDto;
