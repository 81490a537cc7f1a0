pub mod invoke_handler;
pub mod thread_handler;
