pub mod agent;
pub mod programmers;
