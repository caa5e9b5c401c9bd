pub mod config;
pub mod http;
pub mod in_memory;
