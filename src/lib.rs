pub mod apis;
pub mod cache;
pub mod config;
pub mod errors;
pub mod transform;
pub mod types;
pub mod webserver;
