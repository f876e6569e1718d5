/// Upstream API clients
pub mod client;
pub mod football;

#[cfg(test)]
pub mod mock;

pub use client::HttpClient;
pub use football::{ApiFootballClient, FootballApi};
