use anyhow::Result;
use clap::Parser;
use oddsproxy::apis::football::ApiFootballClient;
use oddsproxy::config::Settings;
use oddsproxy::webserver::{self, state::AppState};
use std::sync::Arc;

/// Read-through caching proxy for the API-Football sports data API
#[derive(Debug, Parser)]
#[command(name = "oddsproxy", version)]
struct Args {
    /// Bind host (overrides the HOST environment variable)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides the PORT environment variable)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let mut settings = Settings::from_env()?;
    if let Some(host) = args.host {
        settings.host = host;
    }
    if let Some(port) = args.port {
        settings.port = port;
    }

    let api = Arc::new(ApiFootballClient::new(&settings)?);
    let state = Arc::new(AppState::new(settings, api));

    // Ctrl-C triggers the same graceful shutdown path as a programmatic stop
    tokio::spawn(async {
        if tokio::signal::ctrl_c().await.is_ok() {
            webserver::shutdown();
        }
    });

    webserver::start_server(state).await
}
