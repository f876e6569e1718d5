/// Axum webserver implementation
///
/// Server lifecycle: bind, serve with graceful shutdown, and run the
/// periodic cache sweep alongside the request loop.
use axum::http::{header, Method};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::{Any, CorsLayer};

use crate::webserver::{routes, state::AppState};

/// Global shutdown notifier
static SHUTDOWN_NOTIFY: once_cell::sync::Lazy<Arc<Notify>> =
    once_cell::sync::Lazy::new(|| Arc::new(Notify::new()));

/// Start the webserver
///
/// This function blocks until the server is shut down.
pub async fn start_server(state: Arc<AppState>) -> anyhow::Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.settings.host, state.settings.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid bind address: {}", e))?;

    let sweep = tokio::spawn(run_cache_sweep(
        Arc::clone(&state),
        Duration::from_secs(state.settings.sweep_interval_secs),
    ));

    let app = build_app(state);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", addr, e))?;

    log::info!("Proxy server running on http://{}", addr);
    log::info!("Health check: http://{}/health", addr);

    let shutdown_signal = async {
        SHUTDOWN_NOTIFY.notified().await;
        log::info!("Received shutdown signal, stopping webserver...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    sweep.abort();
    log::info!("Webserver stopped gracefully");

    Ok(())
}

/// Trigger webserver shutdown
pub fn shutdown() {
    SHUTDOWN_NOTIFY.notify_one();
}

/// Build the Axum application with all routes and middleware
fn build_app(state: Arc<AppState>) -> Router {
    // Permissive CORS: the proxy is consumed cross-origin by the website
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    routes::create_router(state).layer(cors)
}

/// Periodically evict expired entries from both caches
///
/// Reads already treat expired entries as misses; the sweep only reclaims
/// memory for keys nobody asks about anymore.
async fn run_cache_sweep(state: Arc<AppState>, interval: Duration) {
    let mut ticker = tokio::time::interval(interval);
    // First tick fires immediately; skip it
    ticker.tick().await;

    loop {
        ticker.tick().await;

        let odds_purged = state.odds_cache.purge_expired();
        let live_purged = state.live_cache.purge_expired();
        let odds_metrics = state.odds_cache.metrics();
        let live_metrics = state.live_cache.metrics();

        log::debug!(
            "Cache sweep: purged {} odds / {} live entries (hit rates {:.2} / {:.2})",
            odds_purged,
            live_purged,
            odds_metrics.hit_rate(),
            live_metrics.hit_rate(),
        );
    }
}
