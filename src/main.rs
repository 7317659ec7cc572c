//! Word explanation proxy.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 WORD PROXY                    │
//!                    │                                               │
//!   POST /api        │  ┌──────┐   ┌───────────┐   ┌────────────┐   │
//!   ─────────────────┼─▶│ cors │──▶│ credential│──▶│ rate limit │   │
//!                    │  │trace │   │   guard   │   │ (per IP)   │   │
//!                    │  └──────┘   └───────────┘   └─────┬──────┘   │
//!                    │                                    │          │
//!                    │                                    ▼          │
//!                    │                            ┌──────────────┐  │      Generative
//!   JSON body / ◀────┼────────────────────────────│   handler    │──┼────▶ language
//!   error envelope   │                            │ prompt+relay │  │      API
//!                    │                            └──────────────┘  │
//!                    │                                               │
//!                    │  GET /health ──▶ always 200 + timestamp       │
//!                    │                                               │
//!                    │  ┌─────────────────────────────────────────┐ │
//!                    │  │  config (env) · lifecycle (shutdown)    │ │
//!                    │  └─────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────┘
//! ```

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use word_proxy::config;
use word_proxy::http::HttpServer;
use word_proxy::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "word_proxy=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("word-proxy v0.1.0 starting");

    let config = config::load_from_env()?;

    if config.upstream.api_key.is_none() {
        tracing::warn!("API_KEY is not set; /api requests will be rejected until it is");
    }

    tracing::info!(
        bind_address = %config.listener.bind_address,
        model = %config.upstream.model,
        upstream_timeout_secs = config.upstream.timeout_secs,
        rate_limit_max = config.rate_limit.max_requests,
        rate_limit_window_secs = config.rate_limit.window_secs,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    // Create and run HTTP server
    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
