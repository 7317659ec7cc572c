//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with both routes
//! - Wire up middleware (tracing, timeout, request ID, CORS, credential
//!   guard, rate limiter)
//! - Bind the router to an externally created listener
//! - Serve with graceful shutdown (signals or programmatic trigger)

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::{header, Method},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServiceConfig;
use crate::http::explain::explain_word;
use crate::http::health::health_check;
use crate::http::middleware::require_api_key;
use crate::http::request::RequestIdLayer;
use crate::lifecycle::signals::shutdown_signal;
use crate::security::{rate_limit_middleware, RateLimiterState};
use crate::upstream::GenerativeClient;

/// Application state injected into handlers and middleware.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub upstream: Arc<GenerativeClient>,
    pub rate_limiter: Arc<RateLimiterState>,
}

/// HTTP server for the word proxy.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let upstream = Arc::new(GenerativeClient::new(&config.upstream));
        let rate_limiter = Arc::new(RateLimiterState::new(config.rate_limit.clone()));

        let state = AppState {
            config: Arc::new(config.clone()),
            upstream,
            rate_limiter,
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The guard and limiter apply to /api only; /health stays outside
    /// both. Ambient layers wrap every route.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let api = Router::new()
            .route("/api", post(explain_word))
            .route_layer(from_fn_with_state(
                state.rate_limiter.clone(),
                rate_limit_middleware,
            ))
            .route_layer(from_fn_with_state(state.clone(), require_api_key));

        Router::new()
            .merge(api)
            .route("/health", get(health_check))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods([Method::GET, Method::POST])
                    .allow_headers([header::CONTENT_TYPE]),
            )
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns once a termination signal arrives or `shutdown` fires,
    /// after in-flight requests have drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        let app = self
            .router
            .into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                tokio::select! {
                    _ = shutdown_signal() => {}
                    _ = shutdown.recv() => {
                        tracing::info!("Programmatic shutdown requested");
                    }
                }
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}
