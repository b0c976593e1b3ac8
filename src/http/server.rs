//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, CORS, timeout, panic capture)
//! - Render timeouts and panics as the JSON error envelope
//! - Apply the upload body limit to the file route
//! - Bind server to listener and stop on the shutdown signal

use std::any::Any;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    error_handling::HandleErrorLayer,
    extract::DefaultBodyLimit,
    http::Request,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    BoxError, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::http::handlers;
use crate::http::request::{propagate_request_id_layer, request_id_of, set_request_id_layer};
use crate::lifecycle::shutdown::wait_for;
use crate::observability::metrics;
use crate::upload::UploadFilter;

/// Allowance for multipart boundaries and part headers on top of the file cap.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub upload_filter: Arc<UploadFilter>,
}

impl AppState {
    pub fn new(config: &ServiceConfig) -> Self {
        Self {
            upload_filter: Arc::new(UploadFilter::from_config(&config.uploads)),
        }
    }
}

/// HTTP server for the uppercase service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: ServiceConfig) -> Self {
        let router = Self::build_router(&config);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    pub fn build_router(config: &ServiceConfig) -> Router {
        let state = AppState::new(config);
        let upload_limit = config.uploads.max_file_size.saturating_add(MULTIPART_OVERHEAD);
        let timeout_secs = config.timeouts.request_secs;

        Router::new()
            .route("/", get(handlers::info))
            .route("/health", get(handlers::health))
            .route("/api/uppercase", post(handlers::uppercase_text))
            .route(
                "/api/uppercase-file",
                post(handlers::uppercase_file).layer(DefaultBodyLimit::max(upload_limit)),
            )
            .route_layer(middleware::from_fn(metrics::track_requests))
            .fallback(handlers::not_found)
            .method_not_allowed_fallback(handlers::not_found)
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(move |err: BoxError| async move {
                        middleware_error(err, timeout_secs)
                    }))
                    .timeout(Duration::from_secs(timeout_secs)),
            )
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(cors_layer())
            .layer(propagate_request_id_layer())
            .layer(TraceLayer::new_for_http().make_span_with(request_span))
            .layer(set_request_id_layer())
    }

    /// A clone of the router, for driving the service without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` fires.
    ///
    /// In-flight requests are allowed to finish.
    pub async fn run(self, listener: TcpListener, shutdown: broadcast::Receiver<()>) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            max_file_size = self.config.uploads.max_file_size,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(wait_for(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin)
}

/// Map an error from the tower middleware stack into the envelope.
fn middleware_error(err: BoxError, timeout_secs: u64) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout { secs: timeout_secs }
    } else {
        AppError::Internal(err.to_string())
    }
}

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    AppError::from_panic(payload).into_response()
}

fn request_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id_of(request),
    )
}
