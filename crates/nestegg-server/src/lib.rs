//! Nestegg Web Server
//!
//! Axum-based wizard for the nestegg budgeting flow: collect income, collect
//! itemized expenses, then show a categorized summary with a chart and
//! recommendations. State lives in an in-memory session store keyed by a
//! per-visitor cookie; nothing survives a restart.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use nestegg_core::chart::{BarChartRenderer, ChartRenderer};

mod handlers;
mod sessions;

pub use sessions::{SessionManager, SESSION_COOKIE};

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// How long a session may sit idle before it expires
    pub session_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            session_ttl: sessions::DEFAULT_SESSION_TTL,
        }
    }
}

/// Shared application state
pub struct AppState {
    pub sessions: SessionManager,
    /// Injected chart capability; tests swap in a stub renderer
    pub chart: Box<dyn ChartRenderer>,
}

/// Create the application router with the default chart renderer
pub fn create_router(config: ServerConfig) -> Router {
    create_router_with_renderer(config, Box::new(BarChartRenderer::default()))
}

/// Create the application router with an explicit chart renderer (for testing)
pub fn create_router_with_renderer(
    config: ServerConfig,
    chart: Box<dyn ChartRenderer>,
) -> Router {
    let state = Arc::new(AppState {
        sessions: SessionManager::with_ttl(config.session_ttl),
        chart,
    });

    Router::new()
        // Step 1: income intake
        .route(
            "/",
            get(handlers::income_form).post(handlers::submit_income),
        )
        // Step 2: expense intake
        .route(
            "/expenses",
            get(handlers::expenses_form).post(handlers::submit_expenses),
        )
        // Step 3: derived views
        .route("/results", get(handlers::results))
        .route("/recommendations", get(handlers::recommendations))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Start the server
pub async fn serve(host: &str, port: u16, config: ServerConfig) -> anyhow::Result<()> {
    let app = create_router(config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    pub fn bad_request(msg: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: msg.to_string(),
            internal: None,
        }
    }

    /// Map core errors onto HTTP statuses: invalid user input is surfaced
    /// at the originating step as a 400, everything else is a 500.
    pub fn from_core(err: nestegg_core::Error) -> Self {
        match err {
            nestegg_core::Error::InvalidInput(msg) => Self::bad_request(&msg),
            other => Self {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "An internal error occurred".to_string(),
                internal: Some(other.into()),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: "An internal error occurred".to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}
