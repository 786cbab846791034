pub mod api;
pub mod store;
pub mod telemetry;
pub mod user;

use axum::extract::MatchedPath;
use axum::http::Request;
use axum::routing::get;
use axum::Router;
use skillet_core::llm::LlmProvider;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::Span;
use utoipa_swagger_ui::SwaggerUi;

use store::RecipeStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Recipe store. Handlers only ever see the trait object, so the
    /// in-memory implementation can be swapped for a database-backed one.
    pub store: Arc<dyn RecipeStore>,
    /// Text-generation provider, if one is configured. `None` means every
    /// AI-dependent path runs its deterministic fallback.
    pub llm: Option<Arc<dyn LlmProvider>>,
}

impl AppState {
    /// Borrow the provider as the trait object the core pipeline expects.
    pub fn provider(&self) -> Option<&dyn LlmProvider> {
        self.llm.as_deref()
    }
}

/// Build the application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let swagger_ui = SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api::openapi());

    Router::new()
        .route("/api/ping", get(api::ping::ping))
        .nest("/api/recipes", api::recipes::router())
        .nest("/api/meal-planner", api::meal_planner::router())
        .merge(swagger_ui)
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<_>| {
                    let matched_path = request
                        .extensions()
                        .get::<MatchedPath>()
                        .map(MatchedPath::as_str)
                        .unwrap_or(request.uri().path());

                    // Don't create a span at all for noisy endpoints
                    if matched_path == "/api/ping" {
                        tracing::trace_span!("http_request")
                    } else {
                        tracing::info_span!(
                            "http_request",
                            method = %request.method(),
                            path = %matched_path,
                        )
                    }
                })
                .on_request(|_request: &Request<_>, _span: &Span| {})
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        // Skip logging for noisy endpoints (trace-level spans)
                        if span.metadata().map(|m| m.level()) == Some(&tracing::Level::TRACE) {
                            return;
                        }
                        let status = response.status().as_u16();
                        if status >= 500 {
                            tracing::error!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request failed with server error"
                            );
                        } else {
                            tracing::info!(
                                status = %status,
                                latency_ms = %latency.as_millis(),
                                "request completed"
                            );
                        }
                    },
                )
                .on_failure(
                    |error: tower_http::classify::ServerErrorsFailureClass,
                     latency: std::time::Duration,
                     _span: &Span| {
                        tracing::error!(
                            error = %error,
                            latency_ms = %latency.as_millis(),
                            "request failed"
                        );
                    },
                ),
        )
}
