//! HTTP routing for the ingestion endpoint.
//!
//! One real route: `POST /api/debug/client-logs`. `OPTIONS` anywhere is
//! answered 200 for CORS preflight; every other method/path combination
//! is a 404. All responses carry the permissive CORS header trio so the
//! browser page can post from any dev origin.

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Request, State};
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::post;

use browserlog_protocol::constants::{INGEST_PATH, MAX_BODY_SIZE};
use browserlog_protocol::{ErrorResponse, IngestResponse, LogBatch};

use crate::format;
use crate::sink::LogSink;

/// Shared state for the ingestion handlers.
#[derive(Clone)]
struct AppState {
    sink: Arc<LogSink>,
}

/// Builds the ingestion router around a log file sink.
pub fn router(sink: Arc<LogSink>) -> Router {
    let state = AppState { sink };
    Router::new()
        .route(INGEST_PATH, post(ingest))
        .fallback(fallback)
        .method_not_allowed_fallback(fallback)
        .layer(middleware::from_fn(cors_headers))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state)
}

/// Handles a log batch: format, append, mirror, in record order.
async fn ingest(State(state): State<AppState>, body: Bytes) -> Response {
    let batch: LogBatch = match serde_json::from_slice(&body) {
        Ok(batch) => batch,
        Err(e) => {
            tracing::error!("invalid client log payload: {e}");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "Invalid JSON".into(),
                }),
            )
                .into_response();
        }
    };

    for record in &batch.logs {
        let line = format::format_record(record);
        // One append per record so a crash mid-batch still leaves a
        // durable prefix. Append failure must not break the client.
        if let Err(e) = state.sink.append_line(&line) {
            tracing::warn!(
                path = %state.sink.path().display(),
                "failed to append log line: {e}"
            );
        }
        println!("{line}");
    }

    (StatusCode::OK, Json(IngestResponse { success: true })).into_response()
}

/// Catch-all: 200 for preflight, 404 for everything else.
///
/// 404s are expected traffic (probes, misconfigured paths) and are not
/// logged.
async fn fallback(method: Method) -> Response {
    if method == Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: "Not found".into(),
        }),
    )
        .into_response()
}

/// Stamps the CORS trio onto every response, errors included.
async fn cors_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}
