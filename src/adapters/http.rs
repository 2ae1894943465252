use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{any, get},
    Json, Router,
};
use error_stack::Report;
use serde::Serialize;
use tracing::error;

use crate::application::row_appender::{RowAppendError, RowAppender};

pub const SUCCESS_MESSAGE: &str = "Data appended to the sheet successfully.";

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

#[derive(Serialize)]
struct AppendSuccess {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct AppendFailure {
    error: String,
}

/// Every failure becomes a 500 carrying only the top-level message; the full report goes
/// to the log.
pub struct AppendErrorResponse(Report<RowAppendError>);

impl From<Report<RowAppendError>> for AppendErrorResponse {
    fn from(report: Report<RowAppendError>) -> Self {
        AppendErrorResponse(report)
    }
}

impl IntoResponse for AppendErrorResponse {
    fn into_response(self) -> Response {
        error!("❌ Append failed: {:?}", self.0);
        let body = AppendFailure {
            error: self.0.current_context().to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

async fn append_row(
    State(row_appender): State<Arc<RowAppender>>,
    body: Bytes,
) -> Result<Json<AppendSuccess>, AppendErrorResponse> {
    row_appender.append(&body).await?;

    Ok(Json(AppendSuccess {
        status: "success",
        message: SUCCESS_MESSAGE,
    }))
}

/// Builds the webhook router. The append endpoint accepts any method on `/` and bodies of
/// any size, so oversized payloads still get the JSON error contract.
pub fn build_router(row_appender: Arc<RowAppender>) -> Router {
    Router::new()
        .route("/", any(append_row).layer(DefaultBodyLimit::disable()))
        .route("/health", get(health))
        .with_state(row_appender)
}
