//! Sorting routes: `POST /generate` and `POST /sort`.

#[cfg(test)]
#[path = "sort_test.rs"]
mod tests;

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use tracing::{error, warn};

use crate::api::{ErrorBody, GenerateResponse, SortRequest};
use crate::services::dispatch::{self, DispatchError, Run};
use crate::services::generate;
use crate::sort::SortError;
use crate::state::AppState;

/// Error response rendered as `{ "error": message }`.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl From<DispatchError> for ApiError {
    fn from(err: DispatchError) -> Self {
        let status = dispatch_error_to_status(&err);
        if status.is_server_error() {
            error!(error = %err, "sort failed");
        } else {
            warn!(error = %err, "sort rejected");
        }
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { error: self.message })).into_response()
    }
}

pub(crate) fn dispatch_error_to_status(err: &DispatchError) -> StatusCode {
    match err {
        DispatchError::MissingParameters
        | DispatchError::UnknownAlgorithm(_)
        | DispatchError::Sort(SortError::RangeTooLarge { .. }) => StatusCode::BAD_REQUEST,
        DispatchError::Sort(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `POST /generate`: a fresh random array.
pub async fn generate(State(state): State<AppState>) -> Json<GenerateResponse> {
    Json(GenerateResponse { array: generate::random_array(&state.config.generate) })
}

/// `POST /sort`: run one algorithm and return its step trace.
///
/// Sorting runs on the blocking pool so a panicking sorter becomes a 500
/// instead of taking the connection down.
pub async fn sort(payload: Result<Json<SortRequest>, JsonRejection>) -> Result<Json<Run>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "malformed sort body");
        ApiError::new(StatusCode::BAD_REQUEST, rejection.body_text())
    })?;

    let result = tokio::task::spawn_blocking(move || {
        dispatch::dispatch(request.algorithm.as_deref(), request.array.as_deref())
    })
    .await
    .map_err(|e| {
        error!(error = %e, "sort task aborted");
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(result?))
}
