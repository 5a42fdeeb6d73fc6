//! Application errors and their JSON responses.
//!
//! Two kinds exist: validation failures (400, per-field detail, recovered
//! before any persistence attempt) and store failures (500, generic message).
//! Store error detail reaches the client only in development mode; it is
//! logged server-side in every mode.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::config::{AppConfig, MSG_STORE_FAILURE, MSG_VALIDATION_FAILED};
use crate::store::StoreError;

/// Message for a missing or empty `title`
pub const TITLE_REQUIRED: &str = "title is required";

/// Message for a missing or empty `content`
pub const CONTENT_REQUIRED: &str = "content is required";

/// Per-field validation messages. Fields left `None` are omitted from the
/// JSON entirely, so clients see exactly the keys that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'static str>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("validation failed")]
    Validation(ValidationErrors),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// An [`AppError`] paired with the decision whether to echo error detail,
/// taken from configuration at the call site. Handlers return
/// `Result<_, AppErrorResponse>` and convert with [`ResultExt::with_error_mode`].
#[derive(Debug)]
pub struct AppErrorResponse {
    error: AppError,
    expose_detail: bool,
}

#[derive(Serialize)]
struct ValidationBody {
    message: &'static str,
    errors: ValidationErrors,
}

#[derive(Serialize)]
struct StoreFailureBody {
    message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for AppErrorResponse {
    fn into_response(self) -> Response {
        match self.error {
            AppError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationBody {
                    message: MSG_VALIDATION_FAILED,
                    errors,
                }),
            )
                .into_response(),
            AppError::Store(err) => {
                tracing::error!(error = %err, "Assignment insert failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(StoreFailureBody {
                        message: MSG_STORE_FAILURE,
                        error: self.expose_detail.then(|| err.to_string()),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Attach the configured error mode to a fallible result.
pub trait ResultExt<T> {
    fn with_error_mode(self, config: &AppConfig) -> Result<T, AppErrorResponse>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<AppError>,
{
    fn with_error_mode(self, config: &AppConfig) -> Result<T, AppErrorResponse> {
        self.map_err(|e| AppErrorResponse {
            error: e.into(),
            expose_detail: config.environment.exposes_error_detail(),
        })
    }
}
