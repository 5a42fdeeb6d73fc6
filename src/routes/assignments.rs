//! Handler for creating assignments.
//!
//! One operation: validate the two required fields, resolve defaults and
//! timestamps, insert a single row through the store, and return it.

use axum::{extract::State, http::StatusCode, Json};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::MSG_ASSIGNMENT_CREATED;
use crate::error::{
    AppError, AppErrorResponse, ResultExt, ValidationErrors, CONTENT_REQUIRED, TITLE_REQUIRED,
};
use crate::model::{Assignment, NewAssignment};
use crate::state::AppState;

// TODO: replace with the authenticated caller's id once request
// authentication exists; identity resolution is an external dependency this
// service does not own.
const PLACEHOLDER_USER_ID: i32 = 1;

/// Status recorded when the client does not supply one
const DEFAULT_STATUS: &str = "draft";

/// Request body for `POST /assignments`. Every key is optional at the parse
/// level; the required ones are enforced by [`resolve`] so that both can be
/// reported missing in one response.
#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub length: Option<i32>,
    pub status: Option<String>,
}

/// Response body for a successful creation.
#[derive(Debug, Serialize)]
pub struct CreatedBody {
    pub message: &'static str,
    pub data: Assignment,
}

/// Resolve a request body into insertable column values.
///
/// Required fields are checked first — an empty string counts as missing.
/// On success, optionals are defaulted and all three timestamps are stamped
/// with the same instant.
fn resolve(input: CreateAssignment) -> Result<NewAssignment, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let title = input.title.filter(|t| !t.is_empty());
    if title.is_none() {
        errors.title = Some(TITLE_REQUIRED);
    }

    let content = input.content.filter(|c| !c.is_empty());
    if content.is_none() {
        errors.content = Some(CONTENT_REQUIRED);
    }

    let (Some(title), Some(content)) = (title, content) else {
        return Err(errors);
    };

    let now = Utc::now();
    Ok(NewAssignment {
        user_id: PLACEHOLDER_USER_ID,
        title,
        content,
        category: input.category,
        length: input.length,
        created_at: now,
        updated_at: now,
        published_at: now,
        status: input.status.unwrap_or_else(|| DEFAULT_STATUS.to_string()),
    })
}

/// Handler for `POST /assignments`.
///
/// Responds 201 with the persisted row, 400 with per-field detail when
/// required fields are missing, or 500 when the store fails. A failed insert
/// is surfaced immediately — there are no retries.
#[instrument(name = "assignments::create", skip(state, body))]
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateAssignment>,
) -> Result<(StatusCode, Json<CreatedBody>), AppErrorResponse> {
    let new = resolve(body)
        .map_err(AppError::Validation)
        .with_error_mode(&state.config)?;

    let data = state
        .store
        .insert(new)
        .await
        .with_error_mode(&state.config)?;

    tracing::info!(assignment_id = data.id, "Assignment created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedBody {
            message: MSG_ASSIGNMENT_CREATED,
            data,
        }),
    ))
}
