//! Classified caller errors and their HTTP response mapping.
//!
//! Every variant is a caller mistake; none are transient or retriable,
//! and none abort the process. The boundary maps each kind to a stable
//! status code and a `{"error", "message"}` JSON body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("User already exists")]
    UserAlreadyExists,

    /// Signup target is unknown OR not a student. The causes are
    /// deliberately collapsed so callers cannot probe which identifiers
    /// exist.
    #[error("Only students can sign up for activities (user not found or not a student)")]
    NotAStudent,

    /// Acting user is unknown OR not a teacher (staff included). Same
    /// collapse of causes as `NotAStudent`.
    #[error("Only teachers can unregister students from activities")]
    NotATeacher,

    #[error("Student is already signed up")]
    AlreadyEnrolled,

    #[error("Student is not signed up for this activity")]
    NotEnrolled,

    /// Participant list is at `max_participants`
    #[error("Activity is already at maximum capacity")]
    ActivityFull,
}

/// JSON body returned for every classified failure
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApiError {
    /// Stable machine-readable kind
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::ActivityNotFound => "activity_not_found",
            ApiError::UserAlreadyExists => "user_already_exists",
            ApiError::NotAStudent => "not_a_student",
            ApiError::NotATeacher => "not_a_teacher",
            ApiError::AlreadyEnrolled => "already_enrolled",
            ApiError::NotEnrolled => "not_enrolled",
            ApiError::ActivityFull => "activity_full",
        }
    }

    /// HTTP status the boundary maps this kind to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::ActivityNotFound => StatusCode::NOT_FOUND,
            ApiError::NotAStudent | ApiError::NotATeacher => StatusCode::FORBIDDEN,
            ApiError::ActivityFull => StatusCode::CONFLICT,
            ApiError::UserAlreadyExists | ApiError::AlreadyEnrolled | ApiError::NotEnrolled => {
                StatusCode::BAD_REQUEST
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}
