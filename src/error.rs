use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

const DATE_RANGE_MESSAGE: &str = "Check-out date must be after check-in date";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{}", DATE_RANGE_MESSAGE)]
    InvalidDateRange,

    #[error("Total price is out of range")]
    PriceOutOfRange,

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("Validation: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Missing or malformed x-session-id header")]
    MissingSession,

    #[error("Unknown or expired session {0}")]
    UnknownSession(Uuid),

    #[error("Support chat is disabled")]
    ChatDisabled,

    /// Body, query or path that could not be extracted.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

macro_rules! from_rejection {
    ($($rejection:ty),*) => {
        $(impl From<$rejection> for AppError {
            fn from(rejection: $rejection) -> Self {
                AppError::Rejected {
                    status: rejection.status(),
                    message: rejection.body_text(),
                }
            }
        })*
    };
}

from_rejection!(JsonRejection, QueryRejection, PathRejection);

impl AppError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        AppError::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidDateRange => "invalid_date_range",
            AppError::PriceOutOfRange => "price_out_of_range",
            AppError::PasswordMismatch => "password_mismatch",
            AppError::Validation(_) => "validation",
            AppError::NotFound { .. } => "not_found",
            AppError::MissingSession => "missing_session",
            AppError::UnknownSession(_) => "unknown_session",
            AppError::ChatDisabled => "chat_disabled",
            AppError::Rejected { .. } => "bad_request",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidDateRange
            | AppError::PriceOutOfRange
            | AppError::PasswordMismatch
            | AppError::Validation(_)
            | AppError::MissingSession => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } | AppError::UnknownSession(_) | AppError::ChatDisabled => {
                StatusCode::NOT_FOUND
            }
            AppError::Rejected { status, .. } => *status,
        }
    }

    // Password mismatch is shown as a blocking pop-up, everything else inline.
    fn is_alert(&self) -> bool {
        matches!(self, AppError::PasswordMismatch)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let mut body = json!({
            "success": false,
            "error": self.to_string(),
            "code": self.code(),
        });
        if self.is_alert() {
            body["alert"] = json!(true);
        }
        if let AppError::Validation(errors) = &self {
            body["fields"] = json!(errors.field_errors().keys().collect::<Vec<_>>());
        }
        (status, Json(body)).into_response()
    }
}
