//! Error kinds raised by the store and their HTTP mapping.
//!
//! # Design
//! The `Display` text of each variant is the exact message sent to clients
//! in the `{"error": ...}` body, so handlers can bubble errors up with `?`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const TEXT_REQUIRED: &str = "Todo text is required";
pub const COMPLETED_NOT_BOOLEAN: &str = "Todo completed must be a boolean";

/// Failure of a single store operation. Every failure leaves the store untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    /// Request input was missing or malformed.
    #[error("{message}")]
    Validation { message: String },

    /// The id does not resolve to an existing todo.
    #[error("Todo not found")]
    NotFound,
}

impl TodoError {
    pub fn text_required() -> Self {
        TodoError::Validation {
            message: TEXT_REQUIRED.to_string(),
        }
    }

    pub fn completed_not_boolean() -> Self {
        TodoError::Validation {
            message: COMPLETED_NOT_BOOLEAN.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            TodoError::Validation { .. } => StatusCode::BAD_REQUEST,
            TodoError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for TodoError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
