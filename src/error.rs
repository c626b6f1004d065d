use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use serde_json::json;
use thiserror::Error;

/// Fixed message returned for any required-field failure on `POST /registro`.
pub const MISSING_DATA: &str = "Missing required data.";

/// Message used when a summary query does not yield exactly one row.
pub const SINGLE_ROW_VIOLATION: &str = "JSON object requested, multiple (or no) rows returned";

/// Any failure reported by the data store. The message reaches callers verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        Self(e.to_string())
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RecorderError {
    #[error("{}", MISSING_DATA)]
    Validation,
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ResponseError for RecorderError {
    fn status_code(&self) -> StatusCode {
        match self {
            RecorderError::Validation => StatusCode::BAD_REQUEST,
            RecorderError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let err = RecorderError::Validation;
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Missing required data.");
    }

    #[test]
    fn store_error_text_passes_through() {
        let err = RecorderError::from(StoreError::new("duplicate key value"));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "duplicate key value");
    }
}
