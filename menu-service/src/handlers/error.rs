use crate::services::StoreError;
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use validator::ValidationErrors;

/// Failures of the `/menu` endpoints, rendered with the bodies clients expect.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("Please fill all the fields")]
    MissingFields,

    #[error("Menu item not found")]
    NotFound,

    #[error("Error adding a new item: {0}")]
    Create(#[source] StoreError),

    #[error("Error: {0}")]
    Store(#[source] StoreError),

    #[error("Error: {0}")]
    InvalidPayload(String),
}

impl From<JsonRejection> for MenuError {
    fn from(rejection: JsonRejection) -> Self {
        MenuError::InvalidPayload(rejection.body_text())
    }
}

impl From<ValidationErrors> for MenuError {
    fn from(errors: ValidationErrors) -> Self {
        MenuError::InvalidPayload(errors.to_string())
    }
}

impl MenuError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            MenuError::MissingFields | MenuError::Store(_) | MenuError::InvalidPayload(_) => {
                StatusCode::BAD_REQUEST
            }
            MenuError::NotFound => StatusCode::NOT_FOUND,
            MenuError::Create(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for MenuError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            MenuError::MissingFields => {
                (status, Json(json!({ "message": self.to_string() }))).into_response()
            }
            _ => (status, self.to_string()).into_response(),
        }
    }
}
