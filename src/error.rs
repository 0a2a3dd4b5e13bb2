use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Longest provider response body echoed back in an error message.
const MAX_PROVIDER_BODY: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Email provider error: {0}")]
    Provider(String),
}

impl AppError {
    /// Provider failure built from an HTTP status and response body.
    pub fn provider_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let body = match body.char_indices().nth(MAX_PROVIDER_BODY) {
            Some((cut, _)) => format!("{}...", &body[..cut]),
            None => body.to_string(),
        };
        AppError::Provider(format!("status {}: {}", status, body))
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields => StatusCode::BAD_REQUEST,
            AppError::InvalidJson(_) | AppError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidJson(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Provider("request to the email provider timed out".to_string())
        } else {
            AppError::Provider(err.without_url().to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
