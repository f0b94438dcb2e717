// Error taxonomy for the dashboard service
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Spreadsheet ID not found in URL: {0}")]
    InvalidSpreadsheetUrl(String),

    #[error("No sheets found")]
    NoSheets,

    #[error("Spreadsheet is empty")]
    EmptySheet,

    #[error("Property ID not found in Sheet")]
    PropertyNotFound,

    #[error("Credential error: {0}")]
    Credentials(String),

    #[error("{service} request failed with status {status}: {body}")]
    UpstreamStatus {
        service: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("Upstream request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DashboardError {
    /// A lookup miss is the caller's problem; everything else is ours or
    /// an upstream's.
    pub fn status_code(&self) -> StatusCode {
        match self {
            DashboardError::PropertyNotFound => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        // Deliberately verbose: the message is for debugging, not end users
        tracing::error!("dashboard request failed: {self}");
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
