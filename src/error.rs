use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ClaimError {
    #[error("Failed to read requirement document {}: {source}", .path.display())]
    RequirementRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write claim XML to {}: {source}", .path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Page rendering error: {0}")]
    Page(#[from] askama::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ClaimError {
    fn into_response(self) -> Response {
        let code = match self {
            ClaimError::RequirementRead { .. } => "requirement-unavailable",
            ClaimError::Persist { .. } => "persist-failed",
            ClaimError::Page(_) => "page-error",
            ClaimError::Internal(_) => "exception",
        };

        tracing::error!(code, error = %self, "Claim request failed");

        let body = create_error_body(code, &self.to_string());
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

fn create_error_body(code: &str, diagnostics: &str) -> serde_json::Value {
    json!({
        "error": {
            "code": code,
            "diagnostics": diagnostics
        }
    })
}

pub type Result<T> = std::result::Result<T, ClaimError>;
