use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Serializable view of an [`AppError`] for display layers.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("persisted leave data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Storage(_) | AppError::Io(_) => "STORAGE_ERROR",
            AppError::Parse(_) => "PARSE_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn to_response(&self) -> ErrorResponse {
        match self {
            AppError::Validation(errors) => ErrorResponse {
                error: "Validation failed".to_string(),
                code: self.code().to_string(),
                details: Some(serde_json::json!({ "errors": errors })),
            },
            AppError::Internal(err) => {
                tracing::error!("Internal error: {:?}", err);
                ErrorResponse {
                    error: "Internal error".to_string(),
                    code: self.code().to_string(),
                    details: None,
                }
            }
            other => ErrorResponse {
                error: other.to_string(),
                code: self.code().to_string(),
                details: None,
            },
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                // struct-level rules report under `__all__`; they only check dates
                let label = if &*field == "__all__" {
                    "dates".to_string()
                } else {
                    field.to_string()
                };
                errs.iter().map(move |e| format!("{}: {}", label, e.code))
            })
            .collect();
        // field_errors() is backed by a HashMap
        messages.sort();
        AppError::Validation(messages)
    }
}
