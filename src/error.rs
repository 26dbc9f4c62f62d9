use thiserror::Error;

/// Failure taxonomy for the whole app. Nothing here is fatal: every
/// variant degrades to a state the user can recover from (draft kept,
/// previous report kept, empty collection assumed).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required fields: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("{0}")]
    Configuration(String),

    #[error("Analysis request failed: {0}")]
    Upstream(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    pub fn missing_fields(&self) -> Option<&[String]> {
        match self {
            Self::Validation(fields) => Some(fields),
            _ => None,
        }
    }
}

impl From<AppError> for String {
    fn from(err: AppError) -> Self {
        err.to_string()
    }
}
