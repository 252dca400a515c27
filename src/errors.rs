use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Invalid access code. Please check your access code and try again.")]
    InvalidAccessCode,

    #[error("This access code is already associated with a different email address.")]
    AccessCodeConflict,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No questions available for subject '{0}'")]
    NoQuestionsForSubject(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl AppError {
    /// Stable identifier for the UI boundary; messages may change, codes do not.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidAccessCode => "INVALID_ACCESS_CODE",
            AppError::AccessCodeConflict => "ACCESS_CODE_CONFLICT",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::NoQuestionsForSubject(_) => "NO_QUESTIONS_FOR_SUBJECT",
            AppError::Storage(_) => "STORAGE_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(format!("JSON serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
