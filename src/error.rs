//! Error types for the library catalog

use thiserror::Error;

/// Numeric error codes reported alongside every failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    NotBorrowable = 12,
    BadValue = 18,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Item not available: {0}")]
    ItemNotAvailable(String),

    #[error("Not borrowable: {0}")]
    NotBorrowable(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Code matching this error
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::NotFound(_) => ErrorCode::NoSuchItem,
            AppError::ItemNotAvailable(_) => ErrorCode::ItemNotAvailable,
            AppError::NotBorrowable(_) => ErrorCode::NotBorrowable,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Conflict(_) => ErrorCode::Duplicate,
            AppError::Config(_) | AppError::Io(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

/// Result type alias for catalog operations
pub type AppResult<T> = Result<T, AppError>;
