use std::error::Error;
use std::fmt;

/// Custom Error and Result types to unify errors from all sources.
pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    /// Network-level failure reaching the upstream feed (timeout, connect, non-200).
    Unavailable(String),
    /// Upstream responded, but the body is not a valid events document.
    Malformed(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::Unavailable(s) => write!(f, "Upstream unavailable: {}", s),
            AppError::Malformed(s) => write!(f, "Upstream malformed: {}", s),
        }
    }
}

impl Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            AppError::Malformed(error.to_string())
        } else {
            AppError::Unavailable(error.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        AppError::Malformed(error.to_string())
    }
}
