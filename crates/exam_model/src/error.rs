//! Error types for request parsing

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExamModelError {
    #[error("Invalid exam paper JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ExamModelError>;
