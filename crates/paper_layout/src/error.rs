//! Error types for paper layout

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Document model error: {0}")]
    Model(#[from] doc_model::DocModelError),

    #[error("DOCX export failed: {0}")]
    Docx(#[from] store::DocxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings error: {0}")]
    Settings(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
