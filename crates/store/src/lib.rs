//! Store - Document file output
//!
//! This crate serializes a [`doc_model::Document`] into a DOCX package and
//! reads generated packages back into a plain-text summary for checking.

pub mod docx;

// Re-export DOCX functionality
pub use docx::{
    export_docx, export_docx_bytes, inspect_docx, inspect_docx_bytes, DocxError, DocxResult,
    DocxSummary,
};
