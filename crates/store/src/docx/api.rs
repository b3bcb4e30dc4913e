//! Public API for DOCX export
//!
//! This module provides the main entry points for writing DOCX files.

use crate::docx::error::DocxResult;
use crate::docx::writer::DocxWriter;
use doc_model::Document;
use std::fs::File;
use std::io::{BufWriter, Cursor, Write};
use std::path::Path;

/// Export a document to a DOCX file on disk
///
/// Parent directories are created when missing.
///
/// # Example
///
/// ```ignore
/// use store::docx::export_docx;
/// use doc_model::Document;
/// use std::path::Path;
///
/// export_docx(&Document::new(), Path::new("output.docx"))?;
/// ```
pub fn export_docx(document: &Document, path: &Path) -> DocxResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = DocxWriter::new(BufWriter::new(file)).write(document)?;
    writer.flush()?;

    tracing::debug!("Wrote DOCX to {}", path.display());
    Ok(())
}

/// Export a document to an in-memory byte vector
///
/// # Example
///
/// ```ignore
/// use store::docx::export_docx_bytes;
/// use doc_model::Document;
///
/// let bytes = export_docx_bytes(&Document::new())?;
/// std::fs::write("output.docx", bytes)?;
/// ```
pub fn export_docx_bytes(document: &Document) -> DocxResult<Vec<u8>> {
    let cursor = DocxWriter::new(Cursor::new(Vec::new())).write(document)?;
    let bytes = cursor.into_inner();

    tracing::debug!("Generated DOCX package of {} bytes", bytes.len());
    Ok(bytes)
}
