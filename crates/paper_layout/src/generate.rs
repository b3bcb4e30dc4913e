//! End-to-end generation

use crate::{build_header, build_question_table, LayoutSettings, PaperSink, Result};
use doc_model::Document;
use exam_model::{ExamMetadata, ExamPaper};

/// Run both builders into any sink
pub fn build_paper<S: PaperSink + ?Sized>(
    sink: &mut S,
    paper: &ExamPaper,
    settings: &LayoutSettings,
) -> Result<()> {
    build_header(sink, &paper.metadata, &paper.instructions, settings)?;
    build_question_table(sink, &paper.sections, settings)?;
    Ok(())
}

/// Lay the paper out into a fresh document
pub fn layout_document(paper: &ExamPaper, settings: &LayoutSettings) -> Result<Document> {
    let mut doc = Document::new();
    doc.title = paper_title(&paper.metadata);
    build_paper(&mut doc, paper, settings)?;
    Ok(doc)
}

/// Render the paper to DOCX bytes
pub fn generate_exam_docx(paper: &ExamPaper, settings: &LayoutSettings) -> Result<Vec<u8>> {
    let doc = layout_document(paper, settings)?;
    let bytes = store::export_docx_bytes(&doc)?;
    tracing::debug!("Generated DOCX package of {} bytes", bytes.len());
    Ok(bytes)
}

/// Document title: school, subject and exam type joined by " - "
pub fn paper_title(metadata: &ExamMetadata) -> Option<String> {
    let parts: Vec<&str> = [&metadata.school_name, &metadata.subject, &metadata.exam_type]
        .into_iter()
        .filter_map(|part| part.as_deref())
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" - "))
    }
}
