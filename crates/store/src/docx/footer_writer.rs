//! Footer part writer (word/footer1.xml)

use crate::docx::document_writer::write_paragraph;
use crate::docx::error::DocxResult;
use crate::docx::namespaces;
use doc_model::HeaderFooter;

/// Part name of the single default footer
pub const FOOTER_PART: &str = "footer1.xml";

/// Writer for footer parts
#[derive(Debug, Default)]
pub struct FooterWriter;

impl FooterWriter {
    pub fn new() -> Self {
        Self
    }

    /// Generate the footer XML
    pub fn write(&self, footer: &HeaderFooter) -> DocxResult<String> {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:ftr xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R
        ));

        if footer.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        }
        for para in &footer.paragraphs {
            write_paragraph(&mut xml, para)?;
        }

        xml.push_str("</w:ftr>");
        Ok(xml)
    }
}
