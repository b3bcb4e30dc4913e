//! Field writer for DOCX files
//!
//! Writes complex fields (PAGE, NUMPAGES) as a begin/instr/separate/result/end
//! run sequence so that Word updates them on open.

use crate::docx::document_writer::{write_run_properties, write_text};
use doc_model::{CharacterProperties, FieldCode};

/// Writer for field runs
pub struct FieldWriter;

impl FieldWriter {
    /// Write a complete field, with every run carrying the same formatting
    pub fn write_field(xml: &mut String, code: FieldCode, props: &CharacterProperties) {
        Self::write_char(xml, "begin", props);

        xml.push_str("<w:r>");
        write_run_properties(xml, props);
        xml.push_str(&format!(
            r#"<w:instrText xml:space="preserve"> {} </w:instrText>"#,
            code.code_string()
        ));
        xml.push_str("</w:r>");

        Self::write_char(xml, "separate", props);

        // Cached result shown until fields are updated
        xml.push_str("<w:r>");
        write_run_properties(xml, props);
        write_text(xml, code.placeholder());
        xml.push_str("</w:r>");

        Self::write_char(xml, "end", props);
    }

    fn write_char(xml: &mut String, char_type: &str, props: &CharacterProperties) {
        xml.push_str("<w:r>");
        write_run_properties(xml, props);
        xml.push_str(&format!(r#"<w:fldChar w:fldCharType="{}"/>"#, char_type));
        xml.push_str("</w:r>");
    }
}
