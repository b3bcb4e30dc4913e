//! Styles.xml writer
//!
//! Generates styles.xml: document defaults taken from the document's
//! default font, plus the Normal paragraph style and the two table styles
//! generated tables refer to.

use crate::docx::document_writer::write_run_property_elements;
use crate::docx::error::DocxResult;
use crate::docx::namespaces;
use doc_model::Document;

/// Style id of the bordered grid table style
pub const TABLE_GRID_STYLE: &str = "TableGrid";

/// Writer for styles.xml
#[derive(Debug, Default)]
pub struct StylesWriter;

impl StylesWriter {
    /// Create a new styles writer
    pub fn new() -> Self {
        Self
    }

    /// Generate styles.xml content
    pub fn write(&self, document: &Document) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:styles xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));

        self.write_doc_defaults(&mut xml, document);
        self.write_normal_style(&mut xml);
        self.write_table_styles(&mut xml);

        xml.push_str("</w:styles>");
        Ok(xml)
    }

    /// Write document defaults
    fn write_doc_defaults(&self, xml: &mut String, document: &Document) {
        xml.push_str("<w:docDefaults>");

        xml.push_str("<w:rPrDefault>");
        xml.push_str("<w:rPr>");
        write_run_property_elements(xml, &document.default_font);
        xml.push_str("</w:rPr>");
        xml.push_str("</w:rPrDefault>");

        // Single spacing, no space after; paragraphs set their own gaps
        xml.push_str("<w:pPrDefault>");
        xml.push_str("<w:pPr>");
        xml.push_str(r#"<w:spacing w:after="0" w:line="240" w:lineRule="auto"/>"#);
        xml.push_str("</w:pPr>");
        xml.push_str("</w:pPrDefault>");

        xml.push_str("</w:docDefaults>");
    }

    fn write_normal_style(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal">"#);
        xml.push_str(r#"<w:name w:val="Normal"/>"#);
        xml.push_str("<w:qFormat/>");
        xml.push_str("</w:style>");
    }

    fn write_table_styles(&self, xml: &mut String) {
        xml.push_str(r#"<w:style w:type="table" w:default="1" w:styleId="TableNormal">"#);
        xml.push_str(r#"<w:name w:val="Normal Table"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="99"/>"#);
        xml.push_str("<w:semiHidden/>");
        xml.push_str("<w:unhideWhenUsed/>");
        xml.push_str("<w:tblPr>");
        xml.push_str(r#"<w:tblInd w:w="0" w:type="dxa"/>"#);
        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");
        xml.push_str("</w:tblPr>");
        xml.push_str("</w:style>");

        xml.push_str(&format!(
            r#"<w:style w:type="table" w:styleId="{}">"#,
            TABLE_GRID_STYLE
        ));
        xml.push_str(r#"<w:name w:val="Table Grid"/>"#);
        xml.push_str(r#"<w:basedOn w:val="TableNormal"/>"#);
        xml.push_str(r#"<w:uiPriority w:val="59"/>"#);
        xml.push_str("<w:tblPr>");
        xml.push_str("<w:tblBorders>");
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            xml.push_str(&format!(
                r#"<w:{} w:val="single" w:sz="4" w:space="0" w:color="auto"/>"#,
                side
            ));
        }
        xml.push_str("</w:tblBorders>");
        xml.push_str("</w:tblPr>");
        xml.push_str("</w:style>");
    }
}
