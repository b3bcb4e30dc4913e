//! Document.xml writer
//!
//! Converts a [`Document`] to DOCX document.xml format. The paragraph and
//! run writers here are shared with the table and footer writers.

use crate::docx::error::DocxResult;
use crate::docx::fields_writer::FieldWriter;
use crate::docx::tables_writer::TableWriter;
use crate::docx::{escape_xml, namespaces, twips};
use doc_model::{
    Alignment, Block, CharacterProperties, Document, PageSetup, Paragraph, ParagraphProperties,
    Run, RunContent,
};

/// Writer for document.xml
#[derive(Debug, Default)]
pub struct DocumentWriter {
    /// Relationship id of the footer part, if the package has one
    footer_rel_id: Option<String>,
}

impl DocumentWriter {
    /// Create a new document writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Reference the given footer relationship from the section properties
    pub fn with_footer(mut self, rel_id: impl Into<String>) -> Self {
        self.footer_rel_id = Some(rel_id.into());
        self
    }

    /// Generate document.xml content
    pub fn write(&self, document: &Document) -> DocxResult<String> {
        let mut xml = String::new();

        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<w:document xmlns:w="{}" xmlns:r="{}">"#,
            namespaces::W,
            namespaces::R,
        ));
        xml.push_str("<w:body>");

        for block in &document.body {
            match block {
                Block::Paragraph(para) => write_paragraph(&mut xml, para)?,
                Block::Table(table) => TableWriter::new().write_table(&mut xml, table)?,
            }
        }

        self.write_section_properties(&mut xml, &document.page);

        xml.push_str("</w:body>");
        xml.push_str("</w:document>");

        Ok(xml)
    }

    /// Write the final sectPr: footer reference, page size and margins
    fn write_section_properties(&self, xml: &mut String, page: &PageSetup) {
        xml.push_str("<w:sectPr>");

        if let Some(ref rel_id) = self.footer_rel_id {
            xml.push_str(&format!(
                r#"<w:footerReference w:type="default" r:id="{}"/>"#,
                rel_id
            ));
        }

        xml.push_str(&format!(
            r#"<w:pgSz w:w="{}" w:h="{}"/>"#,
            twips(page.size.width),
            twips(page.size.height)
        ));

        let m = &page.margins;
        xml.push_str(&format!(
            r#"<w:pgMar w:top="{}" w:right="{}" w:bottom="{}" w:left="{}" w:header="{}" w:footer="{}" w:gutter="0"/>"#,
            twips(m.top),
            twips(m.right),
            twips(m.bottom),
            twips(m.left),
            twips(m.header),
            twips(m.footer),
        ));

        xml.push_str("</w:sectPr>");
    }
}

/// Write a paragraph element
pub(crate) fn write_paragraph(xml: &mut String, para: &Paragraph) -> DocxResult<()> {
    if para.runs.is_empty() && para.properties.is_empty() {
        xml.push_str("<w:p/>");
        return Ok(());
    }

    xml.push_str("<w:p>");
    write_paragraph_properties(xml, &para.properties);

    for run in &para.runs {
        match run.content {
            RunContent::Text(_) => write_run(xml, run)?,
            RunContent::Field(code) => FieldWriter::write_field(xml, code, &run.properties),
        }
    }

    xml.push_str("</w:p>");
    Ok(())
}

/// Write paragraph properties in schema order: spacing, ind, jc
fn write_paragraph_properties(xml: &mut String, props: &ParagraphProperties) {
    if props.is_empty() {
        return;
    }

    xml.push_str("<w:pPr>");

    if props.space_before.is_some() || props.space_after.is_some() {
        xml.push_str("<w:spacing");
        if let Some(before) = props.space_before {
            xml.push_str(&format!(r#" w:before="{}""#, twips(before)));
        }
        if let Some(after) = props.space_after {
            xml.push_str(&format!(r#" w:after="{}""#, twips(after)));
        }
        xml.push_str("/>");
    }

    if let Some(left) = props.indent_left {
        xml.push_str(&format!(r#"<w:ind w:left="{}"/>"#, twips(left)));
    }

    if let Some(alignment) = props.alignment {
        let val = match alignment {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        };
        xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, val));
    }

    xml.push_str("</w:pPr>");
}

/// Write a text run element
pub(crate) fn write_run(xml: &mut String, run: &Run) -> DocxResult<()> {
    let text = match &run.content {
        RunContent::Text(text) => text,
        RunContent::Field(_) => return Ok(()),
    };

    xml.push_str("<w:r>");
    write_run_properties(xml, &run.properties);

    let lines: Vec<&str> = text.split('\n').collect();
    for (line_index, line) in lines.iter().enumerate() {
        let segments: Vec<&str> = line.split('\t').collect();
        for (i, segment) in segments.iter().enumerate() {
            if !segment.is_empty() {
                write_text(xml, segment);
            }
            if i < segments.len() - 1 {
                xml.push_str("<w:tab/>");
            }
        }
        if line_index < lines.len() - 1 {
            xml.push_str("<w:br/>");
        }
    }

    xml.push_str("</w:r>");
    Ok(())
}

/// Write a `w:t` element, preserving leading and trailing spaces
pub(crate) fn write_text(xml: &mut String, text: &str) {
    if text.starts_with(' ') || text.ends_with(' ') {
        xml.push_str(r#"<w:t xml:space="preserve">"#);
    } else {
        xml.push_str("<w:t>");
    }
    xml.push_str(&escape_xml(text));
    xml.push_str("</w:t>");
}

/// Write run properties in schema order
///
/// Only flags that are switched on are written; an unset or false flag
/// leaves the style default in place.
pub(crate) fn write_run_properties(xml: &mut String, props: &CharacterProperties) {
    if props.is_empty() {
        return;
    }

    xml.push_str("<w:rPr>");
    write_run_property_elements(xml, props);
    xml.push_str("</w:rPr>");
}

/// The child elements of `w:rPr`, also used for document defaults
pub(crate) fn write_run_property_elements(xml: &mut String, props: &CharacterProperties) {
    if let Some(ref font) = props.font_family {
        let font = escape_xml(font);
        xml.push_str(&format!(
            r#"<w:rFonts w:ascii="{0}" w:hAnsi="{0}" w:cs="{0}"/>"#,
            font
        ));
    }

    if props.bold == Some(true) {
        xml.push_str("<w:b/>");
    }

    if props.italic == Some(true) {
        xml.push_str("<w:i/>");
    }

    if let Some(ref color) = props.color {
        xml.push_str(&format!(
            r#"<w:color w:val="{}"/>"#,
            color.trim_start_matches('#')
        ));
    }

    if let Some(size) = props.font_size {
        let half_pts = (size * 2.0).round() as i32;
        xml.push_str(&format!(r#"<w:sz w:val="{}"/>"#, half_pts));
        xml.push_str(&format!(r#"<w:szCs w:val="{}"/>"#, half_pts));
    }

    if props.underline == Some(true) {
        xml.push_str(r#"<w:u w:val="single"/>"#);
    }
}
