//! DOCX Writer Infrastructure
//!
//! Creates ZIP archives with correct DOCX structure.

use crate::docx::content_types::{create_default_content_types, ContentTypes};
use crate::docx::document_writer::DocumentWriter;
use crate::docx::error::DocxResult;
use crate::docx::footer_writer::{FooterWriter, FOOTER_PART};
use crate::docx::properties_writer::PropertiesWriter;
use crate::docx::relationships::{create_document_rels, create_root_rels, Relationships};
use crate::docx::styles_writer::StylesWriter;
use crate::docx::{content_type_values, relationship_types};
use doc_model::Document;
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Main DOCX writer
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    content_types: ContentTypes,
    root_rels: Relationships,
    doc_rels: Relationships,
    properties: Option<PropertiesWriter>,
}

impl<W: Write + Seek> DocxWriter<W> {
    /// Create a new DOCX writer
    pub fn new(writer: W) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            content_types: create_default_content_types(),
            root_rels: create_root_rels(),
            doc_rels: create_document_rels(),
            properties: None,
        }
    }

    /// Use fixed package properties instead of stamping the current time
    pub fn with_properties(mut self, properties: PropertiesWriter) -> Self {
        self.properties = Some(properties);
        self
    }

    /// Write a complete DOCX package and return the underlying writer
    pub fn write(mut self, document: &Document) -> DocxResult<W> {
        let mut document_writer = DocumentWriter::new();

        // Footer part, only when the document has one
        if let Some(ref footer) = document.footer {
            let footer_xml = FooterWriter::new().write(footer)?;
            self.write_file(&format!("word/{}", FOOTER_PART), &footer_xml)?;

            let rel_id = self.doc_rels.add(relationship_types::FOOTER, FOOTER_PART);
            self.content_types.add_override(
                &format!("/word/{}", FOOTER_PART),
                content_type_values::FOOTER,
            );
            document_writer = document_writer.with_footer(rel_id);
        }

        let doc_xml = document_writer.write(document)?;
        self.write_file("word/document.xml", &doc_xml)?;

        let styles_xml = StylesWriter::new().write(document)?;
        self.write_file("word/styles.xml", &styles_xml)?;

        self.write_file("word/settings.xml", &generate_settings_xml())?;

        let properties = self
            .properties
            .take()
            .unwrap_or_else(|| PropertiesWriter::new(document.title.as_deref()));
        self.write_file("docProps/core.xml", &properties.core_xml())?;
        self.write_file("docProps/app.xml", &properties.app_xml())?;

        let root_rels_xml = self.root_rels.to_xml();
        self.write_file("_rels/.rels", &root_rels_xml)?;

        let doc_rels_xml = self.doc_rels.to_xml();
        self.write_file("word/_rels/document.xml.rels", &doc_rels_xml)?;

        // Write [Content_Types].xml last
        let content_types_xml = self.content_types.to_xml();
        self.write_file("[Content_Types].xml", &content_types_xml)?;

        let inner = self.zip.finish()?;
        Ok(inner)
    }

    /// Write a file to the ZIP archive
    pub fn write_file(&mut self, path: &str, content: &str) -> DocxResult<()> {
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        self.zip.start_file(path, options)?;
        self.zip.write_all(content.as_bytes())?;

        Ok(())
    }
}

/// Generate a minimal settings.xml
pub fn generate_settings_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:settings xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
    <w:updateFields w:val="true"/>
    <w:compat>
        <w:compatSetting w:name="compatibilityMode" w:uri="http://schemas.microsoft.com/office/word" w:val="15"/>
    </w:compat>
</w:settings>"#
        .to_string()
}
