//! Read a generated package back into plain text
//!
//! Used by tests and the command line to check what a DOCX contains
//! without opening it in a word processor. Formatting is dropped; field
//! results show their cached value.

use crate::docx::content_types::ContentTypes;
use crate::docx::error::{DocxError, DocxResult};
use crate::docx::reader::{DocxReader, XmlParser};
use crate::docx::relationships::Relationships;
use crate::docx::{content_type_values, relationship_types};
use quick_xml::events::{BytesStart, Event};
use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

/// Plain-text view of a DOCX package
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocxSummary {
    /// Title from the core properties
    pub title: Option<String>,
    /// Page width and height in points
    pub page_size: Option<(f32, f32)>,
    /// Body-level paragraphs, outside any table
    pub paragraphs: Vec<String>,
    /// Tables as rows of cell texts; a cell's paragraphs are joined by '\n'
    pub tables: Vec<Vec<Vec<String>>>,
    /// Footer paragraphs joined by '\n'
    pub footer: Option<String>,
    /// Names of all parts in the package, sorted
    pub parts: Vec<String>,
}

impl DocxSummary {
    /// Rows of the table at `index`
    pub fn table(&self, index: usize) -> Option<&[Vec<String>]> {
        self.tables.get(index).map(Vec::as_slice)
    }

    /// Whether any paragraph, cell or the footer contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.paragraphs.iter().any(|p| p.contains(needle))
            || self
                .tables
                .iter()
                .flatten()
                .flatten()
                .any(|cell| cell.contains(needle))
            || self.footer.as_deref().is_some_and(|f| f.contains(needle))
    }
}

/// Summarize a DOCX file on disk
pub fn inspect_docx(path: &Path) -> DocxResult<DocxSummary> {
    let file = File::open(path)?;
    inspect(BufReader::new(file))
}

/// Summarize an in-memory DOCX package
pub fn inspect_docx_bytes(bytes: &[u8]) -> DocxResult<DocxSummary> {
    inspect(Cursor::new(bytes))
}

const DOCUMENT_PART: &str = "word/document.xml";
const DOCUMENT_RELS_PART: &str = "word/_rels/document.xml.rels";

fn inspect<R: Read + Seek>(source: R) -> DocxResult<DocxSummary> {
    let mut reader = DocxReader::new(source)?;
    if !reader.is_valid_docx() {
        return Err(DocxError::InvalidStructure(
            "missing [Content_Types].xml or word/document.xml".to_string(),
        ));
    }

    let mut parts: Vec<String> = reader.file_names().into_iter().map(str::to_string).collect();
    parts.sort();

    let content_types = ContentTypes::parse(&reader.read_file_as_string("[Content_Types].xml")?)?;
    let main_type = content_types.get_content_type(DOCUMENT_PART).map(String::as_str);
    if main_type != Some(content_type_values::DOCUMENT) {
        return Err(DocxError::InvalidStructure(format!(
            "{} has content type {:?}, not a main document",
            DOCUMENT_PART, main_type
        )));
    }

    let body = parse_blocks(&reader.read_file_as_string(DOCUMENT_PART)?)?;

    let footer = match body.footer_id {
        Some(ref id) => {
            let rels = Relationships::parse(&reader.read_file_as_string(DOCUMENT_RELS_PART)?)?;
            let rel = rels
                .get(id)
                .filter(|rel| rel.rel_type == relationship_types::FOOTER)
                .ok_or_else(|| {
                    DocxError::InvalidStructure(format!("footer reference {} is not a footer relationship", id))
                })?;
            let path = format!("word/{}", rel.target.trim_start_matches('/'));
            let footer_xml = reader.read_file_as_string(&path)?;
            Some(parse_blocks(&footer_xml)?.paragraphs.join("\n"))
        }
        None => None,
    };

    let title = match reader.read_optional("docProps/core.xml")? {
        Some(core_xml) => element_text(&core_xml, "title")?,
        None => None,
    };

    Ok(DocxSummary {
        title,
        page_size: body.page_size,
        paragraphs: body.paragraphs,
        tables: body.tables,
        footer,
        parts,
    })
}

#[derive(Debug, Default)]
struct Blocks {
    paragraphs: Vec<String>,
    tables: Vec<Vec<Vec<String>>>,
    page_size: Option<(f32, f32)>,
    /// Relationship id from the section's footerReference
    footer_id: Option<String>,
}

#[derive(Debug, Default)]
struct BlockState {
    blocks: Blocks,
    table_depth: usize,
    cell: Option<Vec<String>>,
    paragraph: Option<String>,
    in_text: bool,
}

impl BlockState {
    fn start(&mut self, e: &BytesStart) {
        let name = e.name();
        let name = name.as_ref();

        if XmlParser::matches_element(name, "tbl") {
            self.table_depth += 1;
            if self.table_depth == 1 {
                self.blocks.tables.push(Vec::new());
            }
        } else if XmlParser::matches_element(name, "tr") && self.table_depth == 1 {
            if let Some(table) = self.blocks.tables.last_mut() {
                table.push(Vec::new());
            }
        } else if XmlParser::matches_element(name, "tc") && self.table_depth == 1 {
            self.cell = Some(Vec::new());
        } else if XmlParser::matches_element(name, "p") {
            self.paragraph = Some(String::new());
        } else if XmlParser::matches_element(name, "t") {
            self.in_text = true;
        }
    }

    fn empty(&mut self, e: &BytesStart) {
        let name = e.name();
        let name = name.as_ref();

        if XmlParser::matches_element(name, "p") {
            self.finish_paragraph(String::new());
        } else if XmlParser::matches_element(name, "tab") {
            self.push_text("\t");
        } else if XmlParser::matches_element(name, "br") {
            self.push_text("\n");
        } else if XmlParser::matches_element(name, "pgSz") {
            let w = XmlParser::get_w_attribute(e, "w").and_then(|v| XmlParser::parse_twips(&v));
            let h = XmlParser::get_w_attribute(e, "h").and_then(|v| XmlParser::parse_twips(&v));
            if let (Some(w), Some(h)) = (w, h) {
                self.blocks.page_size = Some((w, h));
            }
        } else if XmlParser::matches_element(name, "footerReference") {
            self.blocks.footer_id = XmlParser::get_attribute(e, b"r:id");
        }
    }

    fn end(&mut self, name: &[u8]) {
        if XmlParser::matches_element(name, "tbl") {
            self.table_depth = self.table_depth.saturating_sub(1);
        } else if XmlParser::matches_element(name, "tc") && self.table_depth == 1 {
            if let Some(paragraphs) = self.cell.take() {
                let text = paragraphs.join("\n");
                if let Some(row) = self.blocks.tables.last_mut().and_then(|t| t.last_mut()) {
                    row.push(text);
                }
            }
        } else if XmlParser::matches_element(name, "p") {
            if let Some(text) = self.paragraph.take() {
                self.finish_paragraph(text);
            }
        } else if XmlParser::matches_element(name, "t") {
            self.in_text = false;
        }
    }

    fn push_text(&mut self, text: &str) {
        if let Some(ref mut paragraph) = self.paragraph {
            paragraph.push_str(text);
        }
    }

    fn finish_paragraph(&mut self, text: String) {
        if let Some(ref mut cell) = self.cell {
            cell.push(text);
        } else if self.table_depth == 0 {
            self.blocks.paragraphs.push(text);
        }
    }
}

/// Collect paragraphs and tables from a document or footer part
fn parse_blocks(content: &str) -> DocxResult<Blocks> {
    let mut reader = XmlParser::preserving(content);
    let mut buf = Vec::new();
    let mut state = BlockState::default();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => state.start(e),
            Ok(Event::Empty(ref e)) => state.empty(e),
            Ok(Event::End(ref e)) => state.end(e.name().as_ref()),
            Ok(Event::Text(ref e)) if state.in_text => {
                let text = e
                    .unescape()
                    .map_err(|e| DocxError::XmlParse(e.to_string()))?;
                state.push_text(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(DocxError::from(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(state.blocks)
}

/// Text of the first element with the given local name
fn element_text(content: &str, local_name: &str) -> DocxResult<Option<String>> {
    let mut reader = XmlParser::preserving(content);
    let mut buf = Vec::new();
    let mut inside = false;
    let mut text = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) if XmlParser::matches_element(e.name().as_ref(), local_name) => {
                inside = true;
            }
            Ok(Event::Text(ref e)) if inside => {
                let value = e
                    .unescape()
                    .map_err(|e| DocxError::XmlParse(e.to_string()))?;
                text.push_str(&value);
            }
            Ok(Event::End(ref e)) if inside && XmlParser::matches_element(e.name().as_ref(), local_name) => {
                return Ok(Some(text));
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => return Err(DocxError::from(e)),
            _ => {}
        }
        buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::export_docx_bytes;
    use doc_model::{
        Document, FieldCode, HeaderFooter, Paragraph, Run, Table, TableCell, TableGrid,
        TableProperties, TableRow,
    };

    fn cell(lines: &[&str]) -> TableCell {
        let mut cell = TableCell::new();
        for line in lines {
            cell.add_paragraph(Paragraph::new().with_run(Run::new(*line)));
        }
        cell
    }

    fn sample() -> Document {
        let mut document = Document::new();
        document.title = Some("Term & Test".to_string());
        document.footer = Some(HeaderFooter::new(vec![Paragraph::new()
            .with_run(Run::new("A   |   Page "))
            .with_run(Run::field(FieldCode::PageNumber))
            .with_run(Run::new(" of "))
            .with_run(Run::field(FieldCode::NumPages))]));

        let mut table = Table::new(
            TableGrid::with_fixed_columns(&[36.0, 72.0]),
            TableProperties::default(),
        );
        table
            .add_row(TableRow::new(vec![cell(&["Q1."]), cell(&["Name two gases.", " "])]))
            .unwrap();
        table.add_row(TableRow::new(vec![cell(&[]), cell(&[""])])).unwrap();
        document.add_table(table);
        document.add_paragraph(Paragraph::new().with_run(Run::new("x < y")));
        document
    }

    #[test]
    fn test_roundtrip_summary() {
        let bytes = export_docx_bytes(&sample()).unwrap();
        let summary = inspect_docx_bytes(&bytes).unwrap();

        assert_eq!(summary.title.as_deref(), Some("Term & Test"));
        assert_eq!(summary.paragraphs, vec!["x < y"]);
        assert_eq!(
            summary.table(0).unwrap(),
            &[
                vec!["Q1.".to_string(), "Name two gases.\n ".to_string()],
                vec![String::new(), String::new()],
            ]
        );
        assert_eq!(summary.footer.as_deref(), Some("A   |   Page 1 of 1"));
        assert!(summary.contains_text("two gases"));
        assert!(!summary.contains_text("three gases"));
    }

    #[test]
    fn test_page_size_in_points() {
        let bytes = export_docx_bytes(&Document::new()).unwrap();
        let (w, h) = inspect_docx_bytes(&bytes).unwrap().page_size.unwrap();
        assert!((w - 595.3).abs() < 0.1);
        assert!((h - 841.9).abs() < 0.1);
    }

    #[test]
    fn test_no_footer() {
        let bytes = export_docx_bytes(&Document::new()).unwrap();
        assert_eq!(inspect_docx_bytes(&bytes).unwrap().footer, None);
    }

    #[test]
    fn test_parts_listed() {
        let bytes = export_docx_bytes(&sample()).unwrap();
        let parts = inspect_docx_bytes(&bytes).unwrap().parts;
        assert_eq!(
            parts,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "docProps/app.xml",
                "docProps/core.xml",
                "word/_rels/document.xml.rels",
                "word/document.xml",
                "word/footer1.xml",
                "word/settings.xml",
                "word/styles.xml",
            ]
        );
    }

    fn package(files: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = zip::ZipWriter::new(Cursor::new(Vec::new()));
        for (name, content) in files {
            zip.start_file(*name, zip::write::SimpleFileOptions::default())
                .unwrap();
            std::io::Write::write_all(&mut zip, content.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    const BODY: &str = r#"<w:document xmlns:w="w"><w:body><w:p/></w:body></w:document>"#;

    #[test]
    fn test_main_part_content_type_checked() {
        let types = r#"<Types><Default Extension="xml" ContentType="application/xml"/></Types>"#;
        let bytes = package(&[("[Content_Types].xml", types), ("word/document.xml", BODY)]);
        assert!(matches!(
            inspect_docx_bytes(&bytes),
            Err(DocxError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_dangling_footer_reference() {
        let types = format!(
            r#"<Types><Override PartName="/word/document.xml" ContentType="{}"/></Types>"#,
            content_type_values::DOCUMENT
        );
        let body = r#"<w:document xmlns:w="w" xmlns:r="r"><w:body><w:sectPr><w:footerReference w:type="default" r:id="rId9"/></w:sectPr></w:body></w:document>"#;
        let rels = r#"<Relationships><Relationship Id="rId1" Type="styles" Target="styles.xml"/></Relationships>"#;
        let bytes = package(&[
            ("[Content_Types].xml", types.as_str()),
            ("word/document.xml", body),
            ("word/_rels/document.xml.rels", rels),
        ]);
        assert!(matches!(
            inspect_docx_bytes(&bytes),
            Err(DocxError::InvalidStructure(_))
        ));

        let bytes = package(&[("[Content_Types].xml", types.as_str()), ("word/document.xml", BODY)]);
        let summary = inspect_docx_bytes(&bytes).unwrap();
        assert_eq!(summary.footer, None);
        assert_eq!(summary.paragraphs, vec![""]);
    }

    #[test]
    fn test_not_a_zip() {
        assert!(matches!(
            inspect_docx_bytes(b"plain text"),
            Err(DocxError::Zip(_))
        ));
    }
}
