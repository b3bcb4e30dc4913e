//! ZIP archive reading and XML parsing utilities

use crate::docx::error::{DocxError, DocxResult};
use quick_xml::events::BytesStart;
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// A wrapper around a ZIP archive for reading DOCX files
pub struct DocxReader<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> DocxReader<R> {
    /// Create a new DOCX reader from a source that implements Read + Seek
    pub fn new(reader: R) -> DocxResult<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Read a file from the archive as a string
    pub fn read_file_as_string(&mut self, path: &str) -> DocxResult<String> {
        let mut file = self.archive.by_name(path).map_err(|e| {
            if matches!(e, zip::result::ZipError::FileNotFound) {
                DocxError::MissingPart(path.to_string())
            } else {
                DocxError::from(e)
            }
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    /// Read a file if it is present in the archive
    pub fn read_optional(&mut self, path: &str) -> DocxResult<Option<String>> {
        if self.file_exists(path) {
            self.read_file_as_string(path).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Check if a file exists in the archive
    pub fn file_exists(&self, path: &str) -> bool {
        self.archive.file_names().any(|name| name == path)
    }

    /// Get a list of all files in the archive
    pub fn file_names(&self) -> Vec<&str> {
        self.archive.file_names().collect()
    }

    /// Check if this is a valid DOCX file
    pub fn is_valid_docx(&self) -> bool {
        // Must have [Content_Types].xml and word/document.xml
        self.file_exists("[Content_Types].xml") && self.file_exists("word/document.xml")
    }
}

/// XML reader utilities for parsing DOCX XML content
pub struct XmlParser;

impl XmlParser {
    /// Create a new XML reader from a string, trimming whitespace-only text
    pub fn from_string(content: &str) -> Reader<&[u8]> {
        let mut reader = Reader::from_str(content);
        reader.config_mut().trim_text(true);
        reader
    }

    /// Create an XML reader that keeps text exactly as written
    ///
    /// Needed for run text, where leading and trailing spaces matter.
    pub fn preserving(content: &str) -> Reader<&[u8]> {
        Reader::from_str(content)
    }

    /// Get an attribute value from an event
    pub fn get_attribute(event: &BytesStart, name: &[u8]) -> Option<String> {
        event
            .attributes()
            .filter_map(|a| a.ok())
            .find(|a| a.key.as_ref() == name)
            .map(|a| String::from_utf8_lossy(&a.value).to_string())
    }

    /// Get a w: namespaced attribute (most common in DOCX)
    pub fn get_w_attribute(event: &BytesStart, name: &str) -> Option<String> {
        let key = format!("w:{}", name);
        Self::get_attribute(event, key.as_bytes())
            .or_else(|| Self::get_attribute(event, name.as_bytes()))
    }

    /// Parse a dimension value (twips to points conversion)
    /// DOCX uses twips (1/20 of a point) for many measurements
    pub fn parse_twips(value: &str) -> Option<f32> {
        value.parse::<f32>().ok().map(|v| v / 20.0)
    }

    /// Check if an element name matches with optional namespace prefix
    pub fn matches_element(name: &[u8], expected: &str) -> bool {
        let name_str = std::str::from_utf8(name).unwrap_or("");
        name_str == expected
            || name_str
                .split_once(':')
                .is_some_and(|(_, local)| local == expected)
    }
}
