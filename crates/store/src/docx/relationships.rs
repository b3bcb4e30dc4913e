//! Relationships (.rels) file parsing and generation
//!
//! DOCX uses relationships to connect parts of the document together.

use crate::docx::error::{DocxError, DocxResult};
use crate::docx::namespaces;
use crate::docx::reader::XmlParser;
use crate::docx::relationship_types;
use quick_xml::events::Event;
use std::collections::BTreeMap;

/// A single relationship in a .rels file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// Unique ID within the rels file (e.g., "rId1")
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path (relative to the source part)
    pub target: String,
}

/// Collection of relationships from a .rels file
#[derive(Debug, Clone)]
pub struct Relationships {
    relationships: BTreeMap<u32, Relationship>,
    next_id: u32,
}

impl Default for Relationships {
    fn default() -> Self {
        Self::new()
    }
}

impl Relationships {
    /// Create a new empty relationships collection
    pub fn new() -> Self {
        Self {
            relationships: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Parse a .rels file from its XML content
    pub fn parse(content: &str) -> DocxResult<Self> {
        let mut result = Self::new();
        let mut reader = XmlParser::from_string(content);
        let mut buf = Vec::new();

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e)) => {
                    let name = e.name();
                    if XmlParser::matches_element(name.as_ref(), "Relationship") {
                        let id = XmlParser::get_attribute(e, b"Id").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Id".into())
                        })?;
                        let rel_type = XmlParser::get_attribute(e, b"Type").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Type".into())
                        })?;
                        let target = XmlParser::get_attribute(e, b"Target").ok_or_else(|| {
                            DocxError::InvalidStructure("Relationship missing Target".into())
                        })?;

                        let num = id
                            .strip_prefix("rId")
                            .and_then(|n| n.parse::<u32>().ok())
                            .ok_or_else(|| {
                                DocxError::InvalidStructure(format!(
                                    "Unsupported relationship id: {}",
                                    id
                                ))
                            })?;

                        result.next_id = result.next_id.max(num + 1);
                        result.relationships.insert(
                            num,
                            Relationship {
                                id,
                                rel_type,
                                target,
                            },
                        );
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(DocxError::from(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(result)
    }

    /// Add a relationship and return its ID
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let num = self.next_id;
        self.next_id += 1;

        let id = format!("rId{}", num);
        self.relationships.insert(
            num,
            Relationship {
                id: id.clone(),
                rel_type: rel_type.to_string(),
                target: target.to_string(),
            },
        );

        id
    }

    /// Get a relationship by ID
    pub fn get(&self, id: &str) -> Option<&Relationship> {
        self.relationships.values().find(|r| r.id == id)
    }

    /// Get a relationship by type
    pub fn get_by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.relationships.values().find(|r| r.rel_type == rel_type)
    }

    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }

    /// Generate XML content for the .rels file
    pub fn to_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<Relationships xmlns="{}">"#,
            namespaces::PKG_REL
        ));

        for rel in self.relationships.values() {
            xml.push_str(&format!(
                r#"<Relationship Id="{}" Type="{}" Target="{}"/>"#,
                rel.id, rel.rel_type, rel.target
            ));
        }

        xml.push_str("</Relationships>");
        xml
    }
}

/// Create the root .rels file for a new DOCX
pub fn create_root_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::DOCUMENT, "word/document.xml");
    rels.add(relationship_types::CORE_PROPERTIES, "docProps/core.xml");
    rels.add(relationship_types::EXTENDED_PROPERTIES, "docProps/app.xml");
    rels
}

/// Create the document.xml.rels for a new DOCX
pub fn create_document_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add(relationship_types::STYLES, "styles.xml");
    rels.add(relationship_types::SETTINGS, "settings.xml");
    rels
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationships_parsing() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
    <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
    <Relationship Id="rId4" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer" Target="footer1.xml"/>
</Relationships>"#;

        let mut rels = Relationships::parse(xml).unwrap();
        assert_eq!(rels.len(), 2);
        assert_eq!(rels.get("rId1").unwrap().target, "word/document.xml");
        assert_eq!(
            rels.get_by_type(relationship_types::FOOTER).unwrap().id,
            "rId4"
        );

        // New ids continue after the highest parsed one
        assert_eq!(rels.add(relationship_types::STYLES, "styles.xml"), "rId5");
    }

    #[test]
    fn test_missing_attribute_is_error() {
        let xml = r#"<Relationships><Relationship Id="rId1" Target="x.xml"/></Relationships>"#;
        assert!(matches!(
            Relationships::parse(xml),
            Err(DocxError::InvalidStructure(_))
        ));
    }

    #[test]
    fn test_add_relationship() {
        let mut rels = Relationships::new();
        assert!(rels.is_empty());
        let id1 = rels.add(relationship_types::DOCUMENT, "word/document.xml");
        let id2 = rels.add(relationship_types::STYLES, "word/styles.xml");

        assert_eq!(id1, "rId1");
        assert_eq!(id2, "rId2");
        assert!(rels.get("rId2").is_some());
    }

    #[test]
    fn test_default_rels() {
        let root = create_root_rels();
        assert_eq!(
            root.get_by_type(relationship_types::DOCUMENT).unwrap().target,
            "word/document.xml"
        );
        assert!(root.get_by_type(relationship_types::CORE_PROPERTIES).is_some());

        let doc = create_document_rels();
        assert!(doc.get_by_type(relationship_types::STYLES).is_some());
        assert!(doc.get_by_type(relationship_types::FOOTER).is_none());
    }

    #[test]
    fn test_to_xml_roundtrip() {
        let original = create_root_rels();
        let xml = original.to_xml();
        let parsed = Relationships::parse(&xml).unwrap();

        assert_eq!(original.len(), parsed.len());
        assert_eq!(
            parsed.get_by_type(relationship_types::EXTENDED_PROPERTIES),
            original.get_by_type(relationship_types::EXTENDED_PROPERTIES)
        );
    }
}
