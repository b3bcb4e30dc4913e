//! Package property parts: docProps/core.xml and docProps/app.xml

use crate::docx::{escape_xml, namespaces};
use chrono::{DateTime, Utc};

/// Application name recorded in app.xml
pub const APPLICATION: &str = "exam-paper";

/// Writer for the core and extended property parts
#[derive(Debug, Clone)]
pub struct PropertiesWriter {
    title: Option<String>,
    created: DateTime<Utc>,
}

impl PropertiesWriter {
    /// Properties stamped with the current time
    pub fn new(title: Option<&str>) -> Self {
        Self::at(title, Utc::now())
    }

    /// Properties stamped with a fixed time
    pub fn at(title: Option<&str>, created: DateTime<Utc>) -> Self {
        Self {
            title: title.map(str::to_string),
            created,
        }
    }

    /// Generate docProps/core.xml
    pub fn core_xml(&self) -> String {
        let stamp = self.created.format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(
            r#"<cp:coreProperties xmlns:cp="{}" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#,
            namespaces::CP
        ));

        if let Some(ref title) = self.title {
            xml.push_str(&format!("<dc:title>{}</dc:title>", escape_xml(title)));
        }
        xml.push_str(&format!(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>"#,
            stamp
        ));
        xml.push_str(&format!(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>"#,
            stamp
        ));

        xml.push_str("</cp:coreProperties>");
        xml
    }

    /// Generate docProps/app.xml
    pub fn app_xml(&self) -> String {
        let mut xml = String::new();
        xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        xml.push('\n');
        xml.push_str(&format!(r#"<Properties xmlns="{}">"#, namespaces::EP));
        xml.push_str(&format!("<Application>{}</Application>", APPLICATION));
        xml.push_str("</Properties>");
        xml
    }
}
