//! The complete exam paper request

use crate::value;
use crate::{ExamMetadata, Result, Section};
use serde::Deserialize;

/// Top-level request: metadata, general instructions and sections
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ExamPaper {
    #[serde(deserialize_with = "value::or_default")]
    pub metadata: ExamMetadata,
    #[serde(deserialize_with = "value::text_list")]
    pub instructions: Vec<String>,
    #[serde(deserialize_with = "value::list")]
    pub sections: Vec<Section>,
}

impl ExamPaper {
    /// Parse a request body
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a request body from raw bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Convert an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Sections that will be rendered
    pub fn enabled_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|s| s.enabled)
    }

    /// Number of questions across enabled sections
    pub fn question_count(&self) -> usize {
        self.enabled_sections().map(|s| s.questions.len()).sum()
    }
}
