//! Paragraphs and text runs

use crate::{Alignment, CharacterProperties, FieldCode, ParagraphProperties};
use serde::{Deserialize, Serialize};

/// What a run displays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunContent {
    /// Literal text
    Text(String),
    /// A live field evaluated by the consuming application
    Field(FieldCode),
}

/// A text run - contiguous content with consistent formatting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Run {
    /// The content of this run
    pub content: RunContent,
    /// Direct formatting
    #[serde(default)]
    pub properties: CharacterProperties,
}

impl Run {
    /// Create a new text run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            content: RunContent::Text(text.into()),
            properties: CharacterProperties::default(),
        }
    }

    /// Create a run holding a live field
    pub fn field(code: FieldCode) -> Self {
        Self {
            content: RunContent::Field(code),
            properties: CharacterProperties::default(),
        }
    }

    /// Replace the formatting of this run
    pub fn with_properties(mut self, properties: CharacterProperties) -> Self {
        self.properties = properties;
        self
    }

    /// The literal text, if this is a text run
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            RunContent::Text(text) => Some(text),
            RunContent::Field(_) => None,
        }
    }

    pub fn is_bold(&self) -> bool {
        self.properties.bold == Some(true)
    }

    pub fn is_italic(&self) -> bool {
        self.properties.italic == Some(true)
    }
}

/// A paragraph - a block of runs sharing paragraph formatting
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph formatting
    #[serde(default)]
    pub properties: ParagraphProperties,
    /// Runs in display order
    #[serde(default)]
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty paragraph with the given formatting
    pub fn with_properties(properties: ParagraphProperties) -> Self {
        Self {
            properties,
            runs: Vec::new(),
        }
    }

    /// Append a run (builder style)
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a run
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Concatenated text of all text runs; fields show their placeholder
    pub fn plain_text(&self) -> String {
        self.runs
            .iter()
            .map(|run| match &run.content {
                RunContent::Text(text) => text.as_str(),
                RunContent::Field(code) => code.placeholder(),
            })
            .collect()
    }

    /// Check if the paragraph has no runs
    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    pub fn alignment(&self) -> Alignment {
        self.properties.alignment.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_with_fields() {
        let para = Paragraph::new()
            .with_run(Run::new("Page "))
            .with_run(Run::field(FieldCode::PageNumber))
            .with_run(Run::new(" of "))
            .with_run(Run::field(FieldCode::NumPages));

        assert_eq!(para.plain_text(), "Page 1 of 1");
        assert_eq!(para.runs[1].text(), None);
    }

    #[test]
    fn test_run_formatting_flags() {
        let run = Run::new("Bold").with_properties(CharacterProperties::new().with_bold(true));
        assert!(run.is_bold());
        assert!(!run.is_italic());
    }

    #[test]
    fn test_serde_roundtrip() {
        let para = Paragraph::with_properties(
            ParagraphProperties::new().with_alignment(Alignment::Center),
        )
        .with_run(Run::new("Hello"));

        let json = serde_json::to_string(&para).unwrap();
        let back: Paragraph = serde_json::from_str(&json).unwrap();
        assert_eq!(back, para);
        assert_eq!(back.alignment(), Alignment::Center);
    }
}
