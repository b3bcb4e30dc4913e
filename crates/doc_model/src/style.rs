//! Character and paragraph formatting
//!
//! All lengths in this crate are expressed in points (1/72 inch).

use serde::{Deserialize, Serialize};

/// Points per inch
pub const POINTS_PER_INCH: f32 = 72.0;

/// Convert inches to points
pub fn inches(value: f32) -> f32 {
    value * POINTS_PER_INCH
}

/// Convert centimetres to points
pub fn cm(value: f32) -> f32 {
    value * POINTS_PER_INCH / 2.54
}

/// Horizontal paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

// =============================================================================
// Character Properties
// =============================================================================

/// Character formatting properties
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CharacterProperties {
    /// Font family name
    pub font_family: Option<String>,
    /// Font size in points
    pub font_size: Option<f32>,
    /// Bold formatting
    pub bold: Option<bool>,
    /// Italic formatting
    pub italic: Option<bool>,
    /// Underline formatting
    pub underline: Option<bool>,
    /// Text color (hex, with or without leading '#')
    pub color: Option<String>,
}

impl CharacterProperties {
    /// Create new empty character properties
    pub fn new() -> Self {
        Self::default()
    }

    /// Properties with a font family and size set
    pub fn font(family: impl Into<String>, size: f32) -> Self {
        Self {
            font_family: Some(family.into()),
            font_size: Some(size),
            ..Default::default()
        }
    }

    pub fn with_bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = Some(italic);
        self
    }

    pub fn with_underline(mut self, underline: bool) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Merge another set of properties on top of this one
    /// Properties from `other` override properties from `self` when present
    pub fn merge(&self, other: &CharacterProperties) -> CharacterProperties {
        CharacterProperties {
            font_family: other.font_family.clone().or_else(|| self.font_family.clone()),
            font_size: other.font_size.or(self.font_size),
            bold: other.bold.or(self.bold),
            italic: other.italic.or(self.italic),
            underline: other.underline.or(self.underline),
            color: other.color.clone().or_else(|| self.color.clone()),
        }
    }

    /// Check if all properties are None
    pub fn is_empty(&self) -> bool {
        self.font_family.is_none()
            && self.font_size.is_none()
            && self.bold.is_none()
            && self.italic.is_none()
            && self.underline.is_none()
            && self.color.is_none()
    }
}

// =============================================================================
// Paragraph Properties
// =============================================================================

/// Paragraph formatting properties
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParagraphProperties {
    /// Text alignment
    pub alignment: Option<Alignment>,
    /// Left indent in points
    pub indent_left: Option<f32>,
    /// Space before paragraph in points
    pub space_before: Option<f32>,
    /// Space after paragraph in points
    pub space_after: Option<f32>,
}

impl ParagraphProperties {
    /// Create new empty paragraph properties
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = Some(before);
        self.space_after = Some(after);
        self
    }

    pub fn with_indent_left(mut self, indent: f32) -> Self {
        self.indent_left = Some(indent);
        self
    }

    /// Merge another set of properties on top of this one
    pub fn merge(&self, other: &ParagraphProperties) -> ParagraphProperties {
        ParagraphProperties {
            alignment: other.alignment.or(self.alignment),
            indent_left: other.indent_left.or(self.indent_left),
            space_before: other.space_before.or(self.space_before),
            space_after: other.space_after.or(self.space_after),
        }
    }

    /// Check if all properties are None
    pub fn is_empty(&self) -> bool {
        self.alignment.is_none()
            && self.indent_left.is_none()
            && self.space_before.is_none()
            && self.space_after.is_none()
    }
}
