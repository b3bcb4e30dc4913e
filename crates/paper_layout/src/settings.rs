//! Layout settings
//!
//! Fonts, column widths and colours used by the builders. The defaults
//! reproduce the standard school paper layout; a JSON file may override
//! any subset of fields.

use crate::Result;
use doc_model::{inches, CharacterProperties, PageSetup};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Layout settings container
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LayoutSettings {
    /// Font family for every run in the paper
    pub font_family: String,
    /// Document default font size in points
    pub font_size: f32,
    /// Question table columns (number, question, marks) in inches
    pub column_widths: [f32; 3],
    /// Width of the header table in inches
    pub header_width: f32,
    /// Fill of the "Questions / Marks" header row
    pub header_shading: String,
    /// Fill of section header rows
    pub section_shading: String,
    /// Colour of the rule under each answer line
    pub answer_line_color: String,
    /// Separator between the segments of the info lines
    pub info_separator: String,
    /// Page size and margins
    pub page: PageSetup,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            font_family: "Times New Roman".to_string(),
            font_size: 12.0,
            column_widths: [0.5, 5.3, 0.6],
            header_width: 6.3,
            header_shading: "E0E0E0".to_string(),
            section_shading: "F5F5F5".to_string(),
            answer_line_color: "AAAAAA".to_string(),
            info_separator: "     |     ".to_string(),
            page: PageSetup::default(),
        }
    }
}

impl LayoutSettings {
    /// Load settings from a JSON file
    ///
    /// A missing file yields the defaults. A file that cannot be parsed is
    /// logged and also yields the defaults; only read failures are errors.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<LayoutSettings>(&content) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                tracing::warn!("Failed to parse settings file, using defaults: {}", e);
                Ok(Self::default())
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// A run style in the paper font at the given size
    pub fn font(&self, size: f32) -> CharacterProperties {
        CharacterProperties::font(self.font_family.clone(), size)
    }

    /// Question table column widths in points
    pub fn column_widths_pt(&self) -> [f32; 3] {
        self.column_widths.map(inches)
    }
}
