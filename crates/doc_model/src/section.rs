//! Page setup and footer
//!
//! The model supports a single section: one page size, one set of margins
//! and one default footer repeated on every page.

use crate::{cm, inches, Paragraph};
use serde::{Deserialize, Serialize};

// =============================================================================
// Page Size
// =============================================================================

/// Page size configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageSize {
    /// Width in points
    pub width: f32,
    /// Height in points
    pub height: f32,
}

impl PageSize {
    /// Create a custom page size
    pub fn custom(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Create an A4-sized page (21cm x 29.7cm)
    pub fn a4() -> Self {
        Self::custom(cm(21.0), cm(29.7))
    }

    /// Create a Letter-sized page
    pub fn letter() -> Self {
        Self::custom(612.0, 792.0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::a4()
    }
}

// =============================================================================
// Page Margins
// =============================================================================

/// Page margin configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageMargins {
    /// Top margin in points
    pub top: f32,
    /// Bottom margin in points
    pub bottom: f32,
    /// Left margin in points
    pub left: f32,
    /// Right margin in points
    pub right: f32,
    /// Distance from page edge to header content
    pub header: f32,
    /// Distance from page edge to footer content
    pub footer: f32,
}

impl PageMargins {
    /// The same margin on all four sides
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            bottom: value,
            left: value,
            right: value,
            header: 36.0, // 0.5 inch from edge
            footer: 36.0,
        }
    }

    /// Create normal margins (1 inch all around)
    pub fn normal() -> Self {
        Self::uniform(inches(1.0))
    }
}

impl Default for PageMargins {
    fn default() -> Self {
        Self::normal()
    }
}

/// Page size plus margins
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PageSetup {
    pub size: PageSize,
    pub margins: PageMargins,
}

impl PageSetup {
    /// Width available for content between the side margins
    pub fn content_width(&self) -> f32 {
        self.size.width - self.margins.left - self.margins.right
    }
}

// =============================================================================
// Header/Footer
// =============================================================================

/// A header or footer container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderFooter {
    pub paragraphs: Vec<Paragraph>,
}

impl HeaderFooter {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self { paragraphs }
    }

    /// Check if this header/footer has any content
    pub fn has_content(&self) -> bool {
        self.paragraphs.iter().any(|p| !p.is_empty())
    }
}
