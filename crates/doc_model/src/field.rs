//! Live field codes (page numbering in headers/footers)

use serde::{Deserialize, Serialize};

/// Field codes for dynamic content in headers/footers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldCode {
    /// Current page number
    PageNumber,
    /// Total number of pages
    NumPages,
}

impl FieldCode {
    /// Get the field code string representation
    pub fn code_string(&self) -> &'static str {
        match self {
            FieldCode::PageNumber => "PAGE",
            FieldCode::NumPages => "NUMPAGES",
        }
    }

    /// Parse a field code from an instruction string
    pub fn from_code_string(s: &str) -> Option<Self> {
        match s.trim().split_whitespace().next()?.to_uppercase().as_str() {
            "PAGE" => Some(FieldCode::PageNumber),
            "NUMPAGES" => Some(FieldCode::NumPages),
            _ => None,
        }
    }

    /// Text shown until the consuming application updates the field
    pub fn placeholder(&self) -> &'static str {
        "1"
    }
}
