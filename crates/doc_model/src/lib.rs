//! Document Model - Output document structure
//!
//! This crate provides the page-oriented document model that layout code
//! writes into and serializers read from: page setup, a footer, body-level
//! paragraphs and grid tables with per-cell borders and shading.

mod document;
mod error;
mod field;
mod paragraph;
pub mod section;
pub mod style;
pub mod table;

pub use document::*;
pub use error::*;
pub use field::*;
pub use paragraph::*;
pub use section::*;
pub use style::*;
pub use table::*;
