//! Exam Model - the exam paper request
//!
//! This crate turns the JSON request payload into a typed tree:
//! metadata, general instructions, and sections of questions with their
//! parts and subparts. Every key is optional on the wire; absent values
//! resolve to empty strings, empty lists or `None`.

mod error;
mod metadata;
mod paper;
mod question;
mod section;
pub mod subjects;
mod value;

pub use error::*;
pub use metadata::*;
pub use paper::*;
pub use question::*;
pub use section::*;
pub use subjects::{find_subject, Subject, SUBJECTS};
