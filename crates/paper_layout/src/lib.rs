//! Paper Layout - Turns an exam paper request into a page-oriented document
//!
//! Layout runs in two linear passes over a [`PaperSink`]:
//! - the header pass writes page setup, the title/info/instructions table,
//!   the page footer and a spacer paragraph
//! - the body pass writes one flowing three-column question table
//!
//! The sink is either a [`doc_model::Document`] (for export) or a
//! [`RecordingSink`] (for inspection in tests).

mod body;
mod duration;
mod error;
mod generate;
mod header;
mod numbering;
mod recorder;
mod row;
mod settings;
mod sink;

pub use body::*;
pub use duration::*;
pub use error::*;
pub use generate::*;
pub use header::*;
pub use numbering::*;
pub use recorder::*;
pub use row::*;
pub use settings::*;
pub use sink::*;
