//! The output sink the builders write into

use crate::Result;
use doc_model::{
    CharacterProperties, Document, HeaderFooter, PageSetup, Paragraph, Table, TableGrid,
    TableProperties, TableRow,
};

/// Incremental document output
///
/// Builders only ever append: rows go to the most recently started table,
/// and a paragraph appended after a table closes it.
pub trait PaperSink {
    /// Page size, margins and the document default font
    fn set_page(&mut self, page: PageSetup, default_font: CharacterProperties) -> Result<()>;

    /// Footer repeated on every page
    fn set_footer(&mut self, footer: HeaderFooter) -> Result<()>;

    /// Append a body-level paragraph
    fn append_paragraph(&mut self, paragraph: Paragraph) -> Result<()>;

    /// Open a new table; subsequent rows are added to it
    fn start_table(&mut self, grid: TableGrid, properties: TableProperties) -> Result<()>;

    /// Append a row to the open table
    fn append_row(&mut self, row: TableRow) -> Result<()>;
}

impl PaperSink for Document {
    fn set_page(&mut self, page: PageSetup, default_font: CharacterProperties) -> Result<()> {
        self.page = page;
        self.default_font = default_font;
        Ok(())
    }

    fn set_footer(&mut self, footer: HeaderFooter) -> Result<()> {
        self.footer = Some(footer);
        Ok(())
    }

    fn append_paragraph(&mut self, paragraph: Paragraph) -> Result<()> {
        self.add_paragraph(paragraph);
        Ok(())
    }

    fn start_table(&mut self, grid: TableGrid, properties: TableProperties) -> Result<()> {
        self.add_table(Table::new(grid, properties));
        Ok(())
    }

    fn append_row(&mut self, row: TableRow) -> Result<()> {
        Document::append_row(self, row)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutError;
    use doc_model::{DocModelError, TableCell};

    #[test]
    fn test_document_sink() {
        let mut doc = Document::new();
        let sink: &mut dyn PaperSink = &mut doc;

        sink.set_page(PageSetup::default(), CharacterProperties::font("Arial", 11.0))
            .unwrap();
        sink.start_table(TableGrid::with_fixed_columns(&[72.0]), TableProperties::default())
            .unwrap();
        sink.append_row(TableRow::new(vec![TableCell::new()])).unwrap();
        sink.append_paragraph(Paragraph::new()).unwrap();

        assert_eq!(doc.default_font.font_family.as_deref(), Some("Arial"));
        assert_eq!(doc.tables().count(), 1);
        assert_eq!(doc.paragraphs().count(), 1);
    }

    #[test]
    fn test_document_sink_rejects_bad_rows() {
        let mut doc = Document::new();
        let err = PaperSink::append_row(&mut doc, TableRow::default()).unwrap_err();
        assert!(matches!(err, LayoutError::Model(DocModelError::NoOpenTable)));

        doc.start_table(TableGrid::with_fixed_columns(&[72.0, 72.0]), TableProperties::default())
            .unwrap();
        let err = PaperSink::append_row(&mut doc, TableRow::new(vec![TableCell::new()]))
            .unwrap_err();
        assert!(matches!(
            err,
            LayoutError::Model(DocModelError::ColumnMismatch { expected: 2, found: 1 })
        ));
    }
}
