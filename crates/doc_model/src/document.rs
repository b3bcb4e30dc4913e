//! Document root - page setup, footer and the ordered body

use crate::{
    CharacterProperties, DocModelError, HeaderFooter, PageSetup, Paragraph, Result, Table,
    TableRow,
};
use serde::{Deserialize, Serialize};

/// A body-level block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    Table(Table),
}

/// A complete document ready for serialization
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Document title (written to the package properties)
    pub title: Option<String>,
    /// Page size and margins
    pub page: PageSetup,
    /// Default run formatting for the whole document
    pub default_font: CharacterProperties,
    /// Footer repeated on every page
    pub footer: Option<HeaderFooter>,
    /// Body content in order
    pub body: Vec<Block>,
}

impl Document {
    /// Create an empty document with default page setup
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a paragraph to the body
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.body.push(Block::Paragraph(paragraph));
    }

    /// Append a table to the body; rows go to the last table added
    pub fn add_table(&mut self, table: Table) {
        self.body.push(Block::Table(table));
    }

    /// Append a row to the most recently added table
    ///
    /// Fails if a paragraph was appended after the table, since the
    /// table is then no longer the open block.
    pub fn append_row(&mut self, row: TableRow) -> Result<()> {
        match self.body.last_mut() {
            Some(Block::Table(table)) => table.add_row(row),
            _ => Err(DocModelError::NoOpenTable),
        }
    }

    /// All tables in body order
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.body.iter().filter_map(|block| match block {
            Block::Table(table) => Some(table),
            Block::Paragraph(_) => None,
        })
    }

    /// All body-level paragraphs in order
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.body.iter().filter_map(|block| match block {
            Block::Paragraph(para) => Some(para),
            Block::Table(_) => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Run, TableCell, TableGrid, TableProperties};

    fn one_cell_row(text: &str) -> TableRow {
        let mut cell = TableCell::new();
        cell.add_paragraph(Paragraph::new().with_run(Run::new(text)));
        TableRow::new(vec![cell])
    }

    #[test]
    fn test_append_row_targets_last_table() {
        let mut doc = Document::new();
        doc.add_table(Table::new(TableGrid::with_fixed_columns(&[100.0]), TableProperties::default()));
        doc.append_row(one_cell_row("first")).unwrap();
        doc.add_table(Table::new(TableGrid::with_fixed_columns(&[100.0]), TableProperties::default()));
        doc.append_row(one_cell_row("second")).unwrap();
        doc.append_row(one_cell_row("third")).unwrap();

        let counts: Vec<usize> = doc.tables().map(Table::row_count).collect();
        assert_eq!(counts, vec![1, 2]);
    }

    #[test]
    fn test_append_row_without_table() {
        let mut doc = Document::new();
        assert!(matches!(doc.append_row(one_cell_row("x")), Err(DocModelError::NoOpenTable)));

        doc.add_table(Table::new(TableGrid::with_fixed_columns(&[100.0]), TableProperties::default()));
        doc.add_paragraph(Paragraph::new());
        assert!(matches!(doc.append_row(one_cell_row("x")), Err(DocModelError::NoOpenTable)));
        assert_eq!(doc.paragraphs().count(), 1);
    }
}
