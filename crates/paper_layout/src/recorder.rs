//! In-memory sink that records every builder call

use crate::{PaperSink, Result};
use doc_model::{
    CharacterProperties, DocModelError, HeaderFooter, PageSetup, Paragraph, TableGrid,
    TableProperties, TableRow,
};

/// A single recorded sink call
#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Page {
        page: PageSetup,
        default_font: CharacterProperties,
    },
    Footer(HeaderFooter),
    Paragraph(Paragraph),
    TableStarted {
        grid: TableGrid,
        properties: TableProperties,
    },
    Row(TableRow),
}

/// Records sink calls in order for later inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Vec<SinkEvent>,
    table_open: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in call order
    pub fn events(&self) -> &[SinkEvent] {
        &self.events
    }

    /// Number of tables started
    pub fn table_count(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SinkEvent::TableStarted { .. }))
            .count()
    }

    /// Rows of the table at `index`, in order
    pub fn rows(&self, index: usize) -> Vec<&TableRow> {
        let mut table = None;
        let mut rows = Vec::new();
        for event in &self.events {
            match event {
                SinkEvent::TableStarted { .. } => {
                    table = Some(table.map_or(0, |t| t + 1));
                }
                SinkEvent::Row(row) if table == Some(index) => rows.push(row),
                _ => {}
            }
        }
        rows
    }

    /// Cell texts of each row of the table at `index`
    pub fn row_texts(&self, index: usize) -> Vec<Vec<String>> {
        self.rows(index)
            .into_iter()
            .map(|row| row.cells.iter().map(|c| c.plain_text()).collect())
            .collect()
    }

    /// Body-level paragraphs in order
    pub fn paragraphs(&self) -> Vec<&Paragraph> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Paragraph(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    /// The most recently set footer
    pub fn footer(&self) -> Option<&HeaderFooter> {
        self.events.iter().rev().find_map(|e| match e {
            SinkEvent::Footer(footer) => Some(footer),
            _ => None,
        })
    }
}

impl PaperSink for RecordingSink {
    fn set_page(&mut self, page: PageSetup, default_font: CharacterProperties) -> Result<()> {
        self.events.push(SinkEvent::Page { page, default_font });
        Ok(())
    }

    fn set_footer(&mut self, footer: HeaderFooter) -> Result<()> {
        self.events.push(SinkEvent::Footer(footer));
        Ok(())
    }

    fn append_paragraph(&mut self, paragraph: Paragraph) -> Result<()> {
        self.table_open = false;
        self.events.push(SinkEvent::Paragraph(paragraph));
        Ok(())
    }

    fn start_table(&mut self, grid: TableGrid, properties: TableProperties) -> Result<()> {
        self.table_open = true;
        self.events.push(SinkEvent::TableStarted { grid, properties });
        Ok(())
    }

    fn append_row(&mut self, row: TableRow) -> Result<()> {
        if !self.table_open {
            return Err(DocModelError::NoOpenTable.into());
        }
        tracing::trace!("Recorded row with {} cells", row.cell_count());
        self.events.push(SinkEvent::Row(row));
        Ok(())
    }
}
