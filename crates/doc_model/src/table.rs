//! Table model - Tables, rows, cells, and grid definitions
//!
//! Tables are flat: a fixed column grid and an ordered list of rows. Every
//! row holds one cell per grid column; cells carry their own borders and
//! shading so that a single table can mix boxed, ruled and borderless rows.

use crate::{DocModelError, Paragraph, Result};
use serde::{Deserialize, Serialize};

// =============================================================================
// Border Styles
// =============================================================================

/// Border style type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableBorderStyle {
    #[default]
    None,
    Single,
}

/// A single border definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBorder {
    /// Border style
    pub style: TableBorderStyle,
    /// Border width in points
    pub width: f32,
    /// Border color (hex, with or without leading '#')
    pub color: String,
}

impl Default for TableBorder {
    fn default() -> Self {
        Self {
            style: TableBorderStyle::Single,
            width: 0.5,
            color: "000000".to_string(),
        }
    }
}

impl TableBorder {
    /// Create a simple single-line border
    pub fn single(width: f32, color: &str) -> Self {
        Self {
            style: TableBorderStyle::Single,
            width,
            color: color.to_string(),
        }
    }

    /// Create a border with no line
    pub fn none() -> Self {
        Self {
            style: TableBorderStyle::None,
            width: 0.0,
            color: String::new(),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.style != TableBorderStyle::None
    }
}

/// Cell borders (all four sides)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellBorders {
    pub top: Option<TableBorder>,
    pub bottom: Option<TableBorder>,
    pub left: Option<TableBorder>,
    pub right: Option<TableBorder>,
}

impl CellBorders {
    /// Create borders with all sides the same
    pub fn all(border: TableBorder) -> Self {
        Self {
            top: Some(border.clone()),
            bottom: Some(border.clone()),
            left: Some(border.clone()),
            right: Some(border),
        }
    }

    /// All four sides explicitly switched off
    pub fn none() -> Self {
        Self::all(TableBorder::none())
    }
}

// =============================================================================
// Grid
// =============================================================================

/// A column definition in the table grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridColumn {
    /// Column width in points
    pub width: f32,
}

/// Table grid - the column layout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableGrid {
    pub columns: Vec<GridColumn>,
}

impl TableGrid {
    /// Create a grid with fixed column widths (in points)
    pub fn with_fixed_columns(widths: &[f32]) -> Self {
        Self {
            columns: widths.iter().map(|&width| GridColumn { width }).collect(),
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total width of all columns in points
    pub fn total_width(&self) -> f32 {
        self.columns.iter().map(|c| c.width).sum()
    }
}

// =============================================================================
// Cells and Rows
// =============================================================================

/// Properties for a table cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellProperties {
    /// Cell borders
    pub borders: Option<CellBorders>,
    /// Cell background/shading color (hex)
    pub shading: Option<String>,
    /// Cell width in points
    pub width: Option<f32>,
}

impl CellProperties {
    /// Create default cell properties
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shading(mut self, color: &str) -> Self {
        self.shading = Some(color.to_string());
        self
    }

    pub fn with_borders(mut self, borders: CellBorders) -> Self {
        self.borders = Some(borders);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }
}

/// A table cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableCell {
    pub properties: CellProperties,
    /// Cell content; an empty cell still renders one empty paragraph
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_properties(properties: CellProperties) -> Self {
        Self {
            properties,
            paragraphs: Vec::new(),
        }
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Text of all paragraphs joined by newlines
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A table row
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self { cells }
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, index: usize) -> Option<&TableCell> {
        self.cells.get(index)
    }
}

// =============================================================================
// Table
// =============================================================================

/// Horizontal table alignment on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TableAlignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Table-level properties
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableProperties {
    /// Table style reference (e.g. "TableGrid")
    pub style_id: Option<String>,
    pub alignment: Option<TableAlignment>,
}

/// A table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub properties: TableProperties,
    pub grid: TableGrid,
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn new(grid: TableGrid, properties: TableProperties) -> Self {
        Self {
            properties,
            grid,
            rows: Vec::new(),
        }
    }

    /// Append a row, checking it against the grid
    pub fn add_row(&mut self, row: TableRow) -> Result<()> {
        let expected = self.grid.column_count();
        if row.cell_count() != expected {
            return Err(DocModelError::ColumnMismatch {
                expected,
                found: row.cell_count(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}
