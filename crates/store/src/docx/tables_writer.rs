//! Table writer for DOCX files
//!
//! Generates w:tbl elements from doc_model tables.

use crate::docx::document_writer::write_paragraph;
use crate::docx::error::DocxResult;
use crate::docx::twips;
use doc_model::{
    CellProperties, Table, TableAlignment, TableBorder, TableBorderStyle, TableCell, TableRow,
};

/// Writer for table elements
#[derive(Debug, Default)]
pub struct TableWriter;

impl TableWriter {
    /// Create a new table writer
    pub fn new() -> Self {
        Self
    }

    /// Write a table element
    pub fn write_table(&self, xml: &mut String, table: &Table) -> DocxResult<()> {
        xml.push_str("<w:tbl>");

        self.write_table_properties(xml, table);
        self.write_table_grid(xml, table);

        for row in &table.rows {
            self.write_table_row(xml, row)?;
        }

        xml.push_str("</w:tbl>");
        Ok(())
    }

    /// Write table properties in schema order
    fn write_table_properties(&self, xml: &mut String, table: &Table) {
        let props = &table.properties;

        xml.push_str("<w:tblPr>");

        if let Some(ref style) = props.style_id {
            xml.push_str(&format!(r#"<w:tblStyle w:val="{}"/>"#, style));
        }

        xml.push_str(&format!(
            r#"<w:tblW w:w="{}" w:type="dxa"/>"#,
            twips(table.grid.total_width())
        ));

        if let Some(alignment) = props.alignment {
            let val = match alignment {
                TableAlignment::Left => "left",
                TableAlignment::Center => "center",
                TableAlignment::Right => "right",
            };
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, val));
        }

        // Column widths are authoritative
        xml.push_str(r#"<w:tblLayout w:type="fixed"/>"#);

        xml.push_str("<w:tblCellMar>");
        xml.push_str(r#"<w:top w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:left w:w="108" w:type="dxa"/>"#);
        xml.push_str(r#"<w:bottom w:w="0" w:type="dxa"/>"#);
        xml.push_str(r#"<w:right w:w="108" w:type="dxa"/>"#);
        xml.push_str("</w:tblCellMar>");

        xml.push_str(r#"<w:tblLook w:val="04A0" w:firstRow="1" w:lastRow="0" w:firstColumn="1" w:lastColumn="0" w:noHBand="0" w:noVBand="1"/>"#);

        xml.push_str("</w:tblPr>");
    }

    /// Write table grid
    fn write_table_grid(&self, xml: &mut String, table: &Table) {
        xml.push_str("<w:tblGrid>");

        for col in &table.grid.columns {
            xml.push_str(&format!(r#"<w:gridCol w:w="{}"/>"#, twips(col.width)));
        }

        xml.push_str("</w:tblGrid>");
    }

    /// Write a table row
    fn write_table_row(&self, xml: &mut String, row: &TableRow) -> DocxResult<()> {
        xml.push_str("<w:tr>");

        for cell in &row.cells {
            self.write_table_cell(xml, cell)?;
        }

        xml.push_str("</w:tr>");
        Ok(())
    }

    /// Write a table cell
    fn write_table_cell(&self, xml: &mut String, cell: &TableCell) -> DocxResult<()> {
        xml.push_str("<w:tc>");

        self.write_cell_properties(xml, &cell.properties);

        // A cell must contain at least one paragraph
        if cell.paragraphs.is_empty() {
            xml.push_str("<w:p/>");
        } else {
            for para in &cell.paragraphs {
                write_paragraph(xml, para)?;
            }
        }

        xml.push_str("</w:tc>");
        Ok(())
    }

    /// Write cell properties: tcW, tcBorders, shd
    fn write_cell_properties(&self, xml: &mut String, props: &CellProperties) {
        if props.width.is_none() && props.borders.is_none() && props.shading.is_none() {
            return;
        }

        xml.push_str("<w:tcPr>");

        if let Some(width) = props.width {
            xml.push_str(&format!(r#"<w:tcW w:w="{}" w:type="dxa"/>"#, twips(width)));
        }

        if let Some(ref borders) = props.borders {
            xml.push_str("<w:tcBorders>");
            for (name, border) in [
                ("top", &borders.top),
                ("left", &borders.left),
                ("bottom", &borders.bottom),
                ("right", &borders.right),
            ] {
                if let Some(border) = border {
                    write_border(xml, name, border);
                }
            }
            xml.push_str("</w:tcBorders>");
        }

        if let Some(ref fill) = props.shading {
            xml.push_str(&format!(
                r#"<w:shd w:val="clear" w:color="auto" w:fill="{}"/>"#,
                fill.trim_start_matches('#')
            ));
        }

        xml.push_str("</w:tcPr>");
    }
}

/// Write a single border element; `sz` is in eighths of a point
fn write_border(xml: &mut String, name: &str, border: &TableBorder) {
    match border.style {
        TableBorderStyle::Single => {
            let color = border.color.trim_start_matches('#');
            let color = if color.is_empty() { "auto" } else { color };
            xml.push_str(&format!(
                r#"<w:{} w:val="single" w:sz="{}" w:space="0" w:color="{}"/>"#,
                name,
                (border.width * 8.0).round() as i32,
                color
            ));
        }
        TableBorderStyle::None => {
            xml.push_str(&format!(
                r#"<w:{} w:val="none" w:sz="0" w:space="0" w:color="auto"/>"#,
                name
            ));
        }
    }
}
