//! Question table rows
//!
//! Every question table row has three cells: number, question text and
//! marks. [`RowSpec`] describes the text and formatting of one row and
//! turns it into a [`TableRow`] once the settings are known.

use crate::LayoutSettings;
use doc_model::{
    inches, Alignment, CellBorders, CellProperties, Paragraph, ParagraphProperties, Run,
    TableBorder, TableCell, TableRow,
};

/// Size of number and marks text, and the default question text size
pub const BODY_FONT_SIZE: f32 = 11.0;

/// Border between ordinary rows (`sz=4`)
pub fn thin_border() -> TableBorder {
    TableBorder::single(0.5, "000000")
}

/// Content and formatting of a three-cell row
#[derive(Debug, Clone, PartialEq)]
pub struct RowSpec {
    pub number: String,
    pub main: String,
    pub marks: String,
    pub number_bold: bool,
    pub main_bold: bool,
    pub marks_bold: bool,
    pub main_italic: bool,
    /// Question text size in points
    pub main_size: f32,
    pub main_alignment: Alignment,
    /// Left indent of the question text in inches
    pub main_indent: f32,
    pub space_before: f32,
    pub space_after: f32,
    pub top_border: bool,
    pub bottom_border: bool,
    pub shading: Option<String>,
}

impl Default for RowSpec {
    fn default() -> Self {
        Self {
            number: String::new(),
            main: String::new(),
            marks: String::new(),
            number_bold: false,
            main_bold: false,
            marks_bold: false,
            main_italic: false,
            main_size: BODY_FONT_SIZE,
            main_alignment: Alignment::Left,
            main_indent: 0.0,
            space_before: 2.0,
            space_after: 2.0,
            top_border: true,
            bottom_border: true,
            shading: None,
        }
    }
}

impl RowSpec {
    /// A row whose only content is the question-column text
    pub fn text(main: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            ..Default::default()
        }
    }

    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Marks text; `None` leaves the cell empty
    pub fn with_marks(mut self, marks: Option<&str>) -> Self {
        self.marks = marks.unwrap_or_default().to_string();
        self
    }

    pub fn bold_number(mut self) -> Self {
        self.number_bold = true;
        self
    }

    pub fn bold_main(mut self) -> Self {
        self.main_bold = true;
        self
    }

    pub fn bold_marks(mut self) -> Self {
        self.marks_bold = true;
        self
    }

    pub fn italic_main(mut self) -> Self {
        self.main_italic = true;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.main_size = size;
        self
    }

    pub fn centered(mut self) -> Self {
        self.main_alignment = Alignment::Center;
        self
    }

    /// Indent the question text, in inches
    pub fn indented(mut self, indent: f32) -> Self {
        self.main_indent = indent;
        self
    }

    pub fn with_spacing(mut self, before: f32, after: f32) -> Self {
        self.space_before = before;
        self.space_after = after;
        self
    }

    pub fn shaded(mut self, color: &str) -> Self {
        self.shading = Some(color.to_string());
        self
    }

    /// Drop the top and bottom rules, keeping the side borders
    pub fn open(mut self) -> Self {
        self.top_border = false;
        self.bottom_border = false;
        self
    }

    /// Build the table row
    pub fn to_row(&self, settings: &LayoutSettings) -> TableRow {
        let widths = settings.column_widths_pt();
        let rule = |on: bool| if on { thin_border() } else { TableBorder::none() };
        let borders = CellBorders {
            top: Some(rule(self.top_border)),
            bottom: Some(rule(self.bottom_border)),
            left: Some(thin_border()),
            right: Some(thin_border()),
        };

        let spacing = ParagraphProperties::new().with_spacing(self.space_before, self.space_after);
        let mut main_props = spacing.clone().with_alignment(self.main_alignment);
        if self.main_indent != 0.0 {
            main_props = main_props.with_indent_left(inches(self.main_indent));
        }

        let contents = [
            (
                &self.number,
                spacing.clone().with_alignment(Alignment::Center),
                settings
                    .font(BODY_FONT_SIZE)
                    .with_bold(self.number_bold),
            ),
            (
                &self.main,
                main_props,
                settings
                    .font(self.main_size)
                    .with_bold(self.main_bold)
                    .with_italic(self.main_italic),
            ),
            (
                &self.marks,
                spacing.with_alignment(Alignment::Center),
                settings
                    .font(BODY_FONT_SIZE)
                    .with_bold(self.marks_bold),
            ),
        ];

        let cells = contents
            .into_iter()
            .zip(widths)
            .map(|((text, para_props, char_props), width)| {
                let mut props = CellProperties::new()
                    .with_width(width)
                    .with_borders(borders.clone());
                if let Some(color) = &self.shading {
                    props = props.with_shading(color);
                }

                let mut para = Paragraph::with_properties(para_props);
                if !text.is_empty() {
                    para.add_run(Run::new(text.as_str()).with_properties(char_props));
                }

                let mut cell = TableCell::with_properties(props);
                cell.add_paragraph(para);
                cell
            })
            .collect();

        TableRow::new(cells)
    }
}

/// A ruled blank row reserved for a handwritten answer
pub fn answer_line_row(settings: &LayoutSettings) -> TableRow {
    let borders = CellBorders {
        top: Some(TableBorder::none()),
        bottom: Some(TableBorder::single(0.25, &settings.answer_line_color)),
        left: Some(thin_border()),
        right: Some(thin_border()),
    };

    let cells = settings
        .column_widths_pt()
        .into_iter()
        .enumerate()
        .map(|(index, width)| {
            let props = CellProperties::new()
                .with_width(width)
                .with_borders(borders.clone());
            let mut cell = TableCell::with_properties(props);
            let para = if index == 1 {
                Paragraph::with_properties(ParagraphProperties::new().with_spacing(0.0, 8.0))
            } else {
                Paragraph::new()
            };
            cell.add_paragraph(para);
            cell
        })
        .collect();

    TableRow::new(cells)
}

/// A row of the question table, before formatting is resolved
#[derive(Debug, Clone, PartialEq)]
pub enum BodyRow {
    Content(RowSpec),
    AnswerLine,
}

impl BodyRow {
    pub fn to_row(&self, settings: &LayoutSettings) -> TableRow {
        match self {
            BodyRow::Content(spec) => spec.to_row(settings),
            BodyRow::AnswerLine => answer_line_row(settings),
        }
    }

    /// Text of the question column, empty for answer lines
    pub fn main_text(&self) -> &str {
        match self {
            BodyRow::Content(spec) => &spec.main,
            BodyRow::AnswerLine => "",
        }
    }
}

impl From<RowSpec> for BodyRow {
    fn from(spec: RowSpec) -> Self {
        BodyRow::Content(spec)
    }
}
