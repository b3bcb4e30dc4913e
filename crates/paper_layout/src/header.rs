//! Header builder: page setup, title block, info lines, general
//! instructions, page footer and the spacer before the question table

use crate::{format_duration, LayoutSettings, PaperSink, Result};
use doc_model::{
    inches, Alignment, CellBorders, CellProperties, FieldCode, HeaderFooter, Paragraph,
    ParagraphProperties, Run, TableAlignment, TableBorder, TableCell, TableGrid,
    TableProperties, TableRow,
};
use exam_model::ExamMetadata;

/// Label above the numbered instruction list
pub const INSTRUCTIONS_LABEL: &str = "GENERAL INSTRUCTIONS:";

/// Table style shared by the header and question tables
pub const TABLE_STYLE: &str = "TableGrid";

/// Write everything that precedes the question table
pub fn build_header<S: PaperSink + ?Sized>(
    sink: &mut S,
    metadata: &ExamMetadata,
    instructions: &[String],
    settings: &LayoutSettings,
) -> Result<()> {
    sink.set_page(settings.page, settings.font(settings.font_size))?;

    let width = inches(settings.header_width);
    sink.start_table(
        TableGrid::with_fixed_columns(&[width]),
        TableProperties {
            style_id: Some(TABLE_STYLE.to_string()),
            alignment: Some(TableAlignment::Center),
        },
    )?;
    sink.append_row(title_row(metadata, settings))?;
    sink.append_row(info_row(metadata, settings))?;
    sink.append_row(instructions_row(instructions, settings))?;
    tracing::debug!(
        "Header table emitted with {} instruction(s)",
        instructions.len()
    );

    sink.set_footer(page_footer(metadata, settings))?;

    sink.append_paragraph(Paragraph::with_properties(
        ParagraphProperties::new().with_spacing(4.0, 4.0),
    ))?;
    Ok(())
}

/// School name, exam type and address on a borderless row
pub fn title_row(metadata: &ExamMetadata, settings: &LayoutSettings) -> TableRow {
    let lines = [
        (metadata.school_name.as_deref().map(str::to_uppercase), 16.0, true),
        (metadata.exam_type.as_deref().map(str::to_uppercase), 14.0, true),
        (metadata.address(), 10.0, false),
    ];

    let mut cell = header_cell(CellBorders::none(), settings);
    for (text, size, bold) in lines {
        if let Some(text) = text {
            let props = ParagraphProperties::new()
                .with_alignment(Alignment::Center)
                .with_spacing(0.0, 2.0);
            cell.add_paragraph(
                Paragraph::with_properties(props)
                    .with_run(Run::new(text).with_properties(settings.font(size).with_bold(bold))),
            );
        }
    }
    TableRow::new(vec![cell])
}

/// The two centred info lines
///
/// Line one holds class, subject (with code) and set; line two holds
/// maximum marks, time and academic year. Absent values are skipped.
pub fn info_lines(metadata: &ExamMetadata, settings: &LayoutSettings) -> (String, String) {
    let subject = metadata.subject.as_deref().map(|subject| match &metadata.subject_code {
        Some(code) => format!("Subject: {} (Code: {})", subject, code),
        None => format!("Subject: {}", subject),
    });
    let first = [
        metadata.class_name.as_deref().map(|c| format!("Class: {}", c)),
        subject,
        metadata.set_label.as_deref().map(|s| format!("Set: {}", s)),
    ];

    let duration = format_duration(metadata.duration_minutes.as_ref());
    let second = [
        metadata.max_marks.as_deref().map(|m| format!("Max. Marks: {}", m)),
        (!duration.is_empty()).then(|| format!("Time: {}", duration)),
        metadata
            .academic_year
            .as_deref()
            .map(|y| format!("Academic Year: {}", y)),
    ];

    let join = |parts: [Option<String>; 3]| {
        parts
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(settings.info_separator.as_str())
    };
    (join(first), join(second))
}

/// Info lines between horizontal rules
pub fn info_row(metadata: &ExamMetadata, settings: &LayoutSettings) -> TableRow {
    let (first, second) = info_lines(metadata, settings);
    let mut cell = header_cell(ruled_borders(), settings);

    for (text, before) in [(first, 3.0), (second, 0.0)] {
        let props = ParagraphProperties::new()
            .with_alignment(Alignment::Center)
            .with_spacing(before, 3.0);
        let mut para = Paragraph::with_properties(props);
        if !text.is_empty() {
            para.add_run(Run::new(text).with_properties(settings.font(11.0).with_bold(true)));
        }
        cell.add_paragraph(para);
    }
    TableRow::new(vec![cell])
}

/// Numbered general instructions between horizontal rules
///
/// The row is always present; with no instructions it is left empty.
pub fn instructions_row(instructions: &[String], settings: &LayoutSettings) -> TableRow {
    let mut cell = header_cell(ruled_borders(), settings);
    if instructions.is_empty() {
        return TableRow::new(vec![cell]);
    }

    cell.add_paragraph(
        Paragraph::with_properties(ParagraphProperties::new().with_spacing(4.0, 2.0)).with_run(
            Run::new(INSTRUCTIONS_LABEL).with_properties(
                settings
                    .font(11.0)
                    .with_bold(true)
                    .with_underline(true),
            ),
        ),
    );

    let last = instructions.len() - 1;
    for (i, instruction) in instructions.iter().enumerate() {
        let after = if i == last { 4.0 } else { 1.0 };
        let props = ParagraphProperties::new()
            .with_spacing(0.0, after)
            .with_indent_left(inches(0.2));
        cell.add_paragraph(Paragraph::with_properties(props).with_run(
            Run::new(format!("{}. {}", i + 1, instruction)).with_properties(settings.font(10.0)),
        ));
    }
    TableRow::new(vec![cell])
}

/// `"<set>   |   Page X of Y"` with live page fields
pub fn page_footer(metadata: &ExamMetadata, settings: &LayoutSettings) -> HeaderFooter {
    let font = settings.font(9.0);
    let text = |s: String| Run::new(s).with_properties(font.clone());
    let field = |code| Run::field(code).with_properties(font.clone());

    let mut para =
        Paragraph::with_properties(ParagraphProperties::new().with_alignment(Alignment::Center));
    if let Some(set) = &metadata.set_label {
        para.add_run(text(format!("{}   |   ", set)));
    }
    para.add_run(text("Page ".to_string()));
    para.add_run(field(FieldCode::PageNumber));
    para.add_run(text(" of ".to_string()));
    para.add_run(field(FieldCode::NumPages));

    HeaderFooter::new(vec![para])
}

/// Top and bottom rules (`sz=6`), no side borders
fn ruled_borders() -> CellBorders {
    let rule = TableBorder::single(0.75, "000000");
    CellBorders {
        top: Some(rule.clone()),
        bottom: Some(rule),
        left: Some(TableBorder::none()),
        right: Some(TableBorder::none()),
    }
}

fn header_cell(borders: CellBorders, settings: &LayoutSettings) -> TableCell {
    TableCell::with_properties(
        CellProperties::new()
            .with_width(inches(settings.header_width))
            .with_borders(borders),
    )
}
