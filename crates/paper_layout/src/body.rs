//! Question-body builder
//!
//! Produces the single three-column question table. One running question
//! counter spans all enabled sections; each section only chooses how the
//! counter is displayed. Parts, subparts and options never take a number.

use crate::numbering::{
    format_question_number, option_label, part_label, part_option_label, subpart_label,
};
use crate::{BodyRow, LayoutSettings, PaperSink, Result, RowSpec, TABLE_STYLE};
use doc_model::{TableAlignment, TableGrid, TableProperties};
use exam_model::{PartKind, Question, QuestionKind, Section};

/// The fixed choices printed under every assertion-reason question
pub const ASSERTION_REASON_OPTIONS: [&str; 4] = [
    "(a) Both A and R are true and R is the correct explanation of A.",
    "(b) Both A and R are true but R is not the correct explanation of A.",
    "(c) A is true but R is false.",
    "(d) A is false but R is true.",
];

/// Marker row under a true/false question
pub const TRUE_FALSE_MARKER: &str = "(True / False)";

const MATCH_SEPARATOR: &str = "     |     ";

/// Write the question table for all sections
///
/// Returns the counter value the next question would receive. Nothing is
/// written when `sections` is empty.
pub fn build_question_table<S: PaperSink + ?Sized>(
    sink: &mut S,
    sections: &[Section],
    settings: &LayoutSettings,
) -> Result<u32> {
    if sections.is_empty() {
        tracing::debug!("No sections, question table skipped");
        return Ok(1);
    }

    sink.start_table(
        TableGrid::with_fixed_columns(&settings.column_widths_pt()),
        TableProperties {
            style_id: Some(TABLE_STYLE.to_string()),
            alignment: Some(TableAlignment::Center),
        },
    )?;
    sink.append_row(table_header_row(settings).to_row(settings))?;

    let mut counter = 1;
    for section in sections {
        counter = build_section(sink, section, counter, settings)?;
    }
    tracing::debug!(
        "Question table emitted for {} section(s), {} question(s)",
        sections.len(),
        counter - 1
    );
    Ok(counter)
}

/// Write one section's rows, numbering from `counter`
///
/// Returns the advanced counter. A disabled section writes nothing and
/// leaves the counter unchanged.
pub fn build_section<S: PaperSink + ?Sized>(
    sink: &mut S,
    section: &Section,
    counter: u32,
    settings: &LayoutSettings,
) -> Result<u32> {
    if !section.enabled {
        tracing::debug!("Section {:?} disabled, skipped", section.id);
        return Ok(counter);
    }

    let (rows, next) = section_rows(section, counter, settings);
    for row in &rows {
        tracing::trace!("Row: {:?}", row.main_text());
        sink.append_row(row.to_row(settings))?;
    }
    tracing::debug!(
        "Section {:?}: {} row(s), {} question(s)",
        section.id,
        rows.len(),
        next - counter
    );
    Ok(next)
}

/// The "Questions / Marks" header row
pub fn table_header_row(settings: &LayoutSettings) -> RowSpec {
    RowSpec::text("Questions")
        .with_marks(Some("Marks"))
        .bold_main()
        .bold_marks()
        .centered()
        .shaded(&settings.header_shading)
}

/// All rows of an enabled section and the advanced counter
pub fn section_rows(section: &Section, counter: u32, settings: &LayoutSettings) -> (Vec<BodyRow>, u32) {
    let mut title = format!("SECTION {}", section.id);
    if let Some(name) = &section.name {
        title.push_str(&format!(" ({})", name));
    }

    let mut rows: Vec<BodyRow> = vec![RowSpec::text(title)
        .with_marks(section.total_marks.as_deref())
        .bold_main()
        .bold_marks()
        .centered()
        .with_size(12.0)
        .with_spacing(4.0, 4.0)
        .shaded(&settings.section_shading)
        .into()];

    if let Some(instructions) = &section.instructions {
        rows.push(RowSpec::text(instructions).italic_main().with_size(10.0).into());
    }

    let mut counter = counter;
    for question in &section.questions {
        let number = format_question_number(counter, section.number_style);
        counter = counter.saturating_add(1);
        rows.extend(question_rows(question, &number));
    }

    rows.push(RowSpec::default().open().into());
    (rows, counter)
}

/// Rows for one question: primary row, type-specific rows, parts, then
/// answer lines
pub fn question_rows(question: &Question, number: &str) -> Vec<BodyRow> {
    let mut primary = RowSpec::text(&question.text)
        .with_number(number)
        .with_marks(question.marks.as_deref())
        .bold_number()
        .bold_marks()
        .with_spacing(3.0, 2.0);
    if matches!(
        question.kind,
        QuestionKind::Passage { .. } | QuestionKind::CaseBased { .. }
    ) {
        primary = primary.bold_main();
    }

    let mut rows = vec![BodyRow::from(primary)];
    kind_rows(&question.kind, &mut rows);

    for (index, part) in question.parts.iter().enumerate() {
        rows.push(
            RowSpec::text(format!("{}  {}", part_label(index), part.text))
                .with_marks(part.marks.as_deref())
                .indented(0.2)
                .into(),
        );

        if let PartKind::Mcq { options } = &part.kind {
            for (i, option) in options.iter().enumerate() {
                rows.push(nested_row(format!("{}  {}", part_option_label(i), option), None));
            }
        }

        for (i, subpart) in part.subparts.iter().enumerate() {
            rows.push(nested_row(
                format!("{}  {}", subpart_label(i), subpart.text),
                subpart.marks.as_deref(),
            ));
        }
    }

    if let QuestionKind::Written { answer_lines, .. } = question.kind {
        if question.parts.is_empty() {
            rows.extend((0..answer_lines).map(|_| BodyRow::AnswerLine));
        }
    }

    rows
}

fn kind_rows(kind: &QuestionKind, rows: &mut Vec<BodyRow>) {
    match kind {
        QuestionKind::Passage { passage: text } | QuestionKind::CaseBased { case_text: text } => {
            if !text.is_empty() {
                rows.push(
                    RowSpec::text(text)
                        .italic_main()
                        .with_size(10.0)
                        .with_spacing(2.0, 4.0)
                        .into(),
                );
            }
        }
        QuestionKind::Mcq { options } => {
            for (i, option) in options.iter().enumerate() {
                rows.push(option_row(format!("{}  {}", option_label(i), option), 11.0));
            }
        }
        QuestionKind::FillBlanks { blanks } => {
            for (i, blank) in blanks.iter().enumerate() {
                if !blank.trim().is_empty() {
                    rows.push(option_row(format!("({})  {}", i + 1, blank), 11.0));
                }
            }
        }
        QuestionKind::Match { column_a, column_b } => {
            for i in 0..column_a.len().max(column_b.len()) {
                let a = column_a
                    .get(i)
                    .map(|item| format!("{}. {}", i + 1, item))
                    .unwrap_or_default();
                let b = column_b
                    .get(i)
                    .map(|item| format!("{}. {}", column_letter(i), item))
                    .unwrap_or_default();
                rows.push(option_row(
                    format!("Column A: {}{}Column B: {}", a, MATCH_SEPARATOR, b),
                    10.0,
                ));
            }
        }
        QuestionKind::AssertionReason { assertion, reason } => {
            if !assertion.is_empty() {
                rows.push(
                    RowSpec::text(format!("Assertion (A): {}", assertion))
                        .indented(0.1)
                        .with_spacing(2.0, 1.0)
                        .into(),
                );
            }
            if !reason.is_empty() {
                rows.push(
                    RowSpec::text(format!("Reason (R): {}", reason))
                        .indented(0.1)
                        .with_spacing(1.0, 2.0)
                        .into(),
                );
            }
            for option in ASSERTION_REASON_OPTIONS {
                rows.push(option_row(option.to_string(), 10.0));
            }
        }
        QuestionKind::TrueFalse => {
            rows.push(
                RowSpec::text(TRUE_FALSE_MARKER)
                    .italic_main()
                    .with_size(10.0)
                    .indented(0.2)
                    .with_spacing(1.0, 2.0)
                    .into(),
            );
        }
        QuestionKind::Written { .. } | QuestionKind::Other(_) => {}
    }
}

/// Uppercase column B label; past `Z` the 1-based position is used
fn column_letter(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
        _ => (index + 1).to_string(),
    }
}

fn option_row(text: String, size: f32) -> BodyRow {
    RowSpec::text(text)
        .with_size(size)
        .indented(0.2)
        .with_spacing(1.0, 1.0)
        .into()
}

fn nested_row(text: String, marks: Option<&str>) -> BodyRow {
    RowSpec::text(text)
        .with_marks(marks)
        .with_size(10.0)
        .indented(0.4)
        .with_spacing(1.0, 1.0)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use exam_model::{Part, Subpart, WrittenKind};

    fn texts(rows: &[BodyRow]) -> Vec<&str> {
        rows.iter().map(BodyRow::main_text).collect()
    }

    fn content(row: &BodyRow) -> &RowSpec {
        match row {
            BodyRow::Content(content) => content,
            BodyRow::AnswerLine => panic!("expected a content row"),
        }
    }

    fn written(lines: u32) -> QuestionKind {
        QuestionKind::Written {
            kind: WrittenKind::ShortAnswer,
            answer_lines: lines,
        }
    }

    #[test]
    fn test_primary_row() {
        let q = Question::new(written(0), "State Newton's first law.").with_marks("2");
        let rows = question_rows(&q, "Q1.");
        assert_eq!(rows.len(), 1);

        let primary = content(&rows[0]);
        assert_eq!(primary.number, "Q1.");
        assert_eq!(primary.marks, "2");
        assert!(primary.number_bold && primary.marks_bold);
        assert!(!primary.main_bold);
        assert_eq!((primary.space_before, primary.space_after), (3.0, 2.0));
    }

    #[test]
    fn test_answer_lines() {
        let q = Question::new(written(3), "Explain.");
        let rows = question_rows(&q, "1.");
        assert_eq!(rows.len(), 4);
        assert!(rows[1..].iter().all(|r| *r == BodyRow::AnswerLine));
    }

    #[test]
    fn test_parts_suppress_answer_lines() {
        let q = Question::new(written(3), "Answer:").with_parts(vec![Part::new("Why?")]);
        let rows = question_rows(&q, "1.");
        assert_eq!(texts(&rows), vec!["Answer:", "(a)  Why?"]);
    }

    #[test]
    fn test_mcq_options() {
        let options = (1..=7).map(|n| format!("opt{}", n)).collect();
        let q = Question::new(QuestionKind::Mcq { options }, "Pick one.");
        let rows = question_rows(&q, "1.");
        assert_eq!(rows.len(), 8);
        assert_eq!(rows[1].main_text(), "(a)  opt1");
        assert_eq!(rows[6].main_text(), "(f)  opt6");
        assert_eq!(rows[7].main_text(), "(7)  opt7");
        assert_eq!(content(&rows[1]).main_indent, 0.2);
    }

    #[test]
    fn test_fill_blanks_skip_empty() {
        let blanks = vec!["The sun".into(), "".into(), "  ".into(), "rises".into()];
        let q = Question::new(QuestionKind::FillBlanks { blanks }, "Fill in:");
        let rows = question_rows(&q, "1.");
        assert_eq!(texts(&rows), vec!["Fill in:", "(1)  The sun", "(4)  rises"]);
    }

    #[test]
    fn test_match_pairs_uneven_columns() {
        let q = Question::new(
            QuestionKind::Match {
                column_a: vec!["Iron".into(), "Copper".into(), "Gold".into()],
                column_b: vec!["Fe".into()],
            },
            "Match the following:",
        );
        let rows = question_rows(&q, "1.");
        assert_eq!(
            texts(&rows[1..]),
            vec![
                "Column A: 1. Iron     |     Column B: A. Fe",
                "Column A: 2. Copper     |     Column B: ",
                "Column A: 3. Gold     |     Column B: ",
            ]
        );
        assert_eq!(content(&rows[1]).main_size, 10.0);
    }

    #[test]
    fn test_assertion_reason_always_lists_options() {
        let q = Question::new(
            QuestionKind::AssertionReason {
                assertion: String::new(),
                reason: String::new(),
            },
            "",
        );
        let rows = question_rows(&q, "1.");
        assert_eq!(texts(&rows[1..]), ASSERTION_REASON_OPTIONS.to_vec());

        let q = Question::new(
            QuestionKind::AssertionReason {
                assertion: "Ice floats.".into(),
                reason: "Ice is less dense.".into(),
            },
            "",
        );
        let rows = question_rows(&q, "1.");
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[1].main_text(), "Assertion (A): Ice floats.");
        assert_eq!(rows[2].main_text(), "Reason (R): Ice is less dense.");
    }

    #[test]
    fn test_true_false_marker() {
        let q = Question::new(QuestionKind::TrueFalse, "Water boils at 100 C.");
        let rows = question_rows(&q, "1.");
        assert_eq!(rows[1].main_text(), TRUE_FALSE_MARKER);
        assert!(content(&rows[1]).main_italic);
    }

    #[test]
    fn test_passage_row_follows_primary() {
        let q = Question::new(
            QuestionKind::Passage { passage: "Long ago...".into() },
            "Read the passage.",
        )
        .with_parts(vec![Part::new("Who?")]);
        let rows = question_rows(&q, "1.");
        assert_eq!(texts(&rows), vec!["Read the passage.", "Long ago...", "(a)  Who?"]);
        assert!(content(&rows[0]).main_bold);
        assert!(content(&rows[1]).main_italic);

        let q = Question::new(QuestionKind::CaseBased { case_text: String::new() }, "Case");
        assert_eq!(question_rows(&q, "1.").len(), 1);
    }

    #[test]
    fn test_part_options_and_subparts() {
        let mut mcq_part = Part::new("Choose");
        mcq_part.marks = Some("1".into());
        mcq_part.kind = PartKind::Mcq {
            options: (1..=5).map(|n| n.to_string()).collect(),
        };
        let mut nested = Part::new("Explain");
        nested.subparts = (1..=7)
            .map(|n| Subpart {
                text: format!("s{}", n),
                marks: (n == 1).then(|| "2".to_string()),
            })
            .collect();

        let q = Question::new(QuestionKind::Other("diagram".into()), "Q")
            .with_parts(vec![mcq_part, nested]);
        let rows = question_rows(&q, "1.");

        assert_eq!(rows[1].main_text(), "(a)  Choose");
        assert_eq!(content(&rows[1]).marks, "1");
        assert_eq!(rows[2].main_text(), "(i)  1");
        assert_eq!(rows[5].main_text(), "(iv)  4");
        assert_eq!(rows[6].main_text(), "(5)  5");
        assert_eq!(content(&rows[6]).main_indent, 0.4);
        assert_eq!(rows[7].main_text(), "(b)  Explain");
        assert_eq!(rows[8].main_text(), "(i)  s1");
        assert_eq!(content(&rows[8]).marks, "2");
        assert_eq!(rows[13].main_text(), "(vi)  s6");
        assert_eq!(rows[14].main_text(), "(7)  s7");
        assert_eq!(rows.len(), 15);
    }

    #[test]
    fn test_unknown_kind_has_no_sub_rows() {
        let q = Question::new(QuestionKind::Other("diagram".into()), "Draw a cell.");
        assert_eq!(question_rows(&q, "1.").len(), 1);
    }

    #[test]
    fn test_section_rows_and_counter() {
        let mut section = Section::new(
            "B",
            vec![
                Question::new(QuestionKind::TrueFalse, "one"),
                Question::new(QuestionKind::TrueFalse, "two"),
            ],
        );
        section.name = Some("Objective".into());
        section.total_marks = Some("10".into());
        section.instructions = Some("Attempt all.".into());

        let (rows, next) = section_rows(&section, 5, &LayoutSettings::default());
        assert_eq!(next, 7);
        assert_eq!(rows[0].main_text(), "SECTION B (Objective)");
        assert_eq!(content(&rows[0]).marks, "10");
        assert_eq!(content(&rows[0]).shading.as_deref(), Some("F5F5F5"));
        assert_eq!(rows[1].main_text(), "Attempt all.");
        assert_eq!(content(&rows[2]).number, "5.");
        assert_eq!(content(&rows[4]).number, "6.");

        let spacer = content(rows.last().unwrap());
        assert!(!spacer.top_border && !spacer.bottom_border);
        assert_eq!(rows.len(), 7);
    }
}
