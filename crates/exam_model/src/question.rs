//! Questions, parts and subparts
//!
//! On the wire a question is a flat record whose `type` string decides
//! which of the optional fields matter. Here it becomes a [`Question`]
//! whose [`QuestionKind`] carries only the fields relevant to that type.

use crate::value::{self, Scalar};
use serde::Deserialize;

/// Flavour of a written-answer question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WrittenKind {
    /// `sa`
    ShortAnswer,
    /// `la`
    LongAnswer,
    /// `vsa`
    VeryShortAnswer,
    /// `numerical`
    Numerical,
}

/// Type-specific content of a question
#[derive(Debug, Clone, PartialEq)]
pub enum QuestionKind {
    /// sa / la / vsa / numerical, with the number of ruled answer lines
    Written { kind: WrittenKind, answer_lines: u32 },
    Mcq { options: Vec<String> },
    FillBlanks { blanks: Vec<String> },
    Match { column_a: Vec<String>, column_b: Vec<String> },
    AssertionReason { assertion: String, reason: String },
    TrueFalse,
    /// comprehension / unseen_passage
    Passage { passage: String },
    CaseBased { case_text: String },
    /// Unrecognized type string; rendered as a plain question
    Other(String),
}

impl QuestionKind {
    /// The wire name of this kind
    pub fn type_name(&self) -> &str {
        match self {
            QuestionKind::Written { kind, .. } => match kind {
                WrittenKind::ShortAnswer => "sa",
                WrittenKind::LongAnswer => "la",
                WrittenKind::VeryShortAnswer => "vsa",
                WrittenKind::Numerical => "numerical",
            },
            QuestionKind::Mcq { .. } => "mcq",
            QuestionKind::FillBlanks { .. } => "fill_blanks",
            QuestionKind::Match { .. } => "match",
            QuestionKind::AssertionReason { .. } => "assertion_reason",
            QuestionKind::TrueFalse => "true_false",
            QuestionKind::Passage { .. } => "comprehension",
            QuestionKind::CaseBased { .. } => "case_based",
            QuestionKind::Other(name) => name,
        }
    }
}

/// A question in a section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawQuestion")]
pub struct Question {
    pub text: String,
    pub marks: Option<String>,
    pub parts: Vec<Part>,
    pub kind: QuestionKind,
}

impl Question {
    /// A question of the given kind with no parts
    pub fn new(kind: QuestionKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: None,
            parts: Vec::new(),
            kind,
        }
    }

    pub fn with_marks(mut self, marks: impl Into<String>) -> Self {
        self.marks = Some(marks.into());
        self
    }

    pub fn with_parts(mut self, parts: Vec<Part>) -> Self {
        self.parts = parts;
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawQuestion {
    /// `None` when the key is missing, `Some(None)` for an explicit null
    #[serde(rename = "type", deserialize_with = "value::present")]
    question_type: Option<Option<Scalar>>,
    #[serde(deserialize_with = "value::text")]
    text: String,
    #[serde(deserialize_with = "value::optional_text")]
    marks: Option<String>,
    #[serde(deserialize_with = "value::list")]
    parts: Vec<Part>,
    #[serde(deserialize_with = "value::text_list")]
    options: Vec<String>,
    #[serde(deserialize_with = "value::blank_list")]
    blanks: Vec<String>,
    #[serde(rename = "columnA", deserialize_with = "value::text_list")]
    column_a: Vec<String>,
    #[serde(rename = "columnB", deserialize_with = "value::text_list")]
    column_b: Vec<String>,
    #[serde(deserialize_with = "value::text")]
    assertion: String,
    #[serde(deserialize_with = "value::text")]
    reason: String,
    #[serde(deserialize_with = "value::text")]
    passage: String,
    #[serde(deserialize_with = "value::text")]
    case_text: String,
    #[serde(deserialize_with = "value::count")]
    answer_lines: u32,
}

impl From<RawQuestion> for Question {
    fn from(raw: RawQuestion) -> Self {
        let written = |kind| QuestionKind::Written {
            kind,
            answer_lines: raw.answer_lines,
        };

        // Only a missing key means short answer; null or "" is malformed
        let type_name = match raw.question_type {
            None => "sa".to_string(),
            Some(value) => value.map(|s| s.to_text()).unwrap_or_default(),
        };
        let kind = match type_name.trim() {
            "sa" => written(WrittenKind::ShortAnswer),
            "la" => written(WrittenKind::LongAnswer),
            "vsa" => written(WrittenKind::VeryShortAnswer),
            "numerical" => written(WrittenKind::Numerical),
            "mcq" => QuestionKind::Mcq { options: raw.options },
            "fill_blanks" => QuestionKind::FillBlanks { blanks: raw.blanks },
            "match" => QuestionKind::Match {
                column_a: raw.column_a,
                column_b: raw.column_b,
            },
            "assertion_reason" => QuestionKind::AssertionReason {
                assertion: raw.assertion,
                reason: raw.reason,
            },
            "true_false" => QuestionKind::TrueFalse,
            "comprehension" | "unseen_passage" => QuestionKind::Passage { passage: raw.passage },
            "case_based" => QuestionKind::CaseBased { case_text: raw.case_text },
            other => {
                tracing::debug!("Unknown question type {:?}; rendering without sub-rows", other);
                QuestionKind::Other(other.to_string())
            }
        };

        Question {
            text: raw.text,
            marks: raw.marks,
            parts: raw.parts,
            kind,
        }
    }
}

// =============================================================================
// Parts
// =============================================================================

/// Type-specific content of a part
#[derive(Debug, Clone, PartialEq)]
pub enum PartKind {
    Plain,
    /// Part-level multiple choice
    Mcq { options: Vec<String> },
}

/// A lettered part of a question
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawPart")]
pub struct Part {
    pub text: String,
    pub marks: Option<String>,
    pub kind: PartKind,
    pub subparts: Vec<Subpart>,
}

impl Part {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: None,
            kind: PartKind::Plain,
            subparts: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawPart {
    #[serde(deserialize_with = "value::text")]
    text: String,
    #[serde(deserialize_with = "value::optional_text")]
    marks: Option<String>,
    #[serde(rename = "type", deserialize_with = "value::optional_text")]
    part_type: Option<String>,
    #[serde(deserialize_with = "value::text_list")]
    options: Vec<String>,
    #[serde(deserialize_with = "value::list")]
    subparts: Vec<Subpart>,
}

impl From<RawPart> for Part {
    fn from(raw: RawPart) -> Self {
        let kind = match raw.part_type.as_deref() {
            Some("mcq") => PartKind::Mcq { options: raw.options },
            _ => PartKind::Plain,
        };
        Part {
            text: raw.text,
            marks: raw.marks,
            kind,
            subparts: raw.subparts,
        }
    }
}

/// A numbered subpart of a part
///
/// Accepts either `{ "text": ..., "marks": ... }` or a bare string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawSubpart")]
pub struct Subpart {
    pub text: String,
    pub marks: Option<String>,
}

impl Subpart {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            marks: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSubpart {
    Detailed(SubpartFields),
    Plain(Option<Scalar>),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubpartFields {
    #[serde(deserialize_with = "value::text")]
    text: String,
    #[serde(deserialize_with = "value::optional_text")]
    marks: Option<String>,
}

impl From<RawSubpart> for Subpart {
    fn from(raw: RawSubpart) -> Self {
        match raw {
            RawSubpart::Detailed(fields) => Subpart {
                text: fields.text,
                marks: fields.marks,
            },
            RawSubpart::Plain(scalar) => {
                Subpart::new(scalar.map(|s| s.to_text()).unwrap_or_default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Question {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_type_is_short_answer() {
        let q = parse(r#"{"text": "Define force.", "marks": 2, "answerLines": 3}"#);
        assert_eq!(q.text, "Define force.");
        assert_eq!(q.marks.as_deref(), Some("2"));
        assert_eq!(
            q.kind,
            QuestionKind::Written { kind: WrittenKind::ShortAnswer, answer_lines: 3 }
        );
    }

    #[test]
    fn test_kind_carries_only_relevant_fields() {
        let q = parse(r#"{"type": "mcq", "options": ["1", 2], "blanks": ["ignored"]}"#);
        assert_eq!(q.kind, QuestionKind::Mcq { options: vec!["1".into(), "2".into()] });

        let q = parse(r#"{"type": "match", "columnA": ["x", "y"], "columnB": ["p"]}"#);
        assert_eq!(
            q.kind,
            QuestionKind::Match {
                column_a: vec!["x".into(), "y".into()],
                column_b: vec!["p".into()],
            }
        );

        let q = parse(r#"{"type": "unseen_passage", "passage": "Once upon a time"}"#);
        assert_eq!(q.kind, QuestionKind::Passage { passage: "Once upon a time".into() });
        assert_eq!(q.kind.type_name(), "comprehension");

        let q = parse(r#"{"type": "case_based", "caseText": "A shop sells..."}"#);
        assert_eq!(q.kind, QuestionKind::CaseBased { case_text: "A shop sells...".into() });
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let q = parse(r#"{"type": "diagram", "text": "Draw a cell."}"#);
        assert_eq!(q.kind, QuestionKind::Other("diagram".into()));
        assert_eq!(q.kind.type_name(), "diagram");
    }

    #[test]
    fn test_null_or_empty_type_is_not_short_answer() {
        let q = parse(r#"{"type": "", "text": "Blank type", "answerLines": 3}"#);
        assert_eq!(q.kind, QuestionKind::Other(String::new()));

        let q = parse(r#"{"type": null, "answerLines": 3}"#);
        assert_eq!(q.kind, QuestionKind::Other(String::new()));

        let q = parse(r#"{"answerLines": 3}"#);
        assert_eq!(
            q.kind,
            QuestionKind::Written { kind: WrittenKind::ShortAnswer, answer_lines: 3 }
        );
    }

    #[test]
    fn test_falsy_blanks_are_emptied() {
        let q = parse(r#"{"type": "fill_blanks", "blanks": ["x", 0, false, "y"]}"#);
        assert_eq!(
            q.kind,
            QuestionKind::FillBlanks { blanks: vec!["x".into(), "".into(), "".into(), "y".into()] }
        );
    }

    #[test]
    fn test_null_subpart_is_empty() {
        let q = parse(r#"{"parts": [{"text": "Explain", "subparts": [null, "how"]}]}"#);
        assert_eq!(q.parts[0].subparts, vec![Subpart::new(""), Subpart::new("how")]);
    }

    #[test]
    fn test_empty_object_is_valid() {
        let q = parse("{}");
        assert_eq!(q.text, "");
        assert_eq!(q.marks, None);
        assert!(q.parts.is_empty());
    }

    #[test]
    fn test_parts_and_subparts() {
        let q = parse(
            r#"{
                "type": "la",
                "text": "Answer the following",
                "parts": [
                    {"text": "Pick one", "marks": 1, "type": "mcq", "options": ["A", "B"]},
                    {"text": "Explain", "subparts": [{"text": "why", "marks": "2"}, "how", 7]}
                ]
            }"#,
        );

        assert_eq!(q.parts.len(), 2);
        assert_eq!(q.parts[0].kind, PartKind::Mcq { options: vec!["A".into(), "B".into()] });
        assert_eq!(q.parts[0].marks.as_deref(), Some("1"));
        assert_eq!(q.parts[1].kind, PartKind::Plain);
        assert_eq!(
            q.parts[1].subparts,
            vec![
                Subpart { text: "why".into(), marks: Some("2".into()) },
                Subpart::new("how"),
                Subpart::new("7"),
            ]
        );
    }

    #[test]
    fn test_null_collections() {
        let q = parse(r#"{"type": "mcq", "options": null, "parts": null}"#);
        assert_eq!(q.kind, QuestionKind::Mcq { options: vec![] });
        assert!(q.parts.is_empty());
    }
}
