//! Sections - groups of questions sharing marks and a numbering style

use crate::value;
use crate::Question;
use serde::{Deserialize, Deserializer};

/// How question numbers are displayed within a section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    /// `1.`, `2.`, `3.`
    #[default]
    Plain,
    /// `Q1.`, `Q2.`, `Q3.`
    QPrefixed,
    /// `i.`, `ii.`, `iii.`
    Roman,
    /// `(a)`, `(b)`, `(c)`
    Alphabetic,
}

impl NumberStyle {
    /// Parse the display label used by clients, e.g. `"Q1, Q2, Q3..."`
    ///
    /// Both a three-dot suffix and the single ellipsis character are
    /// accepted. Anything unrecognized is [`NumberStyle::Plain`].
    pub fn from_label(label: &str) -> Self {
        let stem = label.trim();
        let stem = stem
            .strip_suffix("...")
            .or_else(|| stem.strip_suffix('\u{2026}'))
            .unwrap_or(stem);

        match stem {
            "Q1, Q2, Q3" => NumberStyle::QPrefixed,
            "i, ii, iii" => NumberStyle::Roman,
            "(a), (b), (c)" => NumberStyle::Alphabetic,
            _ => NumberStyle::Plain,
        }
    }

    /// The canonical client label for this style
    pub fn label(&self) -> &'static str {
        match self {
            NumberStyle::Plain => "1, 2, 3...",
            NumberStyle::QPrefixed => "Q1, Q2, Q3...",
            NumberStyle::Roman => "i, ii, iii...",
            NumberStyle::Alphabetic => "(a), (b), (c)...",
        }
    }
}

impl<'de> Deserialize<'de> for NumberStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = value::optional_text(deserializer)?;
        Ok(label.map(|l| NumberStyle::from_label(&l)).unwrap_or_default())
    }
}

/// A section of the paper
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Section {
    /// Section label, usually a letter
    #[serde(deserialize_with = "value::text")]
    pub id: String,
    #[serde(deserialize_with = "value::optional_text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub total_marks: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub instructions: Option<String>,
    #[serde(rename = "questionNumberStyle")]
    pub number_style: NumberStyle,
    /// Disabled sections are left out of the paper entirely
    #[serde(deserialize_with = "enabled_flag")]
    pub enabled: bool,
    #[serde(deserialize_with = "value::list")]
    pub questions: Vec<Question>,
}

impl Default for Section {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: None,
            total_marks: None,
            instructions: None,
            number_style: NumberStyle::Plain,
            enabled: true,
            questions: Vec::new(),
        }
    }
}

impl Section {
    /// An enabled section with the given label and questions
    pub fn new(id: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            id: id.into(),
            questions,
            ..Default::default()
        }
    }

    pub fn with_number_style(mut self, style: NumberStyle) -> Self {
        self.number_style = style;
        self
    }
}

fn enabled_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}
