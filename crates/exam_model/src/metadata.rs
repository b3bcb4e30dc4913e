//! Exam metadata - school, exam and paper information for the title block

use crate::value::{self, Scalar};
use serde::{Deserialize, Deserializer};

/// Exam duration as sent by the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExamDuration {
    /// Whole minutes
    Minutes(u32),
    /// A value that is not a whole number of minutes, shown verbatim
    Text(String),
}

/// School and paper metadata; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamMetadata {
    #[serde(deserialize_with = "value::optional_text")]
    pub school_name: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub school_address_line1: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub school_address_line2: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub exam_type: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub academic_year: Option<String>,
    #[serde(rename = "class", deserialize_with = "value::optional_text")]
    pub class_name: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub subject: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub subject_code: Option<String>,
    #[serde(rename = "set", deserialize_with = "value::optional_text")]
    pub set_label: Option<String>,
    #[serde(deserialize_with = "value::optional_text")]
    pub max_marks: Option<String>,
    #[serde(deserialize_with = "duration")]
    pub duration_minutes: Option<ExamDuration>,
}

fn duration<'de, D>(deserializer: D) -> Result<Option<ExamDuration>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value::minutes_or_text(raw).map(|parsed| match parsed {
        Ok(minutes) => ExamDuration::Minutes(minutes),
        Err(text) => ExamDuration::Text(text),
    }))
}

impl ExamMetadata {
    /// Address parts joined by ", ", skipping absent lines
    pub fn address(&self) -> Option<String> {
        let parts: Vec<&str> = [&self.school_address_line1, &self.school_address_line2]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }

    /// Suggested file name for the generated paper
    ///
    /// `{school}_{subject}_{examType}.docx` with spaces, path separators
    /// and other characters not allowed in file names replaced by
    /// underscores. The result never names a directory.
    pub fn download_name(&self) -> String {
        let piece = |value: &Option<String>, fallback: &str| -> String {
            value
                .as_deref()
                .unwrap_or(fallback)
                .chars()
                .map(|c| match c {
                    ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                    c if c.is_control() => '_',
                    c => c,
                })
                .collect()
        };
        format!(
            "{}_{}_{}.docx",
            piece(&self.school_name, "ExamPaper"),
            piece(&self.subject, "Subject"),
            piece(&self.exam_type, "Exam"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_camel_case_fields() {
        let meta: ExamMetadata = serde_json::from_str(
            r#"{
                "schoolName": "Green Valley School",
                "schoolAddressLine1": "12 Park Road",
                "class": 10,
                "set": "A",
                "maxMarks": 80,
                "durationMinutes": "180"
            }"#,
        )
        .unwrap();

        assert_eq!(meta.school_name.as_deref(), Some("Green Valley School"));
        assert_eq!(meta.class_name.as_deref(), Some("10"));
        assert_eq!(meta.set_label.as_deref(), Some("A"));
        assert_eq!(meta.max_marks.as_deref(), Some("80"));
        assert_eq!(meta.duration_minutes, Some(ExamDuration::Minutes(180)));
        assert_eq!(meta.subject, None);
    }

    #[test]
    fn test_duration_variants() {
        let parse = |json: &str| serde_json::from_str::<ExamMetadata>(json).unwrap().duration_minutes;
        assert_eq!(parse(r#"{"durationMinutes": 0}"#), None);
        assert_eq!(parse(r#"{"durationMinutes": null}"#), None);
        assert_eq!(parse(r#"{}"#), None);
        assert_eq!(
            parse(r#"{"durationMinutes": "2 hours"}"#),
            Some(ExamDuration::Text("2 hours".to_string()))
        );
    }

    #[test]
    fn test_address_skips_missing_lines() {
        let mut meta = ExamMetadata::default();
        assert_eq!(meta.address(), None);

        meta.school_address_line2 = Some("Pune".to_string());
        assert_eq!(meta.address().as_deref(), Some("Pune"));

        meta.school_address_line1 = Some("Main Road".to_string());
        assert_eq!(meta.address().as_deref(), Some("Main Road, Pune"));
    }

    #[test]
    fn test_download_name() {
        let meta = ExamMetadata {
            school_name: Some("Green Valley School".to_string()),
            subject: Some("Social Science".to_string()),
            exam_type: Some("Half Yearly".to_string()),
            ..Default::default()
        };
        assert_eq!(meta.download_name(), "Green_Valley_School_Social_Science_Half_Yearly.docx");
        assert_eq!(ExamMetadata::default().download_name(), "ExamPaper_Subject_Exam.docx");
    }

    #[test]
    fn test_download_name_has_no_separators() {
        let meta = ExamMetadata {
            school_name: Some("St. Mary's / Pune".to_string()),
            subject: Some("Maths\\Stats".to_string()),
            exam_type: Some("Unit: 1?".to_string()),
            ..Default::default()
        };
        let name = meta.download_name();
        assert_eq!(name, "St._Mary's___Pune_Maths_Stats_Unit__1_.docx");
        assert!(!name.contains('/'));
        assert!(!name.contains('\\'));
    }
}
