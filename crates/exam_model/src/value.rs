//! Lenient scalar decoding
//!
//! Clients send marks, counts and labels either as JSON numbers or as
//! strings, and sometimes as `null`. These helpers normalize them. A
//! "falsy" scalar (`0`, `""`, `false`) counts as absent for single
//! optional fields.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
    Flag(bool),
}

impl Scalar {
    pub(crate) fn to_text(&self) -> String {
        match self {
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Text(s) => s.clone(),
            Scalar::Flag(b) => b.to_string(),
        }
    }

    fn is_falsy(&self) -> bool {
        match self {
            Scalar::Integer(n) => *n == 0,
            Scalar::Float(f) => *f == 0.0,
            Scalar::Text(s) => s.is_empty(),
            Scalar::Flag(b) => !b,
        }
    }

    /// Integer value, truncating floats and parsing numeric strings
    fn to_integer(&self) -> Option<i64> {
        match self {
            Scalar::Integer(n) => Some(*n),
            Scalar::Float(f) if f.is_finite() => Some(f.trunc() as i64),
            Scalar::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Optional display text; falsy and null become `None`
pub(crate) fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_falsy()).map(|s| s.to_text()))
}

/// Display text defaulting to the empty string
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(optional_text(deserializer)?.unwrap_or_default())
}

/// A list of display strings; `null` entries become empty strings
pub(crate) fn text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|item| item.map(|s| s.to_text()).unwrap_or_default())
        .collect())
}

/// Fill-in entries; falsy and `null` entries become empty strings so they
/// are skipped when rendered, without shifting later positions
pub(crate) fn blank_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<Scalar>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|item| {
            item.filter(|s| !s.is_falsy())
                .map(|s| s.to_text())
                .unwrap_or_default()
        })
        .collect())
}

/// Distinguishes an explicit `null` from a missing key
///
/// Use with `#[serde(default)]`: a missing key stays `None`, while a
/// present key yields `Some`, wrapping `None` for `null`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A list of structured items; `null` becomes empty
pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any structured value; `null` becomes its default
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A non-negative count; anything unparseable or negative is 0
pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Scalar>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(Scalar::to_integer)
        .map(|n| n.clamp(0, u32::MAX as i64) as u32)
        .unwrap_or(0))
}

/// Whole minutes when the value is a positive integer, otherwise the raw text
pub(crate) fn minutes_or_text(raw: Option<Scalar>) -> Option<Result<u32, String>> {
    let raw = raw.filter(|s| !s.is_falsy())?;
    match raw.to_integer() {
        Some(n) if n > 0 => Some(Ok(n.min(u32::MAX as i64) as u32)),
        Some(_) => None,
        None => Some(Err(raw.to_text())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "optional_text")]
        label: Option<String>,
        #[serde(default, deserialize_with = "count")]
        lines: u32,
        #[serde(default, deserialize_with = "text_list")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "blank_list")]
        blanks: Vec<String>,
        #[serde(default, deserialize_with = "present")]
        kind: Option<Option<Scalar>>,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_optional_text_accepts_numbers_and_strings() {
        assert_eq!(probe(r#"{"label": 5}"#).label.as_deref(), Some("5"));
        assert_eq!(probe(r#"{"label": "5"}"#).label.as_deref(), Some("5"));
        assert_eq!(probe(r#"{"label": 2.5}"#).label.as_deref(), Some("2.5"));
    }

    #[test]
    fn test_optional_text_falsy_is_absent() {
        assert_eq!(probe(r#"{"label": 0}"#).label, None);
        assert_eq!(probe(r#"{"label": ""}"#).label, None);
        assert_eq!(probe(r#"{"label": null}"#).label, None);
        assert_eq!(probe(r#"{}"#).label, None);
    }

    #[test]
    fn test_count_is_lenient() {
        assert_eq!(probe(r#"{"lines": 3}"#).lines, 3);
        assert_eq!(probe(r#"{"lines": "4"}"#).lines, 4);
        assert_eq!(probe(r#"{"lines": 2.9}"#).lines, 2);
        assert_eq!(probe(r#"{"lines": -1}"#).lines, 0);
        assert_eq!(probe(r#"{"lines": "many"}"#).lines, 0);
        assert_eq!(probe(r#"{"lines": null}"#).lines, 0);
    }

    #[test]
    fn test_text_list_keeps_positions() {
        let p = probe(r#"{"items": ["x", null, 0, 12]}"#);
        assert_eq!(p.items, vec!["x", "", "0", "12"]);
        assert!(probe(r#"{"items": null}"#).items.is_empty());
    }

    #[test]
    fn test_blank_list_empties_falsy_entries() {
        let p = probe(r#"{"blanks": ["x", 0, false, "", null, "y", 7]}"#);
        assert_eq!(p.blanks, vec!["x", "", "", "", "", "y", "7"]);
        assert!(probe(r#"{"blanks": null}"#).blanks.is_empty());
    }

    #[test]
    fn test_present_keeps_explicit_null() {
        assert_eq!(probe(r#"{}"#).kind, None);
        assert_eq!(probe(r#"{"kind": null}"#).kind, Some(None));
        assert_eq!(
            probe(r#"{"kind": "mcq"}"#).kind,
            Some(Some(Scalar::Text("mcq".into())))
        );
    }

    #[test]
    fn test_minutes_or_text() {
        assert_eq!(minutes_or_text(Some(Scalar::Integer(90))), Some(Ok(90)));
        assert_eq!(minutes_or_text(Some(Scalar::Text("180".into()))), Some(Ok(180)));
        assert_eq!(minutes_or_text(Some(Scalar::Integer(0))), None);
        assert_eq!(minutes_or_text(None), None);
        assert_eq!(
            minutes_or_text(Some(Scalar::Text("Three hours".into()))),
            Some(Err("Three hours".to_string()))
        );
    }
}
