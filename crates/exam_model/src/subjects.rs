//! Subject catalog offered to paper setters, with board subject codes

use serde::Serialize;

/// A subject and its board code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Subject {
    pub name: &'static str,
    pub code: &'static str,
}

const fn subject(name: &'static str, code: &'static str) -> Subject {
    Subject { name, code }
}

/// All known subjects in display order
pub const SUBJECTS: &[Subject] = &[
    subject("Mathematics", "041"),
    subject("Science", "086"),
    subject("English", "101"),
    subject("Hindi", "002"),
    subject("Social Science", "087"),
    subject("Physics", "042"),
    subject("Chemistry", "043"),
    subject("Biology", "044"),
    subject("History", "027"),
    subject("Geography", "029"),
    subject("Political Science", "028"),
    subject("Economics", "030"),
    subject("Computer Science", "083"),
    subject("Information Technology", "802"),
    subject("Sanskrit", "122"),
    subject("EVS", "006"),
    subject("Accountancy", "055"),
    subject("Business Studies", "054"),
    subject("Physical Education", "048"),
    subject("Fine Arts", "049"),
    subject("Music", "031"),
    subject("Home Science", "064"),
    subject("Psychology", "037"),
    subject("Sociology", "039"),
    subject("English Core", "301"),
    subject("English Elective", "001"),
    subject("Hindi Core", "302"),
    subject("Hindi Elective", "002"),
    subject("Mathematics Standard", "041"),
    subject("Mathematics Basic", "241"),
];

/// Look up a subject by name, ignoring case and surrounding whitespace
pub fn find_subject(name: &str) -> Option<&'static Subject> {
    let name = name.trim();
    SUBJECTS.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(SUBJECTS.len(), 30);
    }

    #[test]
    fn test_find_subject() {
        assert_eq!(find_subject("Physics").map(|s| s.code), Some("042"));
        assert_eq!(find_subject("  mathematics basic ").map(|s| s.code), Some("241"));
        assert_eq!(find_subject("Astronomy"), None);
    }

    #[test]
    fn test_shared_codes_are_allowed() {
        // Hindi and Hindi Elective share a board code
        let hindi = find_subject("Hindi").map(|s| s.code);
        let elective = find_subject("Hindi Elective").map(|s| s.code);
        assert_eq!(hindi, elective);
    }

    #[test]
    fn test_serializes_as_objects() {
        let json = serde_json::to_string(&SUBJECTS[0]).unwrap();
        assert_eq!(json, r#"{"name":"Mathematics","code":"041"}"#);
    }
}
