//! Exam duration display

use exam_model::ExamDuration;

/// Human-readable exam duration
///
/// Whole hours read `"1 Hr"` / `"3 Hrs"`, half hours read `"1.5 Hrs"` and
/// anything else is given in minutes. Text durations pass through unchanged.
pub fn format_duration(duration: Option<&ExamDuration>) -> String {
    match duration {
        None => String::new(),
        Some(ExamDuration::Text(text)) => text.clone(),
        Some(ExamDuration::Minutes(0)) => String::new(),
        Some(ExamDuration::Minutes(minutes)) => format_minutes(*minutes),
    }
}

fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    match minutes % 60 {
        0 if hours > 1 => format!("{} Hrs", hours),
        0 => format!("{} Hr", hours),
        30 => format!("{}.5 Hrs", hours),
        _ => format!("{} Min", minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minutes(m: u32) -> String {
        format_duration(Some(&ExamDuration::Minutes(m)))
    }

    #[test]
    fn test_hours() {
        assert_eq!(minutes(60), "1 Hr");
        assert_eq!(minutes(120), "2 Hrs");
        assert_eq!(minutes(180), "3 Hrs");
    }

    #[test]
    fn test_half_hours() {
        assert_eq!(minutes(90), "1.5 Hrs");
        assert_eq!(minutes(150), "2.5 Hrs");
        assert_eq!(minutes(30), "0.5 Hrs");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(minutes(45), "45 Min");
        assert_eq!(minutes(100), "100 Min");
    }

    #[test]
    fn test_absent_and_text() {
        assert_eq!(format_duration(None), "");
        assert_eq!(minutes(0), "");
        assert_eq!(
            format_duration(Some(&ExamDuration::Text("Three hours".into()))),
            "Three hours"
        );
    }
}
