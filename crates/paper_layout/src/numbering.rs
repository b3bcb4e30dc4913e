//! Question, part, subpart and option labels

use exam_model::NumberStyle;

/// Lowercase roman numerals for 1 through 20
const ROMAN: [&str; 20] = [
    "i", "ii", "iii", "iv", "v", "vi", "vii", "viii", "ix", "x", "xi", "xii", "xiii", "xiv",
    "xv", "xvi", "xvii", "xviii", "xix", "xx",
];

/// Display string for a 1-based question counter in the given style
///
/// Roman numerals only cover 1 through 20; larger counters fall back to the
/// plain integer but keep the trailing period. Alphabetic labels cycle every
/// 26 questions and never carry a period.
pub fn format_question_number(counter: u32, style: NumberStyle) -> String {
    match style {
        NumberStyle::Plain => format!("{}.", counter),
        NumberStyle::QPrefixed => format!("Q{}.", counter),
        NumberStyle::Roman => match roman(counter as usize) {
            Some(numeral) => format!("{}.", numeral),
            None => format!("{}.", counter),
        },
        NumberStyle::Alphabetic => {
            let offset = (counter.saturating_sub(1) % 26) as u8;
            format!("({})", char::from(b'a' + offset))
        }
    }
}

fn roman(value: usize) -> Option<&'static str> {
    value.checked_sub(1).and_then(|i| ROMAN.get(i)).copied()
}

/// Label for the part at `index` (0-based): `(a)`, `(b)`, ...
///
/// Letters stop at `z`; later parts use their 1-based position.
pub fn part_label(index: usize) -> String {
    match u8::try_from(index) {
        Ok(i) if i < 26 => format!("({})", char::from(b'a' + i)),
        _ => format!("({})", index + 1),
    }
}

/// Label for a subpart: `(i)` to `(vi)`, then `(7)`, `(8)`, ...
pub fn subpart_label(index: usize) -> String {
    bounded_label(index, &ROMAN[..6])
}

/// Label for a top-level multiple-choice option: `(a)` to `(f)`, then `(7)`, ...
pub fn option_label(index: usize) -> String {
    bounded_label(index, &["a", "b", "c", "d", "e", "f"])
}

/// Label for a multiple-choice option inside a part: `(i)` to `(iv)`, then `(5)`, ...
pub fn part_option_label(index: usize) -> String {
    bounded_label(index, &ROMAN[..4])
}

fn bounded_label(index: usize, labels: &[&str]) -> String {
    match labels.get(index) {
        Some(label) => format!("({})", label),
        None => format!("({})", index + 1),
    }
}
