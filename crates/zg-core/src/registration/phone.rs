/// Formats a raw digit string into the `AAA-BBBB-CCCC` display form.
///
/// The groups are the fixed ranges 0..3, 3..7 and 7..11; shorter input
/// yields shorter or empty trailing groups. No validation happens here;
/// the draft setter already caps the raw value.
pub fn format_phone_number(digits: &str) -> String {
    format!(
        "{}-{}-{}",
        segment(digits, 0, 3),
        segment(digits, 3, 7),
        segment(digits, 7, 11)
    )
}

fn segment(digits: &str, start: usize, end: usize) -> &str {
    let start = start.min(digits.len());
    let end = end.min(digits.len());
    digits.get(start..end).unwrap_or("")
}
