//! Helpers for the multi-line strings carried by the display models.

/// Line separator used inside content strings
pub const LINE_SEPARATOR: char = '\n';

/// Split a display string into the lines it renders as.
///
/// An empty string yields no lines, so callers can use `is_empty()` on the
/// result to decide whether a column is shown at all.
pub fn display_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(LINE_SEPARATOR).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_has_no_lines() {
        assert!(display_lines("").is_empty());
    }

    #[test]
    fn test_single_line() {
        assert_eq!(display_lines("S$6.20"), vec!["S$6.20"]);
    }

    #[test]
    fn test_split_on_separator() {
        assert_eq!(display_lines("30.000đ\n+4 points"), vec!["30.000đ", "+4 points"]);
    }

    #[test]
    fn test_trailing_separator_keeps_empty_segment() {
        assert_eq!(display_lines("a\n"), vec!["a", ""]);
    }
}
