//! Fixed-width formatting utilities for the printed report
//!
//! Text helpers truncate to the field width so a column never pushes the next
//! one out of place. Numbers are never truncated: `fit_number` lets an
//! over-wide value spill past its field instead.

/// Keep at most `width` characters
pub fn truncate(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Left-align text in a field of given width
pub fn fit_left(s: &str, width: usize) -> String {
    format!("{:<width$}", truncate(s, width), width = width)
}

/// Right-align text in a field of given width
pub fn fit_right(s: &str, width: usize) -> String {
    format!("{:>width$}", truncate(s, width), width = width)
}

/// Right-align a number in a field of given width, never cutting it
pub fn fit_number(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Whether a value fits its field
pub fn fits(s: &str, width: usize) -> bool {
    s.chars().count() <= width
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "-".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("ABCDEF", 3), "ABC");
        assert_eq!(truncate("AB", 3), "AB");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn test_fit_left() {
        assert_eq!(fit_left("JOHN", 6), "JOHN  ");
        assert_eq!(fit_left("JOHNATHAN", 6), "JOHNAT");
    }

    #[test]
    fn test_fit_right() {
        assert_eq!(fit_right("1,000.00", 10), "  1,000.00");
        assert_eq!(fit_right("12345678901", 10), "1234567890");
    }

    #[test]
    fn test_fit_number_never_truncates() {
        assert_eq!(fit_number("1,000.00", 10), "  1,000.00");
        assert_eq!(fit_number("12345678901", 10), "12345678901");
        assert!(fits("1234567890", 10));
        assert!(!fits("12345678901", 10));
    }

    #[test]
    fn test_separator() {
        assert_eq!(separator(4), "----");
    }
}
