//! CLI command implementations

pub mod inspect;
pub mod json_output;
pub mod layout;
pub mod measure;
pub mod validate;

/// Splits text into the single lines the layout engine accepts.
///
/// Empty text is one empty line; a trailing `\r` is dropped from each line.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Vertical distance covered by `lines` lines, saturating at the `i32` range.
pub(crate) fn line_span(line_height: i32, lines: usize) -> i32 {
    line_height.saturating_mul(i32::try_from(lines).unwrap_or(i32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines() {
        assert_eq!(split_lines(""), vec![""]);
        assert_eq!(split_lines("ab"), vec!["ab"]);
        assert_eq!(split_lines("a\r\nb\n"), vec!["a", "b", ""]);
    }

    #[test]
    fn test_line_span_saturates() {
        assert_eq!(line_span(16, 0), 0);
        assert_eq!(line_span(16, 3), 48);
        assert_eq!(line_span(16, usize::MAX), i32::MAX);
        assert_eq!(line_span(-2, usize::MAX), i32::MIN);
        assert_eq!(line_span(1, i32::MAX as usize + 1), i32::MAX);
    }
}
