//! Small text predicates shared by request validation.

/// Returns `true` when the value is absent or contains only whitespace.
///
/// # Examples
/// ```
/// use common::utils::text::is_blank;
/// assert!(is_blank(None));
/// assert!(is_blank(Some("  ")));
/// assert!(!is_blank(Some("A100")));
/// ```
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::is_blank;

    #[test]
    fn absent_is_blank() {
        assert!(is_blank(None));
    }

    #[test]
    fn empty_and_whitespace_are_blank() {
        assert!(is_blank(Some("")));
        assert!(is_blank(Some("  ")));
        assert!(is_blank(Some("\t\n ")));
    }

    #[test]
    fn text_with_content_is_not_blank() {
        assert!(!is_blank(Some("x")));
        assert!(!is_blank(Some("  A100  ")));
    }
}
