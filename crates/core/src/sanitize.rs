//! Free-text sanitisation applied before persistence.
//!
//! User-supplied prose (descriptions, message bodies, addresses) is stored
//! with markup stripped so nothing downstream has to re-escape it.

/// Strip `<...>` markup from a string and collapse the result's surrounding
/// whitespace. An unterminated `<` drops the remainder rather than letting a
/// partial tag through.
pub fn strip_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;

    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }

    out.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(strip_markup("hearing moved to courtroom 4"), "hearing moved to courtroom 4");
    }

    #[test]
    fn tags_are_removed() {
        assert_eq!(
            strip_markup("<b>urgent</b> filing <script>alert(1)</script>deadline"),
            "urgent filing alert(1)deadline"
        );
    }

    #[test]
    fn unterminated_tag_drops_remainder() {
        assert_eq!(strip_markup("before <img src=x onerror="), "before");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(strip_markup("  spaced  "), "spaced");
    }
}
