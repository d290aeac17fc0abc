//! Value normalization for numeric columns.

/// Strips every character outside `[0-9.]` from a raw field value.
///
/// Deckbox formats prices as `$12.50 USD` and counts occasionally carry
/// stray annotations; the destination columns expect bare numerals. A
/// value with no digits at all scrubs down to the empty string.
pub fn scrub_numeric(raw: &str) -> String {
    raw.chars()
        .filter(|ch| ch.is_ascii_digit() || *ch == '.')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrub_numeric() {
        assert_eq!(scrub_numeric("$12.50 USD"), "12.50");
        assert_eq!(scrub_numeric("3"), "3");
        assert_eq!(scrub_numeric("abc"), "");
        assert_eq!(scrub_numeric(""), "");
        assert_eq!(scrub_numeric("1,234"), "1234");
    }
}
