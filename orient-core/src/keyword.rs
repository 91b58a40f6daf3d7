//! Keyword normalisation shared by profile and catalog loaders.
//!
//! Tag matching is exact and case-sensitive. Callers feeding user or file
//! input into [`StudentProfile`](crate::StudentProfile) or
//! [`Program`](crate::Program) run keywords through [`normalise_keyword`]
//! first so that `"Informatique "` and `"informatique"` meet.

/// Trim surrounding whitespace and lowercase a keyword.
///
/// Returns `None` when nothing remains.
///
/// # Examples
/// ```
/// use orient_core::normalise_keyword;
///
/// assert_eq!(normalise_keyword("  Santé "), Some("santé".to_owned()));
/// assert_eq!(normalise_keyword("   "), None);
/// ```
#[must_use]
pub fn normalise_keyword(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Split a comma-separated list into normalised keywords.
///
/// Empty items are dropped; order and duplicates are preserved so callers can
/// decide how to collect them.
///
/// # Examples
/// ```
/// use orient_core::parse_keyword_list;
///
/// let keywords = parse_keyword_list("Informatique, ,Algorithmes");
/// assert_eq!(keywords, vec!["informatique", "algorithmes"]);
/// ```
#[must_use]
pub fn parse_keyword_list(raw: &str) -> Vec<String> {
    raw.split(',').filter_map(normalise_keyword).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", &[])]
    #[case("  ,  , ", &[])]
    #[case("Maths", &["maths"])]
    #[case("intelligence artificielle, Finance", &["intelligence artificielle", "finance"])]
    fn splits_and_normalises(#[case] raw: &str, #[case] expected: &[&str]) {
        assert_eq!(parse_keyword_list(raw), expected);
    }

    #[test]
    fn keeps_inner_whitespace() {
        assert_eq!(
            normalise_keyword(" Contact  Humain "),
            Some("contact  humain".to_owned())
        );
    }
}
