// src/core/sanitize.rs

/// Collapse sequences of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// `data_role` → `data-role`. Attribute keys in structured selectors.
pub fn dasherize(s: &str) -> String {
    s.replace('_', "-")
}

/// `first-name` → `first_name`. Field keys in materialized forms.
pub fn underscore(s: &str) -> String {
    s.replace('-', "_")
}

/// Parse a `colspan` attribute. Anything that is not a positive integer counts as 1.
pub fn parse_span(raw: Option<&str>) -> usize {
    raw.and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \n\t b  "), "a b");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn key_case_helpers() {
        assert_eq!(dasherize("test_role"), "test-role");
        assert_eq!(underscore("first-name[last-name]"), "first_name[last_name]");
    }

    #[test]
    fn span_falls_back_to_one() {
        assert_eq!(parse_span(Some("3")), 3);
        assert_eq!(parse_span(Some(" 2 ")), 2);
        assert_eq!(parse_span(Some("0")), 1);
        assert_eq!(parse_span(Some("-2")), 1);
        assert_eq!(parse_span(Some("wide")), 1);
        assert_eq!(parse_span(None), 1);
    }
}
