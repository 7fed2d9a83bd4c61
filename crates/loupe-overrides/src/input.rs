#![forbid(unsafe_code)]

//! Edit-box input parsing and validation.

use loupe_core::StyleValue;

/// Upper bound on edited value text. Longer input is rejected before it
/// reaches the live tree.
pub const MAX_VALUE_LEN: usize = 256;

/// Whether `key` is acceptable as a style property name: non-empty
/// ASCII, starting with a letter, alphanumeric after that (the host's
/// property names are camelCase identifiers).
pub fn is_valid_style_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// Parse edit-box text back into a style value.
///
/// Empty input falls back to the original value. Surrounding quotes
/// force a text value. Numeric coercion happens only when the original
/// value was numeric — `"5"` typed over a color stays the string `"5"`.
/// `true`/`false` become booleans; everything else is text (color names,
/// hex codes, keywords).
///
/// Returns `None` when the input is rejected: text over
/// [`MAX_VALUE_LEN`], or empty input with no original to fall back to.
pub fn parse_input(text: &str, original: Option<&StyleValue>) -> Option<StyleValue> {
    if text.len() > MAX_VALUE_LEN {
        return None;
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        return original.cloned();
    }

    let quoted = (trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2)
        || (trimmed.starts_with('\'') && trimmed.ends_with('\'') && trimmed.len() >= 2);
    if quoted {
        return Some(StyleValue::Text(trimmed[1..trimmed.len() - 1].to_string()));
    }

    if matches!(original, Some(StyleValue::Number(_))) {
        if let Ok(n) = trimmed.parse::<f64>() {
            if n.is_finite() {
                return Some(StyleValue::Number(n));
            }
        }
    }

    match trimmed {
        "true" => Some(StyleValue::Bool(true)),
        "false" => Some(StyleValue::Bool(false)),
        other => Some(StyleValue::Text(other.to_string())),
    }
}

/// Render a value as editable text: no quotes around strings, numbers
/// and booleans in plain form.
pub fn editable_text(value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) => n.to_string(),
        StyleValue::Text(s) => s.clone(),
        StyleValue::Bool(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{MAX_VALUE_LEN, editable_text, is_valid_style_key, parse_input};
    use loupe_core::StyleValue;

    // --- Key validation ---

    #[test]
    fn valid_keys() {
        assert!(is_valid_style_key("margin"));
        assert!(is_valid_style_key("marginTop"));
        assert!(is_valid_style_key("borderTopWidth2"));
    }

    #[test]
    fn invalid_keys() {
        assert!(!is_valid_style_key(""));
        assert!(!is_valid_style_key("2margin"));
        assert!(!is_valid_style_key("margin-top"));
        assert!(!is_valid_style_key("margin top"));
        assert!(!is_valid_style_key("päd"));
    }

    // --- Parsing ---

    #[test]
    fn empty_input_falls_back_to_original() {
        let original = StyleValue::Number(10.0);
        assert_eq!(parse_input("  ", Some(&original)), Some(original));
        assert_eq!(parse_input("", None), None);
    }

    #[test]
    fn quotes_force_text() {
        assert_eq!(
            parse_input("\"42\"", Some(&StyleValue::Number(1.0))),
            Some(StyleValue::Text("42".into()))
        );
        assert_eq!(
            parse_input("'red'", None),
            Some(StyleValue::Text("red".into()))
        );
    }

    #[test]
    fn numeric_coercion_only_when_original_numeric() {
        assert_eq!(
            parse_input("42.5", Some(&StyleValue::Number(1.0))),
            Some(StyleValue::Number(42.5))
        );
        assert_eq!(
            parse_input("42.5", Some(&StyleValue::Text("red".into()))),
            Some(StyleValue::Text("42.5".into()))
        );
        assert_eq!(parse_input("42.5", None), Some(StyleValue::Text("42.5".into())));
    }

    #[test]
    fn non_finite_numbers_stay_text() {
        assert_eq!(
            parse_input("inf", Some(&StyleValue::Number(1.0))),
            Some(StyleValue::Text("inf".into()))
        );
    }

    #[test]
    fn non_numeric_text_over_number_stays_text() {
        assert_eq!(
            parse_input("auto", Some(&StyleValue::Number(1.0))),
            Some(StyleValue::Text("auto".into()))
        );
    }

    #[test]
    fn boolean_literals() {
        assert_eq!(parse_input("true", None), Some(StyleValue::Bool(true)));
        assert_eq!(parse_input("false", None), Some(StyleValue::Bool(false)));
    }

    #[test]
    fn oversized_input_is_rejected() {
        let long = "x".repeat(MAX_VALUE_LEN + 1);
        assert_eq!(parse_input(&long, None), None);
    }

    // --- Editable text ---

    #[test]
    fn editable_text_has_no_quotes() {
        assert_eq!(editable_text(&StyleValue::Text("red".into())), "red");
        assert_eq!(editable_text(&StyleValue::Number(10.0)), "10");
        assert_eq!(editable_text(&StyleValue::Bool(true)), "true");
    }
}
