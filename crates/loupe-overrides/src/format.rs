#![forbid(unsafe_code)]

//! Display formatting for the property panel.

use loupe_core::StyleValue;

/// Style property names whose values are colors. Drives swatch
/// rendering next to the value.
const COLOR_KEYS: &[&str] = &[
    "color",
    "backgroundColor",
    "borderColor",
    "borderTopColor",
    "borderRightColor",
    "borderBottomColor",
    "borderLeftColor",
    "borderStartColor",
    "borderEndColor",
    "borderBlockColor",
    "borderBlockStartColor",
    "borderBlockEndColor",
    "outlineColor",
    "shadowColor",
    "textDecorationColor",
    "textShadowColor",
    "tintColor",
    "overlayColor",
];

/// Whether the property name holds a color value.
pub fn is_color_key(key: &str) -> bool {
    COLOR_KEYS.contains(&key)
}

/// Format a style value for display: numbers and booleans plain, text
/// quoted.
pub fn format_value(value: &StyleValue) -> String {
    match value {
        StyleValue::Number(n) => n.to_string(),
        StyleValue::Text(s) => format!("\"{s}\""),
        StyleValue::Bool(b) => b.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_value, is_color_key};
    use loupe_core::StyleValue;

    #[test]
    fn color_keys() {
        assert!(is_color_key("backgroundColor"));
        assert!(is_color_key("tintColor"));
        assert!(!is_color_key("width"));
        assert!(!is_color_key("colorful"));
    }

    #[test]
    fn formats_by_shape() {
        assert_eq!(format_value(&StyleValue::Number(12.0)), "12");
        assert_eq!(format_value(&StyleValue::Number(0.5)), "0.5");
        assert_eq!(format_value(&StyleValue::Text("#fff".into())), "\"#fff\"");
        assert_eq!(format_value(&StyleValue::Bool(false)), "false");
    }
}
