//! Hex color validation and normalization.
//!
//! Validation and normalization are separate steps. [`normalize_color`] never
//! rejects a value, so callers must run [`is_valid_color`] on the normalized
//! result before storing it.

use once_cell::sync::Lazy;
use regex::Regex;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3}|[A-Fa-f0-9]{8})$")
        .expect("hex color pattern is valid")
});

static BARE_HEX6: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Fa-f0-9]{6}$").expect("bare hex pattern is valid"));

/// Returns `true` when `color` is `#` followed by exactly 3, 6 or 8 hex digits.
pub fn is_valid_color(color: &str) -> bool {
    HEX_COLOR.is_match(color)
}

/// Normalize a color string for output.
///
/// - `#RRGGBBAA` loses its alpha channel and becomes `#RRGGBB`
/// - a bare `RRGGBB` gains a `#` prefix
/// - anything else is returned unchanged, including invalid input
pub fn normalize_color(color: &str) -> String {
    if color.is_empty() {
        return String::new();
    }

    if color.len() == 9 && color.starts_with('#') {
        if let Some(rgb) = color.get(..7) {
            return rgb.to_string();
        }
    }

    if !color.starts_with('#') && BARE_HEX6.is_match(color) {
        return format!("#{color}");
    }

    color.to_string()
}

/// Normalize then validate, returning the color only when it is safe to store.
pub fn sanitize_color(color: &str) -> Option<String> {
    let normalized = normalize_color(color);
    if is_valid_color(&normalized) {
        Some(normalized)
    } else {
        None
    }
}

/// Parse a six digit hex color (with or without `#`) into its RGB components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;

    Some((r, g, b))
}

/// Format RGB components as a lowercase `#rrggbb` string.
pub fn rgb_to_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_color() {
        // Valid colors
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#1e1e1e"));
        assert!(is_valid_color("#1E1E1E80"));

        // Invalid colors
        assert!(!is_valid_color("1e1e1e"));
        assert!(!is_valid_color("#1e1e1"));
        assert!(!is_valid_color("#ggg"));
        assert!(!is_valid_color("#1e1e1e8"));
        assert!(!is_valid_color("invalid-color"));
        assert!(!is_valid_color(""));
        assert!(!is_valid_color(" #1e1e1e"));
    }

    #[test]
    fn test_normalize_strips_alpha() {
        assert_eq!(normalize_color("#1e1e1e80"), "#1e1e1e");
        assert_eq!(normalize_color("#FFFFFF00"), "#FFFFFF");
    }

    #[test]
    fn test_normalize_adds_prefix() {
        assert_eq!(normalize_color("d4d4d4"), "#d4d4d4");
        // Only six digit bare values are prefixed
        assert_eq!(normalize_color("fff"), "fff");
    }

    #[test]
    fn test_normalize_passes_through() {
        assert_eq!(normalize_color(""), "");
        assert_eq!(normalize_color("#abc"), "#abc");
        assert_eq!(normalize_color("#1e1e1e"), "#1e1e1e");
        assert_eq!(normalize_color("invalid-color"), "invalid-color");
        // Nine characters but not a hex color: truncated, then rejected by validation
        assert_eq!(normalize_color("#zzzzzzzz"), "#zzzzzz");
        assert!(!is_valid_color(&normalize_color("#zzzzzzzz")));
    }

    #[test]
    fn test_sanitize_color() {
        assert_eq!(sanitize_color("#1e1e1e80"), Some("#1e1e1e".to_string()));
        assert_eq!(sanitize_color("569cd6"), Some("#569cd6".to_string()));
        assert_eq!(sanitize_color("red"), None);
        assert_eq!(sanitize_color(""), None);
    }

    #[test]
    fn test_hex_rgb_conversion() {
        assert_eq!(hex_to_rgb("#569cd6"), Some((0x56, 0x9c, 0xd6)));
        assert_eq!(hex_to_rgb("ce9178"), Some((0xce, 0x91, 0x78)));
        assert_eq!(hex_to_rgb("#fff"), None);
        assert_eq!(hex_to_rgb("#gggggg"), None);
        assert_eq!(rgb_to_hex(0x1e, 0x1e, 0x1e), "#1e1e1e");
        assert_eq!(rgb_to_hex(255, 0, 10), "#ff000a");
    }
}
