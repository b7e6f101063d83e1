//! Color resolution.
//!
//! A [`ColorRef`] resolves to an [`RgbColor`] by checking, in order: a literal
//! color, the deck theme, the built-in palette, and a `#RRGGBB` hex string.
//! Anything else resolves to black. Resolution never fails.

use crate::types::{ColorRef, RgbColor};
use std::collections::HashMap;

/// Built-in palette names, available to every deck.
pub const PALETTE_NAMES: &[&str] = &[
    "white",
    "black",
    "darkBlue",
    "accentBlue",
    "darkGray",
    "success",
    "warning",
    "danger",
];

/// Look up a built-in palette color.
#[must_use]
pub fn palette(name: &str) -> Option<RgbColor> {
    let color = match name {
        "white" => RgbColor::WHITE,
        "black" => RgbColor::BLACK,
        "darkBlue" => RgbColor::new(0.102, 0.212, 0.365),
        "accentBlue" => RgbColor::new(0.193, 0.51, 0.784),
        "darkGray" => RgbColor::new(0.176, 0.216, 0.282),
        "success" => RgbColor::new(0.2, 0.7, 0.3),
        "warning" => RgbColor::new(0.9, 0.6, 0.1),
        "danger" => RgbColor::new(0.8, 0.2, 0.2),
        _ => return None,
    };
    Some(color)
}

/// Resolve a color reference against an optional theme.
///
/// Theme entries win over palette entries with the same name.
#[must_use]
pub fn resolve(color: &ColorRef, theme: Option<&HashMap<String, RgbColor>>) -> RgbColor {
    let token = match color {
        ColorRef::Literal(rgb) => return *rgb,
        ColorRef::Reference(token) => token.as_str(),
    };

    if let Some(rgb) = theme.and_then(|t| t.get(token)) {
        return *rgb;
    }

    if let Some(rgb) = palette(token) {
        return rgb;
    }

    if token.starts_with('#') {
        return parse_hex(token).unwrap_or(RgbColor::BLACK);
    }

    log::debug!("Unknown color '{}', using black", token);
    RgbColor::BLACK
}

/// Parse `RRGGBB` (with or without a leading `#`, any case).
///
/// Returns `None` unless there are exactly six hex digits.
#[must_use]
pub fn parse_hex(hex: &str) -> Option<RgbColor> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| f64::from(v) / 255.0)
    };

    Some(RgbColor::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(token: &str) -> ColorRef {
        ColorRef::from(token)
    }

    #[test]
    fn test_literal_returned_unchanged() {
        let color = RgbColor::new(0.5, 0.5, 0.5);
        assert_eq!(resolve(&ColorRef::Literal(color), None), color);

        let mut theme = HashMap::new();
        theme.insert("x".to_string(), RgbColor::WHITE);
        assert_eq!(resolve(&ColorRef::Literal(color), Some(&theme)), color);
    }

    #[test]
    fn test_palette_names() {
        assert_eq!(resolve(&reference("white"), None), RgbColor::new(1.0, 1.0, 1.0));
        assert_eq!(resolve(&reference("black"), None), RgbColor::new(0.0, 0.0, 0.0));
        assert_eq!(resolve(&reference("success"), None), RgbColor::new(0.2, 0.7, 0.3));
        assert_eq!(resolve(&reference("warning"), None), RgbColor::new(0.9, 0.6, 0.1));
        assert_eq!(resolve(&reference("danger"), None), RgbColor::new(0.8, 0.2, 0.2));
    }

    #[test]
    fn test_every_palette_name_resolves() {
        for name in PALETTE_NAMES {
            assert!(palette(name).is_some(), "missing palette entry {name}");
        }
    }

    #[test]
    fn test_theme_before_palette() {
        let mut theme = HashMap::new();
        theme.insert("custom".to_string(), RgbColor::new(0.1, 0.2, 0.3));
        theme.insert("white".to_string(), RgbColor::new(0.9, 0.9, 0.9));

        assert_eq!(
            resolve(&reference("custom"), Some(&theme)),
            RgbColor::new(0.1, 0.2, 0.3)
        );
        assert_eq!(
            resolve(&reference("white"), Some(&theme)),
            RgbColor::new(0.9, 0.9, 0.9)
        );
        // Keys missing from the theme still fall through to the palette.
        assert_eq!(resolve(&reference("black"), Some(&theme)), RgbColor::BLACK);
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!(resolve(&reference("#ff0000"), None), RgbColor::new(1.0, 0.0, 0.0));
        assert_eq!(resolve(&reference("#00ff00"), None), RgbColor::new(0.0, 1.0, 0.0));
        assert_eq!(resolve(&reference("#0000ff"), None), RgbColor::new(0.0, 0.0, 1.0));
        assert_eq!(resolve(&reference("#FFFFFF"), None), RgbColor::WHITE);
    }

    #[test]
    fn test_hex_channel_scaling() {
        let color = parse_hex("#336699").unwrap();
        assert!((color.red - 0.2).abs() < 1e-9);
        assert!((color.green - 0.4).abs() < 1e-9);
        assert!((color.blue - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_parse_hex_without_hash() {
        assert_eq!(parse_hex("ff0000"), Some(RgbColor::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn test_unknown_name_is_black() {
        assert_eq!(resolve(&reference("unknownColor"), None), RgbColor::BLACK);
        // Bare hex without '#' is not a hex reference.
        assert_eq!(resolve(&reference("ff0000"), None), RgbColor::BLACK);
    }

    #[test]
    fn test_malformed_hex_is_black() {
        assert_eq!(resolve(&reference("#xyz"), None), RgbColor::BLACK);
        assert_eq!(resolve(&reference("#ff00"), None), RgbColor::BLACK);
        assert_eq!(resolve(&reference("#ff00zz"), None), RgbColor::BLACK);
        assert_eq!(resolve(&reference("#ff000000"), None), RgbColor::BLACK);
    }
}
