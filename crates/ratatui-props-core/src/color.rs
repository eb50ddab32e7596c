//! Display colour identifiers.
//!
//! Props carry colours as free-form text (`"red"`, `"green"`, `"#007bff"`). Resolution never
//! fails loudly: an identifier that cannot be resolved yields `None` and the caller renders
//! without that colour.
use ratatui::style::Color;
use std::str::FromStr;

const EXTRA_NAMES: &[(&str, Color)] = &[
    ("orange", Color::Rgb(0xff, 0xa5, 0x00)),
    ("purple", Color::Rgb(0x80, 0x00, 0x80)),
    ("pink", Color::Rgb(0xff, 0xc0, 0xcb)),
    ("teal", Color::Rgb(0x00, 0x80, 0x80)),
    ("navy", Color::Rgb(0x00, 0x00, 0x80)),
    ("maroon", Color::Rgb(0x80, 0x00, 0x00)),
    ("olive", Color::Rgb(0x80, 0x80, 0x00)),
    ("lime", Color::Rgb(0x00, 0xff, 0x00)),
    ("brown", Color::Rgb(0xa5, 0x2a, 0x2a)),
    ("gold", Color::Rgb(0xff, 0xd7, 0x00)),
];

pub fn resolve_color(id: &str) -> Option<Color> {
    let id = id.trim();
    if id.is_empty() {
        return None;
    }
    if let Ok(color) = Color::from_str(id) {
        return Some(color);
    }
    if let Some(color) = parse_short_hex(id) {
        return Some(color);
    }
    let lower = id.to_ascii_lowercase();
    EXTRA_NAMES
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
}

/// `#rgb` shorthand, each digit doubled.
fn parse_short_hex(id: &str) -> Option<Color> {
    let digits = id.strip_prefix('#')?;
    if digits.len() != 3 {
        return None;
    }
    let mut rgb = [0u8; 3];
    for (slot, ch) in rgb.iter_mut().zip(digits.chars()) {
        let v = ch.to_digit(16)? as u8;
        *slot = v * 16 + v;
    }
    Some(Color::Rgb(rgb[0], rgb[1], rgb[2]))
}
