// SPDX-License-Identifier: PMPL-1.0-or-later
//! Color contrast math - WCAG 2.x relative luminance and contrast ratio
//!
//! Only hex notation (`#rgb`, `#rrggbb`) is understood. Named colors,
//! `rgb()` and cascaded styles are out of reach for an inline-style scan,
//! so callers treat `None` from [`parse_color`] as "skip this element".
//!
//! <https://www.w3.org/TR/WCAG21/#dfn-relative-luminance>

/// An sRGB color with channels normalized to `[0, 1]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0)
    }
}

/// Parse a CSS hex color into normalized channels.
///
/// Surrounding whitespace and letter case are ignored. Three-digit forms
/// expand by duplicating each digit (`#abc` is `#aabbcc`).
pub fn parse_color(value: &str) -> Option<Rgb> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let expanded: String = match hex.len() {
        3 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 => hex.to_string(),
        _ => return None,
    };

    let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    Some(Rgb::from_u8(channel(0)?, channel(2)?, channel(4)?))
}

/// sRGB gamma expansion of one channel
fn linearize(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance, `0.0` for black through `1.0` for white
pub fn relative_luminance(color: Rgb) -> f64 {
    0.2126 * linearize(color.r) + 0.7152 * linearize(color.g) + 0.0722 * linearize(color.b)
}

/// Contrast ratio between two luminances, in `[1, 21]`. Argument order
/// does not matter.
pub fn contrast_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two colors
pub fn color_contrast(fg: Rgb, bg: Rgb) -> f64 {
    contrast_ratio(relative_luminance(fg), relative_luminance(bg))
}
