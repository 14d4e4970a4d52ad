//! TOML style-sheet loader.
//!
//! A style sheet is a set of named [ControlStyle] overrides:
//!
//! ```toml
//! [style.default]
//! fill = "#d6d6d6"
//! padding = 5
//!
//! [style.toolbar]
//! fill = "#3a3a3a"
//! fill_hovered = "#4a4a4a80"
//! cursor_hovered = "hand"
//! label_chrome = true
//! ```
//!
//! Every entry starts from [ControlStyle::defaults] and applies only the
//! keys present in the file.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use vello::peniko::{Brush, Color};

use crate::cursor::CursorStyle;
use crate::error::StyleError;
use crate::style::ControlStyle;

/// Parse a hex color string with optional alpha channel.
///
/// Supports `#rrggbb` (opaque) and `#rrggbbaa`.
pub fn parse_hex_color(hex: &str) -> Result<Color, StyleError> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    let invalid = || StyleError::InvalidColor(hex.to_string());

    let byte = |range: std::ops::Range<usize>| {
        digits
            .get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .ok_or_else(invalid)
    };

    match digits.len() {
        6 => Ok(Color::from_rgb8(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Ok(Color::from_rgba8(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)?,
        )),
        _ => Err(invalid()),
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawStyle {
    font_family: Option<String>,
    font_size: Option<f32>,
    text: Option<String>,
    fill: Option<String>,
    fill_hovered: Option<String>,
    stroke: Option<String>,
    stroke_width: Option<f64>,
    padding: Option<i32>,
    rounding: Option<f32>,
    cursor: Option<String>,
    cursor_hovered: Option<String>,
    label_chrome: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawSheet {
    style: IndexMap<String, RawStyle>,
}

/// A set of named control styles loaded from a TOML file.
///
/// Entries keep the order they appear in the file.
#[derive(Debug, Default)]
pub struct StyleSheet {
    styles: IndexMap<String, ControlStyle>,
}

impl StyleSheet {
    /// Load a style sheet from a TOML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StyleError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path)
            .map_err(|e| StyleError::ReadError(path.to_path_buf(), e))?;
        Self::load_from_toml(&content, path)
    }

    /// Load a style sheet from TOML content.
    pub fn load_from_toml<P: AsRef<Path>>(content: &str, path: P) -> Result<Self, StyleError> {
        let path = path.as_ref();
        let raw: RawSheet = toml::from_str(content)
            .map_err(|e| StyleError::ParseError(path.to_path_buf(), e.to_string()))?;

        let mut styles = IndexMap::with_capacity(raw.style.len());
        for (name, raw_style) in raw.style {
            styles.insert(name, apply_overrides(ControlStyle::defaults(), raw_style)?);
        }

        log::debug!(
            "loaded {} control style(s) from {}",
            styles.len(),
            path.display()
        );
        Ok(Self { styles })
    }

    /// Look up a named style.
    pub fn get(&self, name: &str) -> Option<&ControlStyle> {
        self.styles.get(name)
    }

    /// Look up a named style, falling back to the built-in defaults.
    pub fn get_or_defaults(&self, name: &str) -> ControlStyle {
        self.styles
            .get(name)
            .cloned()
            .unwrap_or_else(ControlStyle::defaults)
    }

    /// Names of all loaded styles, in file order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Number of loaded styles.
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether the sheet is empty.
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

fn apply_overrides(mut style: ControlStyle, raw: RawStyle) -> Result<ControlStyle, StyleError> {
    if let Some(family) = raw.font_family {
        style.font.family = family;
    }
    if let Some(size) = raw.font_size {
        if size <= 0.0 {
            return Err(StyleError::InvalidMetric("font_size", size as f64));
        }
        style.font.size = size;
    }
    if let Some(hex) = raw.text {
        style.text = Brush::Solid(parse_hex_color(&hex)?);
    }
    if let Some(hex) = raw.fill {
        style.fill = Brush::Solid(parse_hex_color(&hex)?);
    }
    if let Some(hex) = raw.fill_hovered {
        style.fill_hovered = Brush::Solid(parse_hex_color(&hex)?);
    }
    if let Some(hex) = raw.stroke {
        style.stroke = Brush::Solid(parse_hex_color(&hex)?);
    }
    if let Some(width) = raw.stroke_width {
        if width < 0.0 {
            return Err(StyleError::InvalidMetric("stroke_width", width));
        }
        style.stroke_width = width;
    }
    if let Some(padding) = raw.padding {
        if padding < 0 {
            return Err(StyleError::InvalidMetric("padding", padding as f64));
        }
        style.padding = padding;
    }
    if let Some(rounding) = raw.rounding {
        if !(0.0..=0.5).contains(&rounding) {
            return Err(StyleError::InvalidMetric("rounding", rounding as f64));
        }
        style.rounding = rounding;
    }
    if let Some(name) = raw.cursor {
        style.cursor = CursorStyle::from_name(&name).ok_or(StyleError::InvalidCursor(name))?;
    }
    if let Some(name) = raw.cursor_hovered {
        style.cursor_hovered =
            CursorStyle::from_name(&name).ok_or(StyleError::InvalidCursor(name))?;
    }
    if let Some(chrome) = raw.label_chrome {
        style.label_chrome = chrome;
    }
    Ok(style)
}
