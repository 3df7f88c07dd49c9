//! Centralized, hardcoded UI settings for the terminal report.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / labels
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const GLYPH_SECTION_BULLET: &str = "•";
pub const LABEL_ERROR: &str = "error:";

pub const SECTION_PIXEL: &str = "Detected pixel";
pub const SECTION_MATCH: &str = "Closest catalog color";
pub const SECTION_PREVIEW: &str = "Preview";
pub const SWATCH_LABEL_DETECTED: &str = "Detected";
pub const SWATCH_LABEL_MATCH: &str = "Closest match";
/// Gap between the two preview swatches.
pub const SWATCH_GAP: &str = "  ";

// ---------------------------------------------------------------------------
// Colors
// ---------------------------------------------------------------------------

pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_TITLE: Color = Color::Cyan;
pub const COLOR_FIELD_KEY: Color = Color::DarkGrey;
pub const COLOR_FIELD_VALUE: Color = Color::White;
pub const COLOR_MATCH_NAME: Color = Color::Yellow;
pub const COLOR_ERROR: Color = Color::Red;

/// Swatch label text on light backgrounds.
pub const COLOR_SWATCH_TEXT_DARK: Color = Color::Black;
/// Swatch label text on dark backgrounds.
pub const COLOR_SWATCH_TEXT_LIGHT: Color = Color::White;
/// Rec. 601 luma above which a background counts as light (0..=255 scale).
pub const SWATCH_LIGHT_LUMA: u32 = 140;
