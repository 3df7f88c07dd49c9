//! Rendering contract and the default terminal/JSON implementations.
//!
//! `RenderSink` is the presentation boundary: it receives finished
//! inspection results and never computes anything itself. Sinks write to a
//! caller-supplied writer so tests can capture output.

use std::io::{self, Write};

use crossterm::style::{Color, Stylize};
use serde::Serialize;

use crate::catalog::{ColorCatalog, ColorEntry};
use crate::color::Rgb;
use crate::inspect::InspectionResult;
use crate::ui::settings;

/// Injectable rendering interface used by the command layer.
pub trait RenderSink {
    /// Render one inspected pixel, with its image coordinate when known.
    fn inspection(
        &self,
        out: &mut dyn Write,
        coordinate: Option<(u32, u32)>,
        result: &InspectionResult,
    ) -> io::Result<()>;
    /// Render every catalog entry in order.
    fn catalog(&self, out: &mut dyn Write, catalog: &ColorCatalog) -> io::Result<()>;
    /// Render a one-line status message.
    fn notice(&self, out: &mut dyn Write, message: &str) -> io::Result<()>;
}

// ---------------------------------------------------------------------------
// Terminal renderer
// ---------------------------------------------------------------------------

/// Styled text output with truecolor swatches.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    /// Whether ANSI color/style output is enabled.
    color: bool,
    /// Swatch width in terminal cells.
    swatch_width: usize,
}

impl Renderer {
    pub fn new(color: bool, swatch_width: u16) -> Self {
        Self {
            color,
            swatch_width: usize::from(swatch_width.max(1)),
        }
    }

    /// Whether ANSI styling is on.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Print an error line to stderr.
    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", settings::LABEL_ERROR.with(settings::COLOR_ERROR).bold());
        } else {
            eprintln!("{} {msg}", settings::LABEL_ERROR);
        }
    }

    fn section(&self, out: &mut dyn Write, title: &str) -> io::Result<()> {
        if self.color {
            writeln!(
                out,
                "{} {}",
                settings::GLYPH_SECTION_BULLET.with(settings::COLOR_SECTION_BULLET),
                title.with(settings::COLOR_SECTION_TITLE).bold()
            )
        } else {
            writeln!(out, "{title}:")
        }
    }

    fn field(&self, out: &mut dyn Write, key: &str, value: &str) -> io::Result<()> {
        self.field_colored(out, key, value, settings::COLOR_FIELD_VALUE)
    }

    fn field_colored(
        &self,
        out: &mut dyn Write,
        key: &str,
        value: &str,
        value_color: Color,
    ) -> io::Result<()> {
        if self.color {
            writeln!(
                out,
                "{}{} {}",
                settings::INDENT_1,
                format!("{key}:").with(settings::COLOR_FIELD_KEY),
                value.with(value_color),
            )
        } else {
            writeln!(out, "{}{key}: {value}", settings::INDENT_1)
        }
    }

    /// A block of at least `swatch_width` cells filled with `rgb`, labelled.
    ///
    /// The block widens to keep the whole label visible. Without color the
    /// swatch degrades to a bracketed hex code.
    fn swatch(&self, rgb: Rgb, label: &str) -> String {
        if !self.color {
            return if label.is_empty() {
                format!("[{}]", rgb.to_hex())
            } else {
                format!("[{label} {}]", rgb.to_hex())
            };
        }
        let width = self.swatch_width.max(label.chars().count() + 1);
        let padded = format!("{label:<width$}");
        format!(
            "{}",
            padded
                .with(swatch_text_color(rgb))
                .on(Color::Rgb {
                    r: rgb.r,
                    g: rgb.g,
                    b: rgb.b,
                })
        )
    }

    fn entry_fields(&self, out: &mut dyn Write, entry: &ColorEntry) -> io::Result<()> {
        self.field_colored(out, "name", entry.name(), settings::COLOR_MATCH_NAME)?;
        self.field(out, "rgb", &entry.rgb().to_string())?;
        self.field(out, "hex", entry.hex())
    }
}

impl RenderSink for Renderer {
    fn inspection(
        &self,
        out: &mut dyn Write,
        coordinate: Option<(u32, u32)>,
        result: &InspectionResult,
    ) -> io::Result<()> {
        self.section(out, settings::SECTION_PIXEL)?;
        if let Some((x, y)) = coordinate {
            self.field(out, "coordinates", &format!("(x={x}, y={y})"))?;
        }
        self.field(out, "rgb", &result.rgb.to_string())?;
        self.field(out, "hex", &result.hex)?;

        self.section(out, settings::SECTION_MATCH)?;
        self.entry_fields(out, &result.matched)?;
        self.field(out, "distance", &format_distance(result.distance))?;

        self.section(out, settings::SECTION_PREVIEW)?;
        writeln!(
            out,
            "{}{}{}{}",
            settings::INDENT_1,
            self.swatch(result.rgb, settings::SWATCH_LABEL_DETECTED),
            settings::SWATCH_GAP,
            self.swatch(result.matched.rgb(), settings::SWATCH_LABEL_MATCH),
        )
    }

    fn catalog(&self, out: &mut dyn Write, catalog: &ColorCatalog) -> io::Result<()> {
        let name_width = catalog
            .iter()
            .map(|e| e.name().chars().count())
            .max()
            .unwrap_or(0);
        for entry in catalog {
            writeln!(
                out,
                "{}{}  {:<name_width$}  {}  {}",
                settings::INDENT_1,
                self.swatch(entry.rgb(), ""),
                entry.name(),
                entry.hex(),
                entry.rgb(),
            )?;
        }
        self.section(out, &format!("{} colors", catalog.len()))
    }

    fn notice(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        self.section(out, message)
    }
}

/// Squared distance alongside its Euclidean value for readability.
fn format_distance(distance_sq: u32) -> String {
    format!("{:.1} (squared {distance_sq})", f64::from(distance_sq).sqrt())
}

/// Pick a legible label color for a swatch background.
fn swatch_text_color(bg: Rgb) -> Color {
    let luma = (299 * u32::from(bg.r) + 587 * u32::from(bg.g) + 114 * u32::from(bg.b)) / 1000;
    if luma > settings::SWATCH_LIGHT_LUMA {
        settings::COLOR_SWATCH_TEXT_DARK
    } else {
        settings::COLOR_SWATCH_TEXT_LIGHT
    }
}

// ---------------------------------------------------------------------------
// JSON renderer
// ---------------------------------------------------------------------------

/// Machine-readable output, one JSON document per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct Coordinate {
    x: u32,
    y: u32,
}

#[derive(Serialize)]
struct InspectionDocument<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinate: Option<Coordinate>,
    #[serde(flatten)]
    result: &'a InspectionResult,
}

#[derive(Serialize)]
struct CatalogDocument<'a> {
    count: usize,
    entries: &'a [ColorEntry],
}

#[derive(Serialize)]
struct NoticeDocument<'a> {
    message: &'a str,
}

impl JsonRenderer {
    fn write<T: Serialize>(out: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, value)?;
        writeln!(out)
    }
}

impl RenderSink for JsonRenderer {
    fn inspection(
        &self,
        out: &mut dyn Write,
        coordinate: Option<(u32, u32)>,
        result: &InspectionResult,
    ) -> io::Result<()> {
        let document = InspectionDocument {
            coordinate: coordinate.map(|(x, y)| Coordinate { x, y }),
            result,
        };
        Self::write(out, &document)
    }

    fn catalog(&self, out: &mut dyn Write, catalog: &ColorCatalog) -> io::Result<()> {
        let document = CatalogDocument {
            count: catalog.len(),
            entries: catalog.entries(),
        };
        Self::write(out, &document)
    }

    fn notice(&self, out: &mut dyn Write, message: &str) -> io::Result<()> {
        Self::write(out, &NoticeDocument { message })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::{inspect, PixelQuery};
    use crate::testsupport::catalog_of;

    fn red_black() -> ColorCatalog {
        catalog_of(&[("Red", 255, 0, 0), ("Black", 0, 0, 0)])
    }

    fn render_text(sink: &dyn RenderSink, coordinate: Option<(u32, u32)>) -> String {
        let result = inspect(PixelQuery::new(200, 10, 10), &red_black()).unwrap();
        let mut buf = Vec::new();
        sink.inspection(&mut buf, coordinate, &result).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_report_lists_pixel_and_match() {
        let text = render_text(&Renderer::new(false, 12), Some((3, 4)));
        assert!(text.contains("Detected pixel:"), "got: {text}");
        assert!(text.contains("  coordinates: (x=3, y=4)"), "got: {text}");
        assert!(text.contains("  rgb: R=200, G=10, B=10"), "got: {text}");
        assert!(text.contains("  hex: #C80A0A"), "got: {text}");
        assert!(text.contains("  name: Red"), "got: {text}");
        assert!(text.contains("  hex: #FF0000"), "got: {text}");
        assert!(text.contains("[Detected #C80A0A]  [Closest match #FF0000]"), "got: {text}");
    }

    #[test]
    fn plain_report_omits_coordinates_for_direct_lookups() {
        let text = render_text(&Renderer::new(false, 12), None);
        assert!(!text.contains("coordinates"), "got: {text}");
    }

    #[test]
    fn colored_report_keeps_values_visible() {
        let text = render_text(&Renderer::new(true, 12), None);
        assert!(text.contains("#C80A0A"), "got: {text}");
        assert!(text.contains("Red"), "got: {text}");
        assert!(text.contains(settings::SWATCH_LABEL_DETECTED), "got: {text}");
        assert!(text.contains(settings::SWATCH_LABEL_MATCH), "got: {text}");
    }

    #[test]
    fn swatch_widens_to_fit_label() {
        let renderer = Renderer::new(true, 4);
        let swatch = renderer.swatch(Rgb::new(255, 0, 0), "Closest match");
        assert!(swatch.contains("Closest match "), "got: {swatch:?}");
        let short = renderer.swatch(Rgb::new(255, 0, 0), "");
        assert!(short.contains("    "), "got: {short:?}");
    }

    #[test]
    fn distance_shows_euclidean_and_squared() {
        assert_eq!(format_distance(3325), "57.7 (squared 3325)");
        assert_eq!(format_distance(0), "0.0 (squared 0)");
    }

    #[test]
    fn swatch_label_contrasts_with_background() {
        assert_eq!(swatch_text_color(Rgb::new(255, 255, 255)), Color::Black);
        assert_eq!(swatch_text_color(Rgb::new(0, 0, 128)), Color::White);
    }

    #[test]
    fn json_report_flattens_result_and_coordinate() {
        let text = render_text(&JsonRenderer, Some((7, 9)));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["coordinate"]["x"], 7);
        assert_eq!(value["coordinate"]["y"], 9);
        assert_eq!(value["hex"], "#C80A0A");
        assert_eq!(value["matched"]["name"], "Red");
    }

    #[test]
    fn json_catalog_includes_count() {
        let mut buf = Vec::new();
        JsonRenderer.catalog(&mut buf, &red_black()).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["entries"][1]["name"], "Black");
        assert_eq!(value["entries"][1]["r"], 0);
    }

    #[test]
    fn plain_catalog_listing_aligns_names() {
        let mut buf = Vec::new();
        Renderer::new(false, 4).catalog(&mut buf, &red_black()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Red    #FF0000"), "got: {text}");
        assert!(text.contains("Black  #000000"), "got: {text}");
        assert!(text.ends_with("2 colors:\n"), "got: {text}");
    }
}
