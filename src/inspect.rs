//! Pixel inspection: hex formatting plus nearest-catalog match.

use serde::Serialize;

use crate::catalog::{ColorCatalog, ColorEntry};
use crate::color::Rgb;
use crate::error::EmptyCatalogError;

/// RGB triple sampled from one user click. Consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelQuery {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PixelQuery {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn rgb(self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

impl From<Rgb> for PixelQuery {
    fn from(rgb: Rgb) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

/// Outcome of inspecting one pixel, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InspectionResult {
    pub rgb: Rgb,
    /// `#RRGGBB`, uppercase.
    pub hex: String,
    pub matched: ColorEntry,
    /// Squared RGB distance between the pixel and `matched`.
    pub distance: u32,
}

/// Format the query's hex and find its nearest catalog entry.
pub fn inspect(
    query: PixelQuery,
    catalog: &ColorCatalog,
) -> Result<InspectionResult, EmptyCatalogError> {
    let rgb = query.rgb();
    let (matched, distance) = catalog.nearest_with_distance(rgb)?;
    Ok(InspectionResult {
        rgb,
        hex: rgb.to_hex(),
        matched: matched.clone(),
        distance,
    })
}
