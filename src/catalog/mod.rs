//! Reference color catalog and nearest-color lookup.
//!
//! A catalog is an ordered, immutable list of named colors loaded once from
//! a tabular source. It is constructed explicitly and passed by reference;
//! nothing here is global. Lookup is a linear scan, which is plenty for
//! tables of a few hundred rows.
//!
//! Loading is strict: the first malformed row aborts the whole load with a
//! [`LoadError`] that names its line.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, trace};

use crate::color::Rgb;
use crate::error::{EmptyCatalogError, LoadError};

mod table;

/// Embedded default dataset (CSS/X11 named colors).
const BUILTIN_CATALOG_CSV: &str = include_str!("../../data/colors.csv");

/// One named reference color.
///
/// `hex` is always the canonical uppercase encoding of the RGB triple.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorEntry {
    name: String,
    hex: String,
    r: u8,
    g: u8,
    b: u8,
}

impl ColorEntry {
    /// Build an entry, deriving the canonical hex from `rgb`.
    pub fn new(name: impl Into<String>, rgb: Rgb) -> Self {
        Self {
            name: name.into(),
            hex: rgb.to_hex(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }
}

/// Where a catalog is loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A CSV file on disk.
    File(PathBuf),
    /// The table compiled into the binary.
    Builtin,
}

/// Ordered set of reference colors. Duplicates are retained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorCatalog {
    entries: Vec<ColorEntry>,
}

impl ColorCatalog {
    pub fn from_entries(entries: Vec<ColorEntry>) -> Self {
        Self { entries }
    }

    /// Load from whichever source was resolved.
    pub fn load(source: &CatalogSource) -> Result<Self, LoadError> {
        match source {
            CatalogSource::File(path) => Self::load_path(path),
            CatalogSource::Builtin => Self::builtin(),
        }
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self, LoadError> {
        Self::from_csv_str(BUILTIN_CATALOG_CSV)
    }

    /// Load a catalog from a CSV file on disk.
    pub fn load_path(path: &Path) -> Result<Self, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_csv_str(&text)?;
        debug!(
            path = %path.display(),
            entries = catalog.len(),
            "loaded color catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from CSV text with a header row.
    pub fn from_csv_str(text: &str) -> Result<Self, LoadError> {
        let mut records = table::records(text)?.into_iter();
        let (_, header) = records
            .next()
            .ok_or_else(|| LoadError::Header("source has no header row".to_string()))?;
        let columns = table::Columns::from_header(&header)?;

        let entries = records
            .map(|(line, fields)| columns.entry(line, &fields))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.entries.iter()
    }

    /// Entry minimizing squared RGB distance to `(r, g, b)`.
    ///
    /// Ties resolve to the earliest entry in catalog order.
    pub fn nearest(&self, r: u8, g: u8, b: u8) -> Result<&ColorEntry, EmptyCatalogError> {
        self.nearest_with_distance(Rgb::new(r, g, b))
            .map(|(entry, _)| entry)
    }

    /// Like [`ColorCatalog::nearest`], also returning the squared distance.
    pub fn nearest_with_distance(
        &self,
        target: Rgb,
    ) -> Result<(&ColorEntry, u32), EmptyCatalogError> {
        let mut best: Option<(&ColorEntry, u32)> = None;
        for entry in &self.entries {
            let d = target.distance_sq(entry.rgb());
            // Strict `<` keeps the first entry on ties.
            let closer = match best {
                None => true,
                Some((_, best_d)) => d < best_d,
            };
            if closer {
                best = Some((entry, d));
                if d == 0 {
                    break;
                }
            }
        }
        let (entry, d) = best.ok_or(EmptyCatalogError)?;
        trace!(query = %target.to_hex(), matched = entry.name(), distance = d, "nearest color");
        Ok((entry, d))
    }
}

impl<'a> IntoIterator for &'a ColorCatalog {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
