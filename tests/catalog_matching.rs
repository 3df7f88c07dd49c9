//! End-to-end matching through the public library API.
//!
//! Each test writes a catalog CSV to a temp file, loads it the same way the
//! binary does, and inspects pixels sampled from a real image buffer.

use hueprobe::catalog::{CatalogSource, ColorCatalog};
use hueprobe::color::Rgb;
use hueprobe::error::{EmptyCatalogError, LoadError};
use hueprobe::inspect::{inspect, PixelQuery};
use hueprobe::pixels::{sample_at, sample_gradient};
use std::fs;
use std::path::PathBuf;

struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    fn new(name: &str, content: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "hueprobe-it-{name}-{}.csv",
            std::process::id()
        ));
        fs::write(&path, content).expect("write catalog fixture");
        Self { path }
    }

    fn load(&self) -> Result<ColorCatalog, LoadError> {
        ColorCatalog::load(&CatalogSource::File(self.path.clone()))
    }
}

impl Drop for CatalogFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

#[test]
fn red_black_scenario() {
    let file = CatalogFile::new(
        "red-black",
        "name,hex,R,G,B\nRed,#FF0000,255,0,0\nBlack,#000000,0,0,0\n",
    );
    let catalog = file.load().expect("load");
    let result = inspect(PixelQuery::new(200, 10, 10), &catalog).expect("inspect");
    assert_eq!(result.hex, "#C80A0A");
    assert_eq!(result.matched.name(), "Red");
    assert_eq!(result.rgb, Rgb::new(200, 10, 10));
}

#[test]
fn single_gray_scenario() {
    let file = CatalogFile::new("gray", "name,hex,R,G,B\nGray,#808080,128,128,128\n");
    let catalog = file.load().expect("load");
    let result = inspect(PixelQuery::new(0, 0, 0), &catalog).expect("inspect");
    assert_eq!(result.matched.name(), "Gray");
    assert_eq!(result.hex, "#000000");
}

#[test]
fn empty_catalog_scenario() {
    let file = CatalogFile::new("empty", "name,hex,R,G,B\n");
    let catalog = file.load().expect("load");
    assert_eq!(catalog.nearest(1, 1, 1), Err(EmptyCatalogError));
    assert_eq!(
        inspect(PixelQuery::new(1, 1, 1), &catalog),
        Err(EmptyCatalogError)
    );
}

#[test]
fn malformed_row_rejects_whole_load() {
    let file = CatalogFile::new(
        "malformed",
        "name,hex,R,G,B\nRed,#FF0000,255,0,0\nOops,#000000,abc,0,0\n",
    );
    match file.load() {
        Err(LoadError::Row { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected row error, got {other:?}"),
    }
}

#[test]
fn every_entry_matches_itself_in_builtin_catalog() {
    let catalog = ColorCatalog::builtin().expect("builtin");
    for entry in &catalog {
        let rgb = entry.rgb();
        let found = catalog.nearest(rgb.r, rgb.g, rgb.b).expect("non-empty");
        assert_eq!(found.rgb().distance_sq(rgb), 0);
    }
}

#[test]
fn gradient_pixels_resolve_against_builtin_catalog() {
    let catalog = ColorCatalog::builtin().expect("builtin");
    let image = sample_gradient();
    let (x, y, query) = sample_at(&image, 399, 0).expect("sample");
    assert_eq!((x, y), (399, 0));
    let result = inspect(query, &catalog).expect("inspect");
    assert_eq!(result.hex, "#FF008C");
    assert_eq!(Rgb::from_hex(&result.hex), Ok(query.rgb()));
    let again = inspect(query, &catalog).expect("inspect");
    assert_eq!(result, again);
}
