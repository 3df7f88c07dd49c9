//! Command dispatch for the `hueprobe` binary.

use std::io::Write;
use std::path::{Path, PathBuf};

use hueprobe::catalog::{CatalogSource, ColorCatalog};
use hueprobe::error::AppError;
use hueprobe::inspect::{inspect, PixelQuery};
use hueprobe::pixels::{open_image, sample_at, sample_gradient, save_image};
use hueprobe::ui::RenderSink;
use image::RgbImage;
use tracing::info;

use crate::cli::Command;

/// Image argument value that selects the generated gradient.
const SAMPLE_IMAGE_ARG: &str = "sample";

/// Where `inspect` reads its pixels from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ImageSource {
    File(PathBuf),
    Sample,
}

impl ImageSource {
    pub(crate) fn from_arg(arg: &str) -> Self {
        if arg == SAMPLE_IMAGE_ARG {
            Self::Sample
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    fn open(&self) -> Result<RgbImage, AppError> {
        match self {
            Self::File(path) => Ok(open_image(path)?),
            Self::Sample => Ok(sample_gradient()),
        }
    }
}

/// Load the catalog, logging where it came from.
pub(crate) fn load_catalog(source: &CatalogSource) -> Result<ColorCatalog, AppError> {
    let catalog = ColorCatalog::load(source)?;
    info!(?source, entries = catalog.len(), "catalog ready");
    Ok(catalog)
}

/// Run one command, writing its report to `out`.
///
/// The catalog is only read by commands that match colors.
pub(crate) fn run(
    command: &Command,
    catalog: &CatalogSource,
    sink: &dyn RenderSink,
    out: &mut dyn Write,
) -> Result<(), AppError> {
    match command {
        Command::Inspect { image, x, y } => {
            let catalog = load_catalog(catalog)?;
            let image = ImageSource::from_arg(image).open()?;
            let (cx, cy, query) = sample_at(&image, *x, *y)?;
            let result = inspect(query, &catalog)?;
            sink.inspection(out, Some((cx, cy)), &result)?;
        }
        Command::Lookup { color } => {
            let catalog = load_catalog(catalog)?;
            let result = inspect(PixelQuery::from(*color), &catalog)?;
            sink.inspection(out, None, &result)?;
        }
        Command::Catalog => {
            let catalog = load_catalog(catalog)?;
            sink.catalog(out, &catalog)?;
        }
        Command::Sample { out: path } => {
            write_sample(path)?;
            sink.notice(out, &format!("wrote sample image to {}", path.display()))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn write_sample(path: &Path) -> Result<(), AppError> {
    save_image(&sample_gradient(), path)?;
    Ok(())
}
