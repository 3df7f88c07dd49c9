//! Image-side collaborator: decode an image and sample one pixel.
//!
//! Decoding is delegated to the `image` crate. Everything here works on
//! RGB8 buffers; alpha is dropped on load.

use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::color::Rgb;
use crate::error::ImageError;
use crate::inspect::PixelQuery;

/// Width of the generated sample image.
pub const SAMPLE_WIDTH: u32 = 400;
/// Height of the generated sample image.
pub const SAMPLE_HEIGHT: u32 = 300;
/// Constant blue channel of the generated sample image.
const SAMPLE_BLUE: u8 = 140;

/// Anything that can report its size and the color of a pixel.
pub trait PixelSource {
    /// `(width, height)` in pixels.
    fn dimensions(&self) -> (u32, u32);
    /// Color at `(x, y)`. Callers keep coordinates in bounds.
    fn pixel(&self, x: u32, y: u32) -> Rgb;
}

impl PixelSource for RgbImage {
    fn dimensions(&self) -> (u32, u32) {
        RgbImage::dimensions(self)
    }

    fn pixel(&self, x: u32, y: u32) -> Rgb {
        Rgb::from(*self.get_pixel(x, y))
    }
}

/// Decode an image file and convert it to RGB8.
pub fn open_image(path: &Path) -> Result<RgbImage, ImageError> {
    let image = image::open(path)?.into_rgb8();
    debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "decoded image"
    );
    Ok(image)
}

/// Clamp a possibly out-of-range coordinate into the source's bounds.
pub fn clamp_coordinate<S: PixelSource + ?Sized>(
    source: &S,
    x: i64,
    y: i64,
) -> Result<(u32, u32), ImageError> {
    let (width, height) = source.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Empty);
    }
    let clamp = |v: i64, len: u32| v.clamp(0, i64::from(len) - 1) as u32;
    Ok((clamp(x, width), clamp(y, height)))
}

/// Sample the pixel nearest to `(x, y)`, returning the clamped coordinate too.
pub fn sample_at<S: PixelSource + ?Sized>(
    source: &S,
    x: i64,
    y: i64,
) -> Result<(u32, u32, PixelQuery), ImageError> {
    let (cx, cy) = clamp_coordinate(source, x, y)?;
    if (i64::from(cx), i64::from(cy)) != (x, y) {
        debug!(x, y, clamped_x = cx, clamped_y = cy, "clamped coordinate");
    }
    Ok((cx, cy, PixelQuery::from(source.pixel(cx, cy))))
}

/// Horizontal red ramp, vertical green ramp, constant blue.
pub fn sample_gradient() -> RgbImage {
    RgbImage::from_fn(SAMPLE_WIDTH, SAMPLE_HEIGHT, |x, y| {
        let ramp = |v: u32, len: u32| (255 * v / (len - 1)) as u8;
        image::Rgb([ramp(x, SAMPLE_WIDTH), ramp(y, SAMPLE_HEIGHT), SAMPLE_BLUE])
    })
}

/// Write an image; the format follows the file extension.
pub fn save_image(image: &RgbImage, path: &Path) -> Result<(), ImageError> {
    image.save(path)?;
    debug!(path = %path.display(), "wrote image");
    Ok(())
}
