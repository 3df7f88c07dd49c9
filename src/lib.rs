//! hueprobe — pixel color inspection against a named-color catalog.
//!
//! The library holds the matching core and its collaborators: a color
//! catalog with nearest-color lookup, the pixel inspector, an image-sampling
//! adapter over the `image` crate, configuration loading, and terminal/JSON
//! renderers. The `hueprobe` binary wires them to a command line.
//!
//! # Quick start
//!
//! ```
//! use hueprobe::catalog::ColorCatalog;
//! use hueprobe::inspect::{inspect, PixelQuery};
//!
//! let catalog = ColorCatalog::from_csv_str(
//!     "name,hex,R,G,B\nRed,#FF0000,255,0,0\nBlack,#000000,0,0,0\n",
//! )
//! .unwrap();
//! let result = inspect(PixelQuery::new(200, 10, 10), &catalog).unwrap();
//! assert_eq!(result.hex, "#C80A0A");
//! assert_eq!(result.matched.name(), "Red");
//! ```

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod inspect;
pub mod pixels;
#[cfg(test)]
pub mod testsupport;
pub mod ui;
