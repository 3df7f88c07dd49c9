//! Unified error types for catalog loading, lookup, and the CLI front-end.

use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// ColorParseError
// ---------------------------------------------------------------------------

/// Errors when parsing a color literal (`#RRGGBB`, `RRGGBB`, or `r,g,b`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    Empty,
    /// Hex literal does not have exactly six digits.
    InvalidLength(usize),
    /// Hex literal contains a non-hex character.
    InvalidHex(String),
    /// A decimal channel is not an integer in `0..=255`.
    InvalidChannel(String),
    /// `r,g,b` literal does not have exactly three components.
    ChannelCount(usize),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty color value"),
            Self::InvalidLength(len) => {
                write!(f, "hex color must have 6 digits, found {len}")
            }
            Self::InvalidHex(text) => write!(f, "invalid hex digits in `{text}`"),
            Self::InvalidChannel(text) => {
                write!(f, "channel `{text}` is not an integer in 0..=255")
            }
            Self::ChannelCount(count) => {
                write!(f, "expected 3 comma-separated channels, found {count}")
            }
        }
    }
}

impl std::error::Error for ColorParseError {}

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Errors when loading a color catalog from its tabular source.
#[derive(Debug)]
pub enum LoadError {
    /// The source file is missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The header row is missing or lacks required columns.
    Header(String),
    /// A data row could not be parsed. `line` is 1-based.
    Row { line: usize, message: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read catalog `{}`: {source}", path.display())
            }
            Self::Header(msg) => write!(f, "invalid catalog header: {msg}"),
            Self::Row { line, message } => write!(f, "invalid catalog row at line {line}: {message}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Header(_) | Self::Row { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// EmptyCatalogError
// ---------------------------------------------------------------------------

/// A nearest-color lookup was attempted on a catalog with zero entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyCatalogError;

impl fmt::Display for EmptyCatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color catalog is empty")
    }
}

impl std::error::Error for EmptyCatalogError {}

// ---------------------------------------------------------------------------
// ImageError
// ---------------------------------------------------------------------------

/// Errors from the image-decoding collaborator.
#[derive(Debug)]
pub enum ImageError {
    /// Decoding or encoding failed inside the `image` crate.
    Codec(image::ImageError),
    /// The image has zero width or height, so no pixel can be sampled.
    Empty,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(e) => write!(f, "image: {e}"),
            Self::Empty => write!(f, "image has no pixels"),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Codec(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<image::ImageError> for ImageError {
    fn from(e: image::ImageError) -> Self {
        Self::Codec(e)
    }
}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// AppError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for the command-line front-end.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Load(LoadError),
    EmptyCatalog(EmptyCatalogError),
    Image(ImageError),
    Color(ColorParseError),
    /// Writing rendered output failed.
    Output(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Load(e) => write!(f, "catalog: {e}"),
            Self::EmptyCatalog(e) => write!(f, "lookup: {e}"),
            Self::Image(e) => write!(f, "{e}"),
            Self::Color(e) => write!(f, "color: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<LoadError> for AppError {
    fn from(e: LoadError) -> Self {
        Self::Load(e)
    }
}

impl From<EmptyCatalogError> for AppError {
    fn from(e: EmptyCatalogError) -> Self {
        Self::EmptyCatalog(e)
    }
}

impl From<ImageError> for AppError {
    fn from(e: ImageError) -> Self {
        Self::Image(e)
    }
}

impl From<ColorParseError> for AppError {
    fn from(e: ColorParseError) -> Self {
        Self::Color(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Output(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_row_reports_line() {
        let e = LoadError::Row {
            line: 7,
            message: "bad r".into(),
        };
        assert_eq!(e.to_string(), "invalid catalog row at line 7: bad r");
    }

    #[test]
    fn load_error_io_includes_path() {
        let e = LoadError::Io {
            path: PathBuf::from("missing.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        };
        let s = e.to_string();
        assert!(s.contains("missing.csv"), "got: {s}");
        assert!(s.contains("file not found"), "got: {s}");
        assert!(std::error::Error::source(&e).is_some());
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn app_error_wraps_empty_catalog() {
        let e = AppError::from(EmptyCatalogError);
        assert_eq!(e.to_string(), "lookup: color catalog is empty");
    }

    #[test]
    fn color_parse_error_messages() {
        assert_eq!(
            ColorParseError::InvalidLength(4).to_string(),
            "hex color must have 6 digits, found 4"
        );
        assert_eq!(
            ColorParseError::ChannelCount(2).to_string(),
            "expected 3 comma-separated channels, found 2"
        );
    }
}
