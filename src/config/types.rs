//! Configuration data model.

use serde::Deserialize;
use std::path::PathBuf;

use super::defaults::DEFAULT_SWATCH_WIDTH;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub display: DisplayConfig,
}

/// Where the reference color table comes from.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// CSV file to load. Relative paths in a config file resolve against
    /// that file's directory.
    pub path: Option<PathBuf>,
}

/// Terminal output settings.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// ANSI styling and truecolor swatches.
    pub color: bool,
    pub swatch_width: u16,
    /// Emit machine-readable JSON instead of styled text.
    pub json: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color: true,
            swatch_width: DEFAULT_SWATCH_WIDTH,
            json: false,
        }
    }
}

/// Which config file (if any) the runtime configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit `--config` path.
    Explicit(PathBuf),
    /// `./hueprobe.toml`.
    Local(PathBuf),
    /// `$XDG_CONFIG_HOME/hueprobe/hueprobe.toml` or `~/.config/...`.
    Global(PathBuf),
    /// No file found.
    BuiltInDefaults,
}

impl ConfigSource {
    /// File path backing this source, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Explicit(p) | Self::Local(p) | Self::Global(p) => Some(p),
            Self::BuiltInDefaults => None,
        }
    }
}

/// Configuration payload plus the source it was read from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}
