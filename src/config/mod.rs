//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables (`HUEPROBE_CATALOG`, `HUEPROBE_NO_COLOR`)
//! 3. TOML file specified via `--config`
//! 4. `./hueprobe.toml` in the current directory
//! 5. `$XDG_CONFIG_HOME/hueprobe/hueprobe.toml` (or `~/.config/hueprobe/hueprobe.toml`)
//! 6. Built-in defaults

use std::path::{Path, PathBuf};

use crate::catalog::CatalogSource;

mod defaults;
mod env;
mod loader;
mod sources;
mod types;

use defaults::LOCAL_CATALOG_FILE;
pub use env::no_color_requested;
pub use loader::load_config;
pub use sources::config_root_dir;
pub use types::{CatalogConfig, Config, ConfigSource, DisplayConfig, LoadedConfig};

impl Config {
    /// Decide where the catalog comes from.
    ///
    /// A configured path is used as-is (and must load). Otherwise a
    /// `colors.csv` in the working directory wins over the built-in table.
    pub fn catalog_source(&self) -> CatalogSource {
        self.catalog_source_with(|path| path.is_file())
    }

    pub(crate) fn catalog_source_with<F>(&self, exists: F) -> CatalogSource
    where
        F: Fn(&Path) -> bool,
    {
        if let Some(path) = &self.catalog.path {
            return CatalogSource::File(path.clone());
        }
        let local = PathBuf::from(LOCAL_CATALOG_FILE);
        if exists(&local) {
            CatalogSource::File(local)
        } else {
            CatalogSource::Builtin
        }
    }
}
