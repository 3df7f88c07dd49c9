//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

use super::defaults::MAX_SWATCH_WIDTH;
use super::env::apply_runtime_env_overrides;
use super::sources::{config_root_dir, read_config_text_with_sources};
use super::{Config, ConfigSource, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&Path>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;

    // File-relative catalog paths; env overrides below stay cwd-relative.
    if let (Some(catalog), Some(file)) = (config.catalog.path.as_mut(), source.path()) {
        if catalog.is_relative() {
            if let Some(dir) = file.parent().filter(|d| !d.as_os_str().is_empty()) {
                *catalog = dir.join(&*catalog);
            }
        }
    }

    apply_runtime_env_overrides(&mut config, &env_lookup);
    validate(&config)?;
    debug!(?source, "loaded configuration");

    Ok(LoadedConfig { config, source })
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let width = config.display.swatch_width;
    if width == 0 || width > MAX_SWATCH_WIDTH {
        return Err(ConfigError::Invalid(format!(
            "display.swatch_width must be between 1 and {MAX_SWATCH_WIDTH}, got {width}"
        )));
    }
    if config
        .catalog
        .path
        .as_ref()
        .is_some_and(|p| p.as_os_str().is_empty())
    {
        return Err(ConfigError::Invalid("catalog.path must not be empty".to_string()));
    }
    Ok(())
}
