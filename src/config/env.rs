//! Environment variable overrides.

use std::path::PathBuf;

use super::Config;

/// Catalog path override.
pub(super) const ENV_CATALOG: &str = "HUEPROBE_CATALOG";
/// Any non-empty value disables ANSI color.
pub(super) const ENV_NO_COLOR: &str = "HUEPROBE_NO_COLOR";

pub(super) fn apply_runtime_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv)
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(path) = non_empty(env_lookup, ENV_CATALOG) {
        config.catalog.path = Some(PathBuf::from(path));
    }
    if no_color_requested(env_lookup) {
        config.display.color = false;
    }
}

/// Whether the environment asks for plain output.
///
/// Usable before any config file has loaded.
pub fn no_color_requested<FEnv>(env_lookup: &FEnv) -> bool
where
    FEnv: Fn(&str) -> Option<String>,
{
    non_empty(env_lookup, ENV_NO_COLOR).is_some()
}

fn non_empty<FEnv>(env_lookup: &FEnv, name: &str) -> Option<String>
where
    FEnv: Fn(&str) -> Option<String>,
{
    env_lookup(name)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
