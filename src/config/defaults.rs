//! Default configuration constants.

/// File name searched for in the working directory and the config root.
pub(super) const CONFIG_FILE_NAME: &str = "hueprobe.toml";
/// Subdirectory of the config root holding the global config file.
pub(super) const CONFIG_DIR_NAME: &str = "hueprobe";
/// Catalog file picked up from the working directory when none is configured.
pub(super) const LOCAL_CATALOG_FILE: &str = "colors.csv";
/// Swatch width, in terminal cells.
pub(super) const DEFAULT_SWATCH_WIDTH: u16 = 12;
/// Upper bound accepted for `display.swatch_width`.
pub(super) const MAX_SWATCH_WIDTH: u16 = 80;
