//! Startup wiring: logging, CLI overrides, and renderer selection.

use hueprobe::config::{no_color_requested, Config};
use hueprobe::ui::{JsonRenderer, RenderSink, Renderer};
use tracing_subscriber::EnvFilter;

use crate::cli::Args;

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `-v` selects debug and `-vv` trace
/// for this crate, with everything else at `warn`.
pub(crate) fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,hueprobe=debug",
        _ => "warn,hueprobe=trace",
    }
}

/// Apply command-line flags on top of file/env configuration.
pub(crate) fn apply_cli_overrides(mut config: Config, args: &Args) -> Config {
    if let Some(path) = &args.catalog {
        config.catalog.path = Some(path.clone());
    }
    if args.no_color {
        config.display.color = false;
    }
    if args.json {
        config.display.json = true;
    }
    config
}

/// Renderer for errors raised before config has loaded.
///
/// Honors `--no-color` and `HUEPROBE_NO_COLOR`.
pub(crate) fn early_error_renderer<FEnv>(args: &Args, env_lookup: &FEnv) -> Renderer
where
    FEnv: Fn(&str) -> Option<String>,
{
    let color = !args.no_color && !no_color_requested(env_lookup);
    Renderer::new(color, 1)
}

/// Pick the output sink for the resolved display settings.
pub(crate) fn select_sink(config: &Config) -> Box<dyn RenderSink> {
    if config.display.json {
        Box::new(JsonRenderer)
    } else {
        Box::new(Renderer::new(
            config.display.color,
            config.display.swatch_width,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn verbosity_maps_to_filters() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "warn,hueprobe=debug");
        assert_eq!(default_filter(5), "warn,hueprobe=trace");
    }

    #[test]
    fn cli_flags_override_config() {
        let args = Args::parse_from([
            "hueprobe",
            "--catalog",
            "flag.csv",
            "--no-color",
            "--json",
            "catalog",
        ]);
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("file.csv"));
        let config = apply_cli_overrides(config, &args);
        assert_eq!(config.catalog.path, Some(PathBuf::from("flag.csv")));
        assert!(!config.display.color);
        assert!(config.display.json);
    }

    #[test]
    fn early_errors_respect_no_color_env() {
        let args = Args::parse_from(["hueprobe", "catalog"]);
        let set = |name: &str| (name == "HUEPROBE_NO_COLOR").then(|| "1".to_string());
        let unset = |_: &str| None::<String>;
        assert!(!early_error_renderer(&args, &set).color());
        assert!(early_error_renderer(&args, &unset).color());

        let args = Args::parse_from(["hueprobe", "--no-color", "catalog"]);
        assert!(!early_error_renderer(&args, &unset).color());
    }

    #[test]
    fn absent_flags_keep_config_values() {
        let args = Args::parse_from(["hueprobe", "catalog"]);
        let mut config = Config::default();
        config.catalog.path = Some(PathBuf::from("file.csv"));
        let config = apply_cli_overrides(config, &args);
        assert_eq!(config.catalog.path, Some(PathBuf::from("file.csv")));
        assert!(config.display.color);
        assert!(!config.display.json);
    }
}
