//! CLI entry point for hueprobe.

mod app;
mod cli;

use clap::Parser;
use hueprobe::config::load_config;
use hueprobe::ui::Renderer;

fn main() {
    let args = cli::Args::parse();
    app::startup::init_tracing(args.verbose);

    let loaded = match load_config(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            app::startup::early_error_renderer(&args, &|name: &str| std::env::var(name).ok())
                .error(&format!("config: {e}"));
            std::process::exit(1);
        }
    };
    let config = app::startup::apply_cli_overrides(loaded.config, &args);
    let renderer = Renderer::new(config.display.color, config.display.swatch_width);
    let sink = app::startup::select_sink(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let catalog = config.catalog_source();
    if let Err(e) = app::commands::run(&args.command, &catalog, sink.as_ref(), &mut out) {
        renderer.error(&e.to_string());
        std::process::exit(1);
    }
}
