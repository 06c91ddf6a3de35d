//! genre-reel - Genre-organized video catalog plugin
//!
//! # Usage
//!
//! ```bash
//! # Root genre list
//! genre-reel plugin://plugin.video.genre-reel/ 1 ""
//!
//! # Play a stream
//! genre-reel plugin://plugin.video.genre-reel/ 1 "?action=play&video=https%3A%2F%2Fcdn%2Fa.mp4"
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use genre_reel::catalog::{Catalog, ImageDirs};
use genre_reel::cli::{self, Cli, ExitCode, Output};
use genre_reel::config::Config;
use genre_reel::host::RecordingHost;
use genre_reel::router::Router;
use genre_reel::url::PluginUrl;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(&cli);

    run(cli).into()
}

/// Logs go to stderr; stdout belongs to the host output
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("genre_reel={}", cli.log_filter())));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Serve one invocation and return exit code
fn run(cli: Cli) -> ExitCode {
    let output = Output::new(&cli);

    let router = match build_router(&cli) {
        Ok(router) => router,
        Err(e) => return output.error(format!("{:#}", e), ExitCode::InvalidArgs),
    };

    let mut host = RecordingHost::new();
    match router.route(&mut host, cli.handle, cli.query()) {
        Ok(route) => {
            tracing::debug!(?route, "Request served");
            output.info(format!("{} entries", cli::entry_count(host.events())));
            if let Err(e) = output.print_host(&host) {
                return output.error(format!("Failed to serialize: {}", e), ExitCode::Error);
            }
            ExitCode::Success
        }
        Err(e) => {
            tracing::error!(error = %e, paramstring = cli.query(), "Request failed");
            output.error(e.to_string(), ExitCode::from(&e))
        }
    }
}

/// Assemble config, catalog and router. CLI flags win over the config file.
fn build_router(cli: &Cli) -> Result<Router> {
    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let addon_path = cli.addon_path.clone().unwrap_or_else(|| config.addon_path());
    let images = ImageDirs::new(&addon_path);

    let catalog = match cli.catalog.as_ref().or(config.catalog_file.as_ref()) {
        Some(path) => Catalog::load(path, &images)
            .with_context(|| format!("Failed to load catalog {}", path.display()))?,
        None => Catalog::builtin(&images).context("Built-in catalog is invalid")?,
    };
    tracing::info!(genres = catalog.len(), addon = %addon_path.display(), "Catalog ready");

    Ok(Router::new(catalog, PluginUrl::new(cli.base_url.clone()))
        .with_category(config.category_label()))
}
