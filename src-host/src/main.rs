//! Frontend host
//!
//! Renders the microservices frontend pages into static HTML documents,
//! placing the page metadata in each document head.

use anyhow::Result;
use clap::Parser;
use microservices_frontend_host_lib::cli::{self, Cli};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().ok();
    let from_env = env_filter.is_some();
    let initial = env_filter.unwrap_or_else(|| EnvFilter::new(if cli.verbose { "debug" } else { "info" }));
    let (filter, filter_handle) = reload::Layer::new(initial);
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Settings warnings go through the subscriber installed above.
    let settings = cli.settings();
    if settings.debug_logs && !from_env {
        filter_handle.reload(EnvFilter::new("debug"))?;
    }
    debug!(?settings, "loaded settings");

    cli::run(cli.selected_command(), &settings, &mut std::io::stdout()).await
}
