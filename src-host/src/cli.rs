//! Command-line surface of `frontend-host`.

use crate::render::render_page;
use crate::settings::{self, Settings};
use crate::site::build_site;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use microservices_frontend_ui::{styles, Page, METADATA};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "frontend-host")]
#[command(about = "Static host for the microservices frontend")]
#[command(version)]
pub struct Cli {
    /// Settings file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output directory override
    #[arg(long, short, global = true)]
    pub out: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Render every page and write the static site (default)
    Build,
    /// Print one rendered page document to stdout
    Render {
        /// Route token, e.g. `home`; unknown routes render the not-found page
        route: String,
    },
    /// Print the page metadata as JSON
    Metadata,
}

impl Cli {
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Build)
    }

    /// Reads the settings file named by `--config` (or the default one) and applies `--out`.
    pub fn settings(&self) -> Settings {
        let mut settings = match &self.config {
            Some(path) => settings::load_from(path),
            None => settings::load(),
        };
        self.apply_overrides(&mut settings);
        settings
    }

    pub fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(out) = &self.out {
            settings.output_directory = out.to_string_lossy().to_string();
        }
    }
}

/// Runs `command`, writing any command output to `out`.
pub async fn run(command: Command, settings: &Settings, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Build => {
            let report = build_site(settings)
                .await
                .with_context(|| format!("Failed to build site into {}", settings.output_directory))?;
            info!(output = %report.output_directory.display(), "done");
        }
        Command::Render { route } => {
            settings.validate().context("Cannot render with current settings")?;
            let page = Page::from_route(&route);
            writeln!(out, "{}", render_page(page, styles::hrefs(&settings.base_path)).await)?;
        }
        Command::Metadata => {
            writeln!(out, "{}", serde_json::to_string_pretty(&METADATA).context("Failed to serialize metadata")?)?;
        }
    }
    Ok(())
}
