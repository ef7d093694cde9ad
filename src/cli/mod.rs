//! Command-line interface for the documentation renderer.
//!
//! # Commands
//!
//! - `page` - Render one documentation page from JSON data
//! - `menu` - Render the navigation menu from JSON data
//! - `badge` - Write a coverage badge SVG
//!
//! # Global Options
//!
//! - `--config <file>` - Site configuration file (default: `docgen.toml` if present)
//! - `--template-dir <dir>` - Directory of template overrides
//! - `--bundled-templates <dir>` - Alternative bundled template root
//! - `--verbose` - Enable debug output
//! - `--quiet` - Suppress all output except errors
//!
//! # Examples
//!
//! ```bash
//! docgen-html page --main site.json --page overview.json --out documentation/index.html
//! docgen-html --template-dir my-theme menu --data menu.json
//! docgen-html badge --label statements --data coverage.json --output documentation
//! ```

mod badge;
pub mod common;
mod menu;
mod page;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::SiteConfig;

pub use common::CommandContext;

/// Logging configuration derived from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Filter directive passed to the tracing subscriber.
    ///
    /// When `None`, `RUST_LOG` is used if set, otherwise `warn`.
    pub log_level: Option<String>,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = Some(level.into());
        self
    }

    /// Installs the global tracing subscriber.
    ///
    /// Safe to call more than once; later calls are no-ops.
    pub fn init_logging(&self) {
        let filter = match &self.log_level {
            Some(level) => EnvFilter::new(level),
            None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Render documentation pages, menus and coverage badges.
#[derive(Parser)]
#[command(name = "docgen-html", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output for debugging.
    ///
    /// Equivalent to `RUST_LOG=debug`. Mutually exclusive with `--quiet`.
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to the site configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory whose files replace bundled templates, relative to the
    /// working directory.
    #[arg(long, global = true, env = "DOCGEN_TEMPLATE_DIR")]
    template_dir: Option<String>,

    /// Root of the bundled templates.
    #[arg(long, global = true)]
    bundled_templates: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a documentation page.
    Page(page::PageCommand),

    /// Render the navigation menu.
    Menu(menu::MenuCommand),

    /// Generate a coverage badge.
    Badge(badge::BadgeCommand),
}

impl Cli {
    /// Execute the CLI with configuration derived from its flags.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        self.execute_with_config(config).await
    }

    /// Translate verbosity flags into a [`CliConfig`].
    pub fn build_config(&self) -> CliConfig {
        if self.verbose {
            CliConfig::new().with_log_level("debug")
        } else if self.quiet {
            CliConfig::new().with_log_level("error")
        } else {
            CliConfig::new()
        }
    }

    /// Execute the CLI with an explicit configuration.
    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        config.init_logging();

        let working_dir = std::env::current_dir()?;
        let site = SiteConfig::load_with_optional(self.config.as_deref(), &working_dir)
            .await?
            .merge_cli(self.template_dir, self.bundled_templates, None);
        let context = CommandContext::new(working_dir, site);

        match self.command {
            Commands::Page(cmd) => cmd.execute(&context).await,
            Commands::Menu(cmd) => cmd.execute(&context).await,
            Commands::Badge(cmd) => cmd.execute(&context).await,
        }
    }
}
