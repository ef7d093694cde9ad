//! Site configuration.
//!
//! Settings are read from a TOML file, either the one passed with `--config`
//! or `docgen.toml` in the working directory when it exists. Command-line
//! flags take precedence over file values.
//!
//! # Format
//!
//! ```toml
//! # Directory whose files replace bundled templates, relative to the working directory
//! template_dir = "my-theme"
//!
//! # Alternative location of the bundled templates
//! bundled_templates = "/opt/docgen/templates"
//!
//! # Where generated assets are written
//! output = "documentation"
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::constants::{DEFAULT_CONFIG_FILE, DEFAULT_OUTPUT_DIR, bundled_templates_dir};

/// Settings loaded from the site configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Override directory for template files.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<String>,

    /// Root of the bundled templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundled_templates: Option<PathBuf>,

    /// Output directory for generated assets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl SiteConfig {
    /// Loads configuration from `path`.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Loads `explicit` if given, else `docgen.toml` under `working_dir` if
    /// present, else defaults.
    ///
    /// An explicitly named file that cannot be read is an error; a missing
    /// default file is not.
    pub async fn load_with_optional(explicit: Option<&Path>, working_dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path).await;
        }

        let default_path = working_dir.join(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            debug!("Loading config from {}", default_path.display());
            Self::load_from(&default_path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Output directory, falling back to `documentation`.
    pub fn output_dir(&self) -> &str {
        self.output.as_deref().unwrap_or(DEFAULT_OUTPUT_DIR)
    }

    /// Bundled template root, falling back to the crate's `templates/`.
    pub fn bundled_root(&self) -> PathBuf {
        self.bundled_templates.clone().unwrap_or_else(bundled_templates_dir)
    }

    /// Applies command-line values over file values.
    #[must_use]
    pub fn merge_cli(
        mut self,
        template_dir: Option<String>,
        bundled_templates: Option<PathBuf>,
        output: Option<String>,
    ) -> Self {
        if template_dir.is_some() {
            self.template_dir = template_dir;
        }
        if bundled_templates.is_some() {
            self.bundled_templates = bundled_templates;
        }
        if output.is_some() {
            self.output = output;
        }
        self
    }
}
