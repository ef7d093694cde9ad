//! Helpers shared by the subcommands.

use anyhow::{Context, Result, bail};
use serde_json::Value;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::templating::{ContextMap, EngineConfig, HtmlEngine};
use crate::utils::fs::LocalFileStore;

/// Resolved environment a subcommand runs in.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub working_dir: PathBuf,
    pub site: SiteConfig,
}

impl CommandContext {
    pub fn new(working_dir: PathBuf, site: SiteConfig) -> Self {
        Self {
            working_dir,
            site,
        }
    }

    /// Override directory from flags or config, if any.
    pub fn template_dir(&self) -> Option<&str> {
        self.site.template_dir.as_deref()
    }

    /// Builds an engine rooted at the working directory. `init` is left to
    /// the caller.
    pub fn engine(&self) -> HtmlEngine<LocalFileStore> {
        let config =
            EngineConfig::new(&self.working_dir).with_bundled_root(self.site.bundled_root());
        HtmlEngine::new(LocalFileStore::new(&self.working_dir), config)
    }
}

/// Reads a JSON file that must contain an object at the top level.
pub async fn read_json_object(path: &Path) -> Result<ContextMap> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read data file {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;

    match value {
        Value::Object(map) => Ok(map),
        _ => bail!("Data file {} must contain a JSON object", path.display()),
    }
}

/// Writes `content` to `out`, or to stdout when `out` is `None`.
pub async fn emit(out: Option<&Path>, content: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(path, content)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))
        }
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
