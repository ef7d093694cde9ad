//! Render a documentation page.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tracing::info;

use super::common::{CommandContext, emit, read_json_object};

/// Render one page from site-wide and page-specific JSON data.
#[derive(Args)]
pub struct PageCommand {
    /// JSON object with site-wide data.
    #[arg(long)]
    main: PathBuf,

    /// JSON object with page data; its fields override `--main` fields.
    #[arg(long)]
    page: PathBuf,

    /// Output file. Prints to stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl PageCommand {
    pub async fn execute(self, context: &CommandContext) -> Result<()> {
        let mut main = read_json_object(&self.main).await?;
        let page = read_json_object(&self.page).await?;

        let mut engine = context.engine();
        engine.init(context.template_dir()).await.context("Failed to load templates")?;
        let html = engine
            .render(&mut main, &page)
            .with_context(|| format!("Failed to render page from {}", self.page.display()))?;

        emit(self.out.as_deref(), &html).await?;
        if let Some(out) = &self.out {
            info!("Wrote {}", out.display());
        }
        Ok(())
    }
}
