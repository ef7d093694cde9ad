//! Render the navigation menu.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::common::{CommandContext, emit, read_json_object};

/// Render the menu with the given JSON data.
#[derive(Args)]
pub struct MenuCommand {
    /// JSON object passed to the menu template.
    #[arg(long)]
    data: PathBuf,

    /// Output file. Prints to stdout when omitted.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

impl MenuCommand {
    pub async fn execute(self, context: &CommandContext) -> Result<()> {
        let data = read_json_object(&self.data).await?;

        let mut engine = context.engine();
        engine.init(context.template_dir()).await.context("Failed to load templates")?;
        let html = engine
            .render_menu(context.template_dir(), &data)
            .await
            .context("Failed to render menu")?;

        emit(self.out.as_deref(), &html).await
    }
}
