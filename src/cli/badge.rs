//! Generate a coverage badge.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::common::{CommandContext, read_json_object};

/// Write `{output}/images/coverage-badge-{label}.svg`.
#[derive(Args)]
pub struct BadgeCommand {
    /// Coverage label, e.g. `statements` or `branches`.
    #[arg(long)]
    label: String,

    /// JSON object with coverage figures (`percent`, `status`, ...).
    #[arg(long)]
    data: PathBuf,

    /// Output directory. Defaults to the configured output directory.
    #[arg(short, long)]
    output: Option<String>,
}

impl BadgeCommand {
    pub async fn execute(self, context: &CommandContext) -> Result<()> {
        let mut coverage = read_json_object(&self.data).await?;
        let output = self.output.as_deref().unwrap_or_else(|| context.site.output_dir());

        let engine = context.engine();
        let path = engine.generate_badge(output, &self.label, &mut coverage).await?;

        println!("{}", path.display());
        Ok(())
    }
}
