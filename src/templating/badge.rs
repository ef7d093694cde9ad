//! Coverage badge generation.
//!
//! Badges are rendered from the bundled SVG template only. Override
//! directories are never consulted for it, unlike every other template.

use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

use crate::constants::{BADGE_OUTPUT_DIR, BADGE_TEMPLATE, badge_file_name};
use crate::core::{EngineError, error_chain};
use crate::utils::fs::FileStore;

use super::compiled::{CompiledTemplate, base_registry};
use super::context::{ContextMap, data_context};
use super::locator::TemplateLocator;

/// Strips the working directory from `output_dir` so the badge path is
/// relative. Paths outside the working directory are kept as given.
pub fn normalize_output_dir(output_dir: &str, working_dir: &Path) -> PathBuf {
    let output = Path::new(output_dir);
    match output.strip_prefix(working_dir) {
        Ok(relative) => relative.to_path_buf(),
        Err(_) => output.to_path_buf(),
    }
}

/// Final location of the badge for `label` under `output_dir`.
pub fn badge_path(output_dir: &Path, label: &str) -> PathBuf {
    output_dir.join(BADGE_OUTPUT_DIR).join(badge_file_name(label))
}

/// Renders the badge for `label` and writes it below `output_dir`.
///
/// `coverage.label` is set to `label` before rendering and keeps that value
/// afterwards. Returns the path written.
pub async fn generate<F: FileStore>(
    store: &F,
    locator: &TemplateLocator,
    output_dir: &str,
    label: &str,
    coverage: &mut ContextMap,
) -> Result<PathBuf, EngineError> {
    let template_path = locator.bundled(BADGE_TEMPLATE);
    let source = store.read(&template_path).await.map_err(|source| {
        EngineError::BadgeTemplate {
            path: template_path.clone(),
            source,
        }
    })?;
    let template = CompiledTemplate::compile(&base_registry(), BADGE_TEMPLATE, &source)
        .map_err(|err| match err {
            EngineError::Compile { source, .. } => EngineError::BadgeCompile {
                path: template_path.clone(),
                source,
            },
            other => other,
        })?;

    coverage.insert("label".to_string(), Value::String(label.to_string()));
    let svg = template.render(&data_context(coverage))?;

    let target = badge_path(&normalize_output_dir(output_dir, locator.working_dir()), label);
    if let Err(source) = store.write(&target, &svg).await {
        let err = EngineError::BadgeWrite {
            label: label.to_string(),
            path: target,
            source,
        };
        error!("{}", error_chain(&err));
        return Err(err);
    }

    debug!("Wrote coverage badge {}", target.display());
    Ok(target)
}
