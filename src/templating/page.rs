//! Loading and compiling the main page template.

use tera::Tera;
use tracing::debug;

use crate::constants::PAGE_TEMPLATE;
use crate::core::EngineError;
use crate::utils::fs::FileStore;

use super::compiled::CompiledTemplate;
use super::locator::TemplateLocator;

/// The page template as loaded during `init`: raw source and compiled form.
#[derive(Debug, Clone)]
pub struct PageTemplate {
    source: String,
    compiled: CompiledTemplate,
}

impl PageTemplate {
    /// Resolves, reads and compiles the page template on top of `partials`.
    pub async fn load<F: FileStore>(
        partials: &Tera,
        store: &F,
        locator: &TemplateLocator,
        override_dir: Option<&str>,
    ) -> Result<Self, EngineError> {
        let path = locator.resolve(store, override_dir, PAGE_TEMPLATE);
        let source = store.read(&path).await.map_err(|source| EngineError::PageLoad {
            path: path.clone(),
            source,
        })?;
        let compiled = CompiledTemplate::compile(partials, PAGE_TEMPLATE, &source)?;
        debug!("Compiled page template from {}", path.display());
        Ok(Self {
            source,
            compiled,
        })
    }

    /// Raw template text as read from storage.
    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn compiled(&self) -> &CompiledTemplate {
        &self.compiled
    }
}
