//! Navigation menu compilation and rendering.
//!
//! The menu is compiled once during `init` for the override directory `init`
//! was given, and that compiled form serves every later [`render`] call for
//! the same directory. Menu output only varies through its data (which page
//! is active), so re-reading the template per call buys nothing. A request
//! for a different override directory compiles a fresh menu, on partials
//! resolved for that directory, for that call.

use tera::Tera;
use tracing::debug;

use crate::constants::MENU_TEMPLATE;
use crate::core::EngineError;
use crate::utils::fs::FileStore;

use super::compiled::CompiledTemplate;
use super::context::{ContextMap, menu_context};
use super::locator::TemplateLocator;

/// Resolves, reads and compiles the menu template on top of `partials`.
pub async fn compile<F: FileStore>(
    partials: &Tera,
    store: &F,
    locator: &TemplateLocator,
    override_dir: Option<&str>,
) -> Result<CompiledTemplate, EngineError> {
    let path = locator.resolve(store, override_dir, MENU_TEMPLATE);
    let source = store.read(&path).await.map_err(|source| EngineError::MenuLoad {
        path: path.clone(),
        source,
    })?;
    debug!("Compiling menu template from {}", path.display());
    CompiledTemplate::compile(partials, MENU_TEMPLATE, &source)
}

/// Renders `menu` with a copy of `data` carrying `menu = "normal"`.
pub fn render(menu: &CompiledTemplate, data: &ContextMap) -> Result<String, EngineError> {
    menu.render(&menu_context(data))
}
