//! Compiled template handles.
//!
//! Tera compiles templates into a named registry rather than into standalone
//! objects. A [`CompiledTemplate`] pairs a frozen registry, which already holds
//! the partials the template may include, with the name the template was
//! registered under.

use std::sync::Arc;
use tera::{Context as TeraContext, Tera};

use crate::core::EngineError;

use super::filters;

/// Autoescape suffix matching every template name.
///
/// Partials are registered under bare names like `overview`, so the default
/// `.html` suffix rule would leave them unescaped.
const ESCAPE_ALL_SUFFIX: &str = "";

/// Creates the registry every page, menu and partial template lives in.
pub fn base_registry() -> Tera {
    let mut tera = Tera::default();
    tera.autoescape_on(vec![ESCAPE_ALL_SUFFIX]);
    filters::register(&mut tera);
    tera
}

/// A parsed template ready to render any number of contexts.
#[derive(Clone)]
pub struct CompiledTemplate {
    tera: Arc<Tera>,
    name: String,
}

impl CompiledTemplate {
    /// Compiles `source` as `name` on top of a copy of `base`.
    ///
    /// `base` is left untouched, so compiling never leaks a page or menu
    /// template into the shared partial namespace.
    pub fn compile(base: &Tera, name: &str, source: &str) -> Result<Self, EngineError> {
        let mut tera = base.clone();
        tera.add_raw_template(name, source).map_err(|source| EngineError::Compile {
            template: name.to_string(),
            source,
        })?;
        Ok(Self {
            tera: Arc::new(tera),
            name: name.to_string(),
        })
    }

    /// Name the template was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the template against `context`.
    pub fn render(&self, context: &TeraContext) -> Result<String, EngineError> {
        self.tera.render(&self.name, context).map_err(|source| EngineError::Render {
            template: self.name.clone(),
            source,
        })
    }
}

impl std::fmt::Debug for CompiledTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompiledTemplate")
            .field("name", &self.name)
            .field("templates", &self.tera.get_template_names().count())
            .finish()
    }
}
