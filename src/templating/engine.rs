//! The HTML rendering engine.
//!
//! [`HtmlEngine`] ties the template components together. `init` runs three
//! phases in strict order: partial registration, page compilation and menu
//! compilation. Their result is an immutable [`CompiledTemplates`] value that
//! replaces the previous one only once all three phases succeeded.

use std::path::PathBuf;
use std::sync::Arc;
use tera::Tera;
use tracing::{debug, warn};

use crate::constants::bundled_templates_dir;
use crate::core::EngineError;
use crate::utils::fs::{FileStore, LocalFileStore};

use super::badge;
use super::compiled::{CompiledTemplate, base_registry};
use super::context::{ContextMap, data_context, merge_into};
use super::locator::TemplateLocator;
use super::menu;
use super::page::PageTemplate;
use super::partials;

/// Locations the engine resolves templates and output against.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory override directories and badge output are relative to.
    pub working_dir: PathBuf,
    /// Root of the bundled default templates.
    pub bundled_root: PathBuf,
}

impl EngineConfig {
    /// Configuration using `working_dir` and the crate's bundled templates.
    pub fn new(working_dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            bundled_root: bundled_templates_dir(),
        }
    }

    #[must_use]
    pub fn with_bundled_root(mut self, bundled_root: impl Into<PathBuf>) -> Self {
        self.bundled_root = bundled_root.into();
        self
    }
}

/// Everything a successful `init` produced.
#[derive(Debug)]
pub struct CompiledTemplates {
    override_dir: Option<String>,
    partials: Tera,
    page: PageTemplate,
    menu: CompiledTemplate,
}

impl CompiledTemplates {
    /// Override directory `init` resolved templates against.
    pub fn override_dir(&self) -> Option<&str> {
        self.override_dir.as_deref()
    }

    /// Names registered in the partial namespace.
    pub fn partial_names(&self) -> impl Iterator<Item = &str> {
        self.partials.get_template_names()
    }

    pub fn page(&self) -> &PageTemplate {
        &self.page
    }

    pub fn menu(&self) -> &CompiledTemplate {
        &self.menu
    }
}

/// Renders documentation pages, menus and coverage badges.
///
/// # Examples
///
/// ```rust,no_run
/// use docgen_html::templating::{EngineConfig, HtmlEngine};
/// use docgen_html::utils::fs::LocalFileStore;
/// use serde_json::json;
///
/// # async fn example() -> anyhow::Result<()> {
/// let cwd = std::env::current_dir()?;
/// let mut engine = HtmlEngine::new(LocalFileStore::new(&cwd), EngineConfig::new(&cwd));
/// engine.init(Some("my-theme")).await?;
///
/// let mut main = json!({ "documentation_main_name": "Docs" }).as_object().cloned().unwrap();
/// let page = json!({ "context": "overview", "name": "overview" }).as_object().cloned().unwrap();
/// let html = engine.render(&mut main, &page)?;
/// # Ok(())
/// # }
/// ```
pub struct HtmlEngine<F = LocalFileStore> {
    store: F,
    locator: TemplateLocator,
    templates: Option<Arc<CompiledTemplates>>,
}

impl<F: FileStore> HtmlEngine<F> {
    pub fn new(store: F, config: EngineConfig) -> Self {
        Self {
            store,
            locator: TemplateLocator::new(config.working_dir, config.bundled_root),
            templates: None,
        }
    }

    pub fn locator(&self) -> &TemplateLocator {
        &self.locator
    }

    pub fn store(&self) -> &F {
        &self.store
    }

    /// Result of the last successful `init`, if any.
    pub fn templates(&self) -> Option<&Arc<CompiledTemplates>> {
        self.templates.as_ref()
    }

    /// Loads partials, then the page template, then the menu template.
    ///
    /// An empty or absent `override_dir` means bundled templates only. A
    /// configured directory that does not exist is reported with a warning and
    /// is not an error: each file still falls back to its bundled copy.
    ///
    /// Calling `init` again rebuilds everything from storage. On failure the
    /// templates from the previous successful call stay in place.
    pub async fn init(&mut self, override_dir: Option<&str>) -> Result<(), EngineError> {
        let override_dir = override_dir.filter(|dir| !dir.is_empty());
        if let Some(root) = self.locator.override_root(override_dir) {
            if !self.store.exists(&root) {
                warn!(
                    "Template path specified but does not exist ({})...using default templates",
                    root.display()
                );
            }
        }

        let mut partials = base_registry();
        partials::register_all(&mut partials, &self.store, &self.locator, override_dir).await?;
        let page = PageTemplate::load(&partials, &self.store, &self.locator, override_dir).await?;
        let menu = menu::compile(&partials, &self.store, &self.locator, override_dir).await?;

        self.templates = Some(Arc::new(CompiledTemplates {
            override_dir: override_dir.map(str::to_string),
            partials,
            page,
            menu,
        }));
        debug!("Template engine initialized");
        Ok(())
    }

    /// Merges `page` into `main` and renders the page template with it.
    ///
    /// Fields of `page` overwrite same-named fields of `main`, and `main`
    /// keeps the merged fields after the call returns. The template sees the
    /// merged object as `data`.
    pub fn render(&self, main: &mut ContextMap, page: &ContextMap) -> Result<String, EngineError> {
        let templates = self.templates.as_ref().ok_or(EngineError::NotInitialized)?;
        merge_into(main, page);
        templates.page.compiled().render(&data_context(main))
    }

    /// Renders the navigation menu with `data` plus `menu = "normal"`.
    ///
    /// The menu compiled by `init` is reused when `override_dir` matches the
    /// directory `init` used. For any other directory the menu and the
    /// partials it includes are resolved, read and compiled for this call
    /// alone. `data` itself is not modified.
    pub async fn render_menu(
        &self,
        override_dir: Option<&str>,
        data: &ContextMap,
    ) -> Result<String, EngineError> {
        let templates = self.templates.as_ref().ok_or(EngineError::NotInitialized)?;
        let override_dir = override_dir.filter(|dir| !dir.is_empty());

        if templates.override_dir() == override_dir {
            return menu::render(&templates.menu, data);
        }

        debug!("Menu requested for a different template directory, compiling afresh");
        let mut partials = base_registry();
        partials::register_all(&mut partials, &self.store, &self.locator, override_dir).await?;
        let fresh = menu::compile(&partials, &self.store, &self.locator, override_dir).await?;
        menu::render(&fresh, data)
    }

    /// Writes the coverage badge for `label` to
    /// `{output_dir}/images/coverage-badge-{label}.svg`.
    ///
    /// Sets `coverage.label = label` as part of rendering. Does not require
    /// `init`. Returns the (working-directory relative) path written.
    pub async fn generate_badge(
        &self,
        output_dir: &str,
        label: &str,
        coverage: &mut ContextMap,
    ) -> Result<PathBuf, EngineError> {
        badge::generate(&self.store, &self.locator, output_dir, label, coverage).await
    }
}
