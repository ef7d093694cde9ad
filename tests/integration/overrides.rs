//! Per-file template overrides.

use anyhow::Result;
use docgen_html::templating::{ContextMap, EngineConfig, HtmlEngine};
use docgen_html::utils::fs::LocalFileStore;
use serde_json::json;
use std::fs;
use tempfile::TempDir;

fn engine(work: &TempDir) -> HtmlEngine {
    HtmlEngine::new(LocalFileStore::new(work.path()), EngineConfig::new(work.path()))
}

#[tokio::test]
async fn test_overridden_partial_is_used_by_bundled_page() -> Result<()> {
    let work = TempDir::new()?;
    fs::create_dir_all(work.path().join("theme/partials"))?;
    fs::write(work.path().join("theme/partials/overview.html"), "<h1>Custom overview</h1>")?;

    let mut engine = engine(&work);
    engine.init(Some("theme")).await?;

    let page = json!({ "context": "overview" }).as_object().cloned().unwrap_or_default();
    let html = engine.render(&mut ContextMap::new(), &page)?;

    assert!(html.contains("<h1>Custom overview</h1>"));
    assert!(html.contains("<!doctype html>"));
    Ok(())
}

#[tokio::test]
async fn test_overridden_page_replaces_bundled_page() -> Result<()> {
    let work = TempDir::new()?;
    fs::create_dir_all(work.path().join("theme"))?;
    fs::write(work.path().join("theme/page.html"), "<body>{{ data.name }}</body>")?;

    let mut engine = engine(&work);
    engine.init(Some("theme")).await?;

    let page = json!({ "name": "Custom" }).as_object().cloned().unwrap_or_default();
    assert_eq!(engine.render(&mut ContextMap::new(), &page)?, "<body>Custom</body>");
    Ok(())
}

#[tokio::test]
async fn test_missing_override_directory_uses_bundled_templates() -> Result<()> {
    let work = TempDir::new()?;

    let mut engine = engine(&work);
    engine.init(Some("no-such-theme")).await?;

    let page = json!({ "context": "index" }).as_object().cloned().unwrap_or_default();
    let html = engine.render(&mut ContextMap::new(), &page)?;
    assert!(html.contains("search-input"));
    Ok(())
}

#[tokio::test]
async fn test_broken_override_fails_init() -> Result<()> {
    let work = TempDir::new()?;
    fs::create_dir_all(work.path().join("theme/partials"))?;
    fs::write(work.path().join("theme/partials/menu.html"), "{% if %}")?;

    let mut engine = engine(&work);
    let err = engine.init(Some("theme")).await.unwrap_err();

    assert!(err.is_load_failure());
    assert!(engine.templates().is_none());
    Ok(())
}

#[tokio::test]
async fn test_menu_override_applies_to_matching_directory() -> Result<()> {
    let work = TempDir::new()?;
    fs::create_dir_all(work.path().join("theme/partials"))?;
    fs::write(work.path().join("theme/partials/menu.html"), "<nav>{{ menu }} {{ active }}</nav>")?;

    let mut engine = engine(&work);
    engine.init(Some("theme")).await?;

    let data = json!({ "active": "routes" }).as_object().cloned().unwrap_or_default();
    assert_eq!(engine.render_menu(Some("theme"), &data).await?, "<nav>normal routes</nav>");

    let bundled = engine.render_menu(None, &data).await?;
    assert!(bundled.contains("menu-normal"));
    Ok(())
}
