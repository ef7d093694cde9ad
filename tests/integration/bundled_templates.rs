//! Rendering with the templates shipped in `templates/`.

use anyhow::Result;
use docgen_html::constants::{BADGE_TEMPLATE, bundled_templates_dir};
use docgen_html::templating::{ContextMap, EngineConfig, HtmlEngine, PARTIAL_CATALOG};
use docgen_html::test_utils::{MemoryFileStore, init_test_logging};
use docgen_html::utils::fs::LocalFileStore;
use serde_json::{Value, json};
use std::path::PathBuf;
use tempfile::TempDir;

fn object(value: Value) -> ContextMap {
    value.as_object().cloned().expect("object literal")
}

async fn initialized_engine(work: &TempDir) -> Result<HtmlEngine> {
    init_test_logging(None);
    let mut engine = HtmlEngine::new(LocalFileStore::new(work.path()), EngineConfig::new(work.path()));
    engine.init(None).await?;
    Ok(engine)
}

#[tokio::test]
async fn test_every_catalog_partial_is_bundled() -> Result<()> {
    let work = TempDir::new()?;
    let engine = initialized_engine(&work).await?;

    let templates = engine.templates().expect("initialized");
    assert_eq!(templates.partial_names().count(), PARTIAL_CATALOG.len());
    Ok(())
}

#[tokio::test]
async fn test_overview_page_renders() -> Result<()> {
    let work = TempDir::new()?;
    let engine = initialized_engine(&work).await?;

    let mut main = object(json!({
        "documentation_main_name": "Shop Docs",
        "modules": [{ "name": "AppModule" }],
    }));
    let page = object(json!({
        "context": "overview",
        "markdown": "<p>Welcome</p>",
    }));
    let html = engine.render(&mut main, &page)?;

    assert!(html.contains("<title>Shop Docs</title>"));
    assert!(html.contains("<p>Welcome</p>"));
    assert!(html.contains("1 module(s)"));
    assert_eq!(main["context"], "overview");
    Ok(())
}

#[tokio::test]
async fn test_class_page_renders_members() -> Result<()> {
    let work = TempDir::new()?;
    let engine = initialized_engine(&work).await?;

    let mut main = object(json!({ "documentation_main_name": "Docs", "depth": 1 }));
    let page = object(json!({
        "context": "class",
        "name": "CartService",
        "properties": [{ "name": "items", "type": "Item[]" }],
        "methods": [{ "name": "add", "args": [{ "name": "item" }], "description": "Adds\n  one item" }],
    }));
    let html = engine.render(&mut main, &page)?;

    assert!(html.contains("<base href=\"../\">"));
    assert!(html.contains("CartService"));
    assert!(html.contains("<code>Item[]</code>"));
    assert!(html.contains("add</b>(item)"));
    assert!(html.contains("Adds<br>&nbsp;&nbsp;one item"));
    Ok(())
}

#[tokio::test]
async fn test_page_escapes_plain_fields() -> Result<()> {
    let work = TempDir::new()?;
    let engine = initialized_engine(&work).await?;

    let mut main = object(json!({ "documentation_main_name": "<script>" }));
    let html = engine.render(&mut main, &object(json!({ "context": "index" })))?;

    assert!(html.contains("&lt;script&gt;"));
    assert!(!html.contains("<title><script>"));
    Ok(())
}

#[tokio::test]
async fn test_member_descriptions_are_escaped() -> Result<()> {
    let work = TempDir::new()?;
    let engine = initialized_engine(&work).await?;

    let page = object(json!({
        "context": "class",
        "name": "CartService",
        "methods": [{ "name": "add", "description": "Adds <img src=x onerror=alert(1)>\nitems" }],
    }));
    let html = engine.render(&mut ContextMap::new(), &page)?;

    assert!(html.contains("Adds &lt;img src=x onerror=alert(1)&gt;<br>items"));
    assert!(!html.contains("<img src=x"));
    Ok(())
}

#[tokio::test]
async fn test_module_page_requires_name() -> Result<()> {
    let work = TempDir::new()?;
    let engine = initialized_engine(&work).await?;

    let result = engine.render(&mut ContextMap::new(), &object(json!({ "context": "module" })));
    assert!(result.is_err());
    Ok(())
}

#[tokio::test]
async fn test_menu_marks_active_entry() -> Result<()> {
    let work = TempDir::new()?;
    let engine = initialized_engine(&work).await?;

    let data = object(json!({
        "active": "AppModule",
        "modules": [{ "name": "AppModule" }, { "name": "SharedModule" }],
    }));
    let html = engine.render_menu(None, &data).await?;

    assert!(html.contains("menu-normal"));
    assert!(html.contains("class=\"link active\"><a href=\"modules/AppModule.html\""));
    assert!(html.contains("class=\"link\"><a href=\"modules/SharedModule.html\""));
    Ok(())
}

#[tokio::test]
async fn test_badge_written_below_working_dir() -> Result<()> {
    let work = TempDir::new()?;
    let engine = HtmlEngine::new(LocalFileStore::new(work.path()), EngineConfig::new(work.path()));

    let output = work.path().join("out");
    let mut coverage = object(json!({ "percent": 80, "status": "good" }));
    let path = engine
        .generate_badge(output.to_str().expect("utf-8 path"), "coverage", &mut coverage)
        .await?;

    assert_eq!(path, PathBuf::from("out/images/coverage-badge-coverage.svg"));
    let svg = std::fs::read_to_string(work.path().join(&path))?;
    assert!(svg.contains(">coverage</text>"));
    assert!(svg.contains(">80%</text>"));
    assert!(svg.contains("#97ca00"));
    Ok(())
}

#[tokio::test]
async fn test_shipped_badge_template_renders_into_store() -> Result<()> {
    init_test_logging(None);
    let bundled = bundled_templates_dir();
    let store = MemoryFileStore::new();
    store.insert(
        bundled.join(BADGE_TEMPLATE),
        std::fs::read_to_string(bundled.join(BADGE_TEMPLATE))?,
    );
    let engine = HtmlEngine::new(store, EngineConfig::new("/site"));

    let mut coverage = object(json!({ "percent": 35 }));
    let path = engine.generate_badge("/site/documentation", "branches", &mut coverage).await?;

    assert_eq!(path, PathBuf::from("documentation/images/coverage-badge-branches.svg"));
    let svg = engine.store().get(&path).expect("badge written to store");
    assert!(svg.contains(">branches</text>"));
    assert!(svg.contains(">35%</text>"));
    assert!(svg.contains("#e05d44"));
    assert_eq!(engine.store().paths().len(), 2);
    Ok(())
}
