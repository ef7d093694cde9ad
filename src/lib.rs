//! docgen-html - template resolution and rendering for documentation sites
//!
//! Turns structured documentation data into HTML pages and SVG coverage
//! badges. Pages are produced from a main page template composed with a fixed
//! catalog of named partials; any bundled template file can be replaced per
//! file by dropping a same-named file into an override directory.
//!
//! # Core Modules
//!
//! - [`templating`] - Template resolution, partial registration, page, menu and badge rendering
//! - [`utils`] - File system access behind the [`utils::fs::FileStore`] trait
//! - [`core`] - Error types
//! - [`config`] - Site configuration (`docgen.toml`)
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use docgen_html::templating::{EngineConfig, HtmlEngine};
//! use docgen_html::utils::fs::LocalFileStore;
//! use serde_json::json;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let cwd = std::env::current_dir()?;
//! let mut engine = HtmlEngine::new(LocalFileStore::new(&cwd), EngineConfig::new(&cwd));
//! engine.init(None).await?;
//!
//! let mut coverage = json!({ "percent": 87, "status": "good" }).as_object().cloned().unwrap();
//! engine.generate_badge("documentation", "statements", &mut coverage).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod templating;
pub mod utils;

// test_utils module is available for both unit tests and integration tests
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
