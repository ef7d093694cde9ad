//! Tera-based HTML templating for documentation sites.
//!
//! This module turns documentation data into final HTML pages and SVG coverage
//! badges. A page is the main `page.html` template composed with a fixed
//! catalog of partial fragments, and users may replace any bundled template
//! file by placing a file with the same relative path in an override
//! directory.
//!
//! # Template Layout
//!
//! ```text
//! templates/
//! ├── page.html
//! └── partials/
//!     ├── menu.html
//!     ├── coverage-badge.svg     (never overridable)
//!     ├── overview.html
//!     └── ...                    (one file per catalog entry)
//! ```
//!
//! # Lifecycle
//!
//! 1. [`HtmlEngine::init`] registers every partial, compiles the page template
//!    and compiles the menu template, in that order.
//! 2. [`HtmlEngine::render`] renders pages from the cached page template.
//! 3. [`HtmlEngine::render_menu`] renders the navigation menu.
//! 4. [`HtmlEngine::generate_badge`] writes coverage badges and works with or
//!    without `init`.
//!
//! # Template Context
//!
//! Page and badge templates receive their data under `data`:
//!
//! ```html
//! <title>{{ data.documentation_main_name }}</title>
//! {% if data.context == "overview" %}{% include "overview" %}{% endif %}
//! ```
//!
//! The menu template receives the caller's fields at the top level together
//! with `menu = "normal"`.
//!
//! # Strictness
//!
//! Referencing an undefined variable in an output expression is a render
//! error. Optional fields should be guarded with `is defined` or given a
//! `default`. Included partials are inserted verbatim and never re-indented.

pub mod badge;
pub mod compiled;
pub mod context;
pub mod engine;
pub mod filters;
pub mod locator;
pub mod menu;
pub mod page;
pub mod partials;


pub use compiled::CompiledTemplate;
pub use context::{ContextMap, merge_contexts};
pub use engine::{CompiledTemplates, EngineConfig, HtmlEngine};
pub use locator::TemplateLocator;
pub use partials::{PARTIAL_CATALOG, Partial};
