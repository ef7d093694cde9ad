//! Error types for the rendering engine.
//!
//! Every failing engine operation surfaces as an [`EngineError`]. There is no
//! retry and no fallback substitution anywhere: a template that cannot be read
//! or compiled fails the operation that needed it, and a missing template is
//! never replaced by empty output.
//!
//! # Error Categories
//!
//! - **Loading**: [`EngineError::PartialLoad`], [`EngineError::PageLoad`],
//!   [`EngineError::MenuLoad`] and [`EngineError::Compile`] abort the whole
//!   `init` call, which keeps whatever state it had before. A `render_menu`
//!   call that compiles a menu for another directory fails with them too.
//! - **Rendering**: [`EngineError::Render`] covers strict-mode failures such as
//!   an undefined variable referenced by the page template.
//! - **Badges**: [`EngineError::BadgeTemplate`], [`EngineError::BadgeCompile`]
//!   and [`EngineError::BadgeWrite`] fail a single badge only.
//! - **Caller contract**: [`EngineError::NotInitialized`] is returned when
//!   rendering is attempted before a successful `init`.
//!
//! The missing override directory condition is not an error; it is logged as
//! a warning during `init` and resolution falls back to bundled templates.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for engine operations.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A partial fragment could not be read during `init`.
    #[error("Failed to load partial '{name}' from {}", path.display())]
    PartialLoad {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The page template could not be read during `init`.
    #[error("Failed to load page template from {}", path.display())]
    PageLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The menu template could not be read.
    #[error("Failed to load menu template from {}", path.display())]
    MenuLoad {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Template source failed to parse.
    #[error("Failed to compile template '{template}'")]
    Compile {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// A compiled template failed while producing output.
    #[error("Failed to render template '{template}'")]
    Render {
        template: String,
        #[source]
        source: tera::Error,
    },

    /// The bundled badge template could not be read.
    #[error("Error during coverage badge generation: cannot read {}", path.display())]
    BadgeTemplate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The bundled badge template failed to parse.
    #[error("Error during coverage badge generation: cannot compile {}", path.display())]
    BadgeCompile {
        path: PathBuf,
        #[source]
        source: tera::Error,
    },

    /// The rendered badge could not be written.
    #[error("Error during coverage badge {label} file generation at {}", path.display())]
    BadgeWrite {
        label: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `render` or `render_menu` was called before `init` completed.
    #[error("Rendering engine used before init() completed")]
    NotInitialized,
}

impl EngineError {
    /// Returns `true` when a page, menu or partial template could not be read
    /// or compiled.
    ///
    /// Every `init` failure is one of these. Badge failures never are.
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            Self::PartialLoad { .. }
                | Self::PageLoad { .. }
                | Self::MenuLoad { .. }
                | Self::Compile { .. }
        )
    }
}

/// Flattens an error and its `source()` chain into one line.
///
/// Tera reports the interesting detail (the undefined variable, the parse
/// location) in nested sources, so the top-level message alone is rarely
/// useful in logs.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut current = err.source();
    while let Some(cause) = current {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        current = cause.source();
    }
    message
}
