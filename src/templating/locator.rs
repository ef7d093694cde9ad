//! Resolution of logical template files to concrete paths.
//!
//! User overrides replace bundled templates one file at a time: a template is
//! taken from the override directory only when that exact file exists there,
//! otherwise the bundled copy is used. Resolution never fails and never logs;
//! the directory-level warning emitted by `init` is independent of it.

use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::utils::fs::FileStore;

/// Maps relative template paths onto the override directory or bundled root.
#[derive(Debug, Clone)]
pub struct TemplateLocator {
    working_dir: PathBuf,
    bundled_root: PathBuf,
}

impl TemplateLocator {
    /// Creates a locator. Override directories are interpreted relative to
    /// `working_dir`.
    pub fn new(working_dir: impl Into<PathBuf>, bundled_root: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: working_dir.into(),
            bundled_root: bundled_root.into(),
        }
    }

    /// The working directory override directories are joined onto.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The root directory of the bundled templates.
    pub fn bundled_root(&self) -> &Path {
        &self.bundled_root
    }

    /// Path of `file` inside the bundled templates, ignoring overrides.
    pub fn bundled(&self, file: &str) -> PathBuf {
        self.bundled_root.join(file)
    }

    /// Location of the override directory, if one is configured.
    ///
    /// The directory always lives below the working directory: a leading root
    /// (`/theme`) is dropped rather than replacing the working directory.
    pub fn override_root(&self, override_dir: Option<&str>) -> Option<PathBuf> {
        override_dir.filter(|dir| !dir.is_empty()).map(|dir| {
            let relative: PathBuf = Path::new(dir)
                .components()
                .filter(|component| !matches!(component, Component::RootDir | Component::Prefix(_)))
                .collect();
            self.working_dir.join(relative)
        })
    }

    /// Resolves `file` to the override copy when it exists, else the bundled one.
    ///
    /// The per-file check runs on every call, regardless of whether the
    /// override directory itself was found at `init` time.
    pub fn resolve<F: FileStore>(&self, store: &F, override_dir: Option<&str>, file: &str) -> PathBuf {
        if let Some(root) = self.override_root(override_dir) {
            let candidate = root.join(file);
            if store.exists(&candidate) {
                debug!("Using override template {}", candidate.display());
                return candidate;
            }
        }
        self.bundled(file)
    }
}
