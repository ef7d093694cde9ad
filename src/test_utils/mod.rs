//! Test utilities for the rendering engine.
//!
//! Provides an in-memory [`FileStore`] so engine behaviour can be asserted
//! without touching the disk, plus one-time logging setup for tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use docgen_html::templating::{EngineConfig, HtmlEngine};
//! use docgen_html::test_utils::MemoryFileStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = MemoryFileStore::with_stub_templates("/bundled");
//! store.insert("/bundled/page.html", "<h1>{{ data.title }}</h1>");
//!
//! let mut engine =
//!     HtmlEngine::new(store, EngineConfig::new("/work").with_bundled_root("/bundled"));
//! engine.init(None).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, Once};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::constants::{BADGE_TEMPLATE, MENU_TEMPLATE, PAGE_TEMPLATE};
use crate::templating::PARTIAL_CATALOG;
use crate::utils::fs::FileStore;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Respects `RUST_LOG` when set, otherwise uses `level`. With neither, tests
/// run silently.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .try_init();
    });
}

/// In-memory [`FileStore`].
///
/// Paths are stored exactly as passed, so a relative write shows up under its
/// relative key. Directories exist implicitly when any stored file lives
/// below them.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    files: Mutex<BTreeMap<PathBuf, String>>,
    read_only: Mutex<bool>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding a minimal bundled template set under `root`.
    ///
    /// Every catalog partial renders as `[name]`, the page renders `page`,
    /// the menu renders `{{ menu }}|{{ active }}` and the badge renders its
    /// label and percentage.
    pub fn with_stub_templates(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let store = Self::new();
        for partial in PARTIAL_CATALOG {
            store.insert(root.join(partial.path), format!("[{}]", partial.name));
        }
        store.insert(root.join(PAGE_TEMPLATE), "page");
        store.insert(root.join(MENU_TEMPLATE), "{{ menu }}|{{ active | default(value='') }}");
        store.insert(
            root.join(BADGE_TEMPLATE),
            "<svg>{{ data.label }} {{ data.percent | default(value=0) }}%</svg>",
        );
        store
    }

    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.lock().insert(path.into(), content.into());
    }

    pub fn remove(&self, path: &Path) -> Option<String> {
        self.lock().remove(path)
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.lock().get(path.as_ref()).cloned()
    }

    /// Paths of every stored file.
    pub fn paths(&self) -> Vec<PathBuf> {
        self.lock().keys().cloned().collect()
    }

    /// Makes every subsequent write fail with `PermissionDenied`.
    pub fn set_read_only(&self, read_only: bool) {
        *self.read_only.lock().unwrap_or_else(|e| e.into_inner()) = read_only;
    }

    fn lock(&self) -> MutexGuard<'_, BTreeMap<PathBuf, String>> {
        self.files.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl FileStore for MemoryFileStore {
    fn exists(&self, path: &Path) -> bool {
        self.lock().keys().any(|stored| stored.starts_with(path))
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        self.get(path).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        if *self.read_only.lock().unwrap_or_else(|e| e.into_inner()) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "store is read-only"));
        }
        self.insert(path, content);
        Ok(())
    }
}
