//! File system access for template loading and asset output.
//!
//! The engine never touches the disk directly. Every existence check, read and
//! write goes through a [`FileStore`], which keeps the template resolution and
//! badge logic testable against an in-memory store while production code uses
//! [`LocalFileStore`].
//!
//! # Path handling
//!
//! Absolute paths are used as-is. Relative paths are interpreted against the
//! store's root, which for [`LocalFileStore`] is the working directory the
//! engine was configured with. Badge output paths are deliberately relative,
//! so the root determines where assets land.
//!
//! # Examples
//!
//! ```rust,no_run
//! use docgen_html::utils::fs::{FileStore, LocalFileStore};
//! use std::path::Path;
//!
//! # async fn example() -> std::io::Result<()> {
//! let store = LocalFileStore::current_dir()?;
//! store.write(Path::new("out/images/badge.svg"), "<svg/>").await?;
//! assert!(store.exists(Path::new("out/images/badge.svg")));
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::io;
use std::path::{Path, PathBuf};

/// Storage backend consumed by the rendering engine.
///
/// `exists` is synchronous because override resolution performs it inline for
/// every template lookup; reads and writes are asynchronous.
pub trait FileStore: Send + Sync {
    /// Returns `true` when a file or directory exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Reads the full UTF-8 content of `path`.
    fn read(&self, path: &Path) -> impl Future<Output = io::Result<String>> + Send;

    /// Writes `content` to `path`, replacing any previous content.
    fn write(&self, path: &Path, content: &str) -> impl Future<Output = io::Result<()>> + Send;
}

/// [`FileStore`] backed by the local file system through `tokio::fs`.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Creates a store resolving relative paths against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
        }
    }

    /// Creates a store rooted at the process working directory.
    pub fn current_dir() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// The directory relative paths are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn full_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

impl FileStore for LocalFileStore {
    fn exists(&self, path: &Path) -> bool {
        self.full_path(path).exists()
    }

    async fn read(&self, path: &Path) -> io::Result<String> {
        tokio::fs::read_to_string(self.full_path(path)).await
    }

    async fn write(&self, path: &Path, content: &str) -> io::Result<()> {
        let target = self.full_path(path);
        // Output directories such as `images/` are created on demand
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&target, content).await
    }
}
