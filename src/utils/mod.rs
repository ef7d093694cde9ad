//! Supporting utilities shared by the engine and the CLI.

pub mod fs;

pub use fs::{FileStore, LocalFileStore};
