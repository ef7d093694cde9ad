//! Core types shared across the crate.

pub mod error;

pub use error::{EngineError, error_chain};
