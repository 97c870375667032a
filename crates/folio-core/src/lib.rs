//! Folio Core: shared types, traits, errors and utilities.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`source`]: The [`DocumentSource`] seam and its in-memory and
//!   filesystem implementations
//! - [`util`]: File discovery and identifier utilities

pub mod error;
pub mod source;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use source::{DocumentSource, FsSource, MemorySource, RawDocument, SourceEntry};

// Convenience re-exports from util
pub use util::ids::{anchor_id, slug_from_identifier};
