//! Cached, queryable document index for Folio content.
//!
//! [`DocumentIndex`] enumerates an injected
//! [`DocumentSource`](folio_core::DocumentSource), parses every document's
//! header, derives slug and reading time, drops drafts, sorts newest first
//! and caches the result as an immutable [`IndexSnapshot`].
//!
//! # Modules
//!
//! - [`index`]: [`DocumentIndex`], the cache and its async queries
//! - [`snapshot`]: [`IndexSnapshot`], building and sync queries
//! - [`document`]: [`Document`] and [`ReadTime`]
//! - [`report`]: [`LoadReport`], per-load counts and warnings
//! - [`options`]: [`IndexOptions`]
//! - [`date`]: Publication date parsing

pub mod date;
pub mod document;
pub mod index;
pub mod options;
pub mod report;
pub mod snapshot;

pub use document::{Document, ReadTime};
pub use index::DocumentIndex;
pub use options::{DEFAULT_WORDS_PER_MINUTE, IndexOptions};
pub use report::{LoadReport, LoadStats, LoadWarning, WarningKind};
pub use snapshot::IndexSnapshot;
