//! Document sources.
//!
//! The pipeline never performs I/O itself: it is handed a
//! [`DocumentSource`] that enumerates raw documents. Two implementations
//! are provided:
//!
//! - [`MemorySource`]: documents held in memory (embedded content, tests)
//! - [`FsSource`]: documents read from a content directory
//!
//! # Example
//!
//! ```
//! use folio_core::{DocumentSource, MemorySource, SourceEntry};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let source = MemorySource::new()
//!     .with_document("blog/hello.md", "---\ntitle: Hello\n---\n\nBody");
//!
//! let entries = source.documents().await.unwrap();
//! assert_eq!(entries[0].identifier(), "blog/hello.md");
//! assert!(matches!(entries[0], SourceEntry::Document(_)));
//! # }
//! ```

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;

use crate::Result;
use crate::util::files::{FindOptions, WalkFailure, read_file, walk_files};

/// One document as produced by a source: an identifier and its full text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawDocument {
    /// Source identifier (relative path or slug).
    pub identifier: String,
    /// Complete text content, header included.
    pub content: String,
}

impl RawDocument {
    /// Create a raw document.
    pub fn new(identifier: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            content: content.into(),
        }
    }
}

/// An entry enumerated by a [`DocumentSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SourceEntry {
    /// A readable document.
    Document(RawDocument),
    /// An entry the source found but could not read.
    Unreadable {
        /// Source identifier of the entry.
        identifier: String,
        /// Why it could not be read.
        reason: String,
    },
}

impl SourceEntry {
    /// The identifier of this entry, readable or not.
    pub fn identifier(&self) -> &str {
        match self {
            Self::Document(doc) => &doc.identifier,
            Self::Unreadable { identifier, .. } => identifier,
        }
    }
}

/// Capability that enumerates the raw documents of a content collection.
///
/// Returning `Err` means the source as a whole is unavailable. Individual
/// entries that cannot be read are reported as [`SourceEntry::Unreadable`]
/// so that one bad file does not abort a load.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Enumerate every entry of the source.
    async fn documents(&self) -> Result<Vec<SourceEntry>>;
}

// ============================================================================
// MemorySource
// ============================================================================

/// A source backed by documents held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    documents: Vec<RawDocument>,
}

impl MemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document (builder style).
    pub fn with_document(mut self, identifier: impl Into<String>, content: impl Into<String>) -> Self {
        self.push(identifier, content);
        self
    }

    /// Add a document.
    pub fn push(&mut self, identifier: impl Into<String>, content: impl Into<String>) {
        self.documents.push(RawDocument::new(identifier, content));
    }

    /// Number of documents held.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if the source holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl<I, C> FromIterator<(I, C)> for MemorySource
where
    I: Into<String>,
    C: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (I, C)>>(iter: T) -> Self {
        Self {
            documents: iter
                .into_iter()
                .map(|(id, content)| RawDocument::new(id, content))
                .collect(),
        }
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    async fn documents(&self) -> Result<Vec<SourceEntry>> {
        Ok(self
            .documents
            .iter()
            .cloned()
            .map(SourceEntry::Document)
            .collect())
    }
}

// ============================================================================
// FsSource
// ============================================================================

/// A source that reads every matching file under a content root.
///
/// Identifiers are paths relative to the root, `/`-separated, in sorted
/// order.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
    options: FindOptions,
}

impl FsSource {
    /// Create a source over `root` selecting `*.md` files.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            options: FindOptions::markdown(),
        }
    }

    /// Select files with a different extension (without dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.options = self.options.with_extension(extension);
        self
    }

    /// Limit how deep below the root files are discovered.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.options = self.options.with_max_depth(depth);
        self
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl DocumentSource for FsSource {
    async fn documents(&self) -> Result<Vec<SourceEntry>> {
        let walk = walk_files(&self.root, &self.options).await?;
        log::debug!(
            "Found {} candidate files under {} ({} entries skipped)",
            walk.files.len(),
            self.root.display(),
            walk.failures.len()
        );

        let mut entries = Vec::with_capacity(walk.files.len() + walk.failures.len());
        for file in walk.files {
            let identifier = identifier_for(&file.relative_path);
            match read_file(&file.path).await {
                Ok(content) => entries.push(SourceEntry::Document(RawDocument::new(
                    identifier, content,
                ))),
                Err(e) => entries.push(SourceEntry::Unreadable {
                    identifier,
                    reason: e.to_string(),
                }),
            }
        }

        entries.extend(walk.failures.iter().map(unreadable_entry));

        Ok(entries)
    }
}

fn identifier_for(relative_path: &Path) -> String {
    relative_path.to_string_lossy().replace('\\', "/")
}

/// An entry the walk could not visit, reported like an unreadable file.
fn unreadable_entry(failure: &WalkFailure) -> SourceEntry {
    SourceEntry::Unreadable {
        identifier: identifier_for(&failure.relative_path),
        reason: failure.reason.clone(),
    }
}
