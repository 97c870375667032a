//! The cached document index.

use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use folio_core::{DocumentSource, Error, Result};

use crate::document::Document;
use crate::options::IndexOptions;
use crate::snapshot::IndexSnapshot;

/// A document index over a [`DocumentSource`].
///
/// The first [`load_all`](Self::load_all) enumerates the source and caches
/// the resulting [`IndexSnapshot`]; later calls return the cached snapshot
/// without touching the source. Concurrent first callers share a single
/// build. Snapshots are handed out as `Arc`s, so a reader keeps a
/// consistent view even if the index is refreshed meanwhile.
///
/// # Example
///
/// ```
/// use folio_core::MemorySource;
/// use folio_index::DocumentIndex;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> folio_core::Result<()> {
/// let source = MemorySource::new()
///     .with_document("hello.md", "---\ntitle: Hello\ndate: 2024-01-01\n---\nHi.\n");
/// let index = DocumentIndex::new(source);
///
/// let doc = index.get_by_slug("hello").await?;
/// assert_eq!(doc.title(), "Hello");
/// # Ok(())
/// # }
/// ```
pub struct DocumentIndex<S> {
    source: S,
    options: IndexOptions,
    snapshot: RwLock<Option<Arc<IndexSnapshot>>>,
    build_lock: Mutex<()>,
}

impl<S: DocumentSource> DocumentIndex<S> {
    /// Create an index with default options. Nothing is loaded yet.
    pub fn new(source: S) -> Self {
        Self::with_options(source, IndexOptions::default())
    }

    pub fn with_options(source: S, options: IndexOptions) -> Self {
        Self {
            source,
            options,
            snapshot: RwLock::new(None),
            build_lock: Mutex::new(()),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// The cached snapshot, if one has been built.
    pub async fn current(&self) -> Option<Arc<IndexSnapshot>> {
        self.snapshot.read().await.clone()
    }

    /// Return the cached snapshot, building it first if needed.
    ///
    /// # Errors
    ///
    /// Fails only when the source itself cannot enumerate its documents.
    /// The cache is left as it was.
    pub async fn load_all(&self) -> Result<Arc<IndexSnapshot>> {
        if let Some(snapshot) = self.current().await {
            log::debug!("Index cache hit ({} documents)", snapshot.len());
            return Ok(snapshot);
        }

        let _guard = self.build_lock.lock().await;

        // Another caller may have finished the build while we waited.
        if let Some(snapshot) = self.current().await {
            return Ok(snapshot);
        }

        self.build().await
    }

    /// Rebuild from the source and replace the cached snapshot.
    pub async fn refresh(&self) -> Result<Arc<IndexSnapshot>> {
        let _guard = self.build_lock.lock().await;
        self.build().await
    }

    /// Drop the cached snapshot. The next [`load_all`](Self::load_all)
    /// rebuilds.
    pub async fn invalidate(&self) {
        let _guard = self.build_lock.lock().await;
        if self.snapshot.write().await.take().is_some() {
            log::debug!("Index cache invalidated");
        }
    }

    // Callers hold `build_lock`.
    async fn build(&self) -> Result<Arc<IndexSnapshot>> {
        let entries = self.source.documents().await?;
        let snapshot = Arc::new(IndexSnapshot::build(entries, &self.options));

        let stats = &snapshot.report().stats;
        log::info!(
            "Indexed {} documents ({} seen, {} excluded, {} skipped, {} drafts, {} warnings)",
            stats.indexed,
            stats.entries_seen,
            stats.excluded,
            stats.skipped,
            stats.drafts,
            snapshot.report().warnings.len()
        );

        *self.snapshot.write().await = Some(Arc::clone(&snapshot));
        Ok(snapshot)
    }

    /// All documents, in sort order.
    pub async fn all(&self) -> Result<Vec<Arc<Document>>> {
        Ok(self.load_all().await?.all().to_vec())
    }

    /// Look up a document by slug.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no document has this slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Arc<Document>> {
        self.load_all()
            .await?
            .get_by_slug(slug)
            .cloned()
            .ok_or_else(|| Error::not_found(format!("document '{slug}'")))
    }

    /// See [`IndexSnapshot::featured`].
    pub async fn featured(&self, limit: usize) -> Result<Vec<Arc<Document>>> {
        Ok(self.load_all().await?.featured(limit))
    }

    /// See [`IndexSnapshot::related`].
    pub async fn related(&self, exclude_slug: &str, limit: usize) -> Result<Vec<Arc<Document>>> {
        Ok(self.load_all().await?.related(exclude_slug, limit))
    }

    pub async fn by_tag(&self, tag: &str) -> Result<Vec<Arc<Document>>> {
        Ok(self.load_all().await?.by_tag(tag))
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<Arc<Document>>> {
        Ok(self.load_all().await?.by_category(category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::MemorySource;

    fn source() -> MemorySource {
        MemorySource::new()
            .with_document("a.md", "---\ntitle: A\ndate: 2024-01-01\n---\nA body\n")
            .with_document("b.md", "---\ntitle: B\ndate: 2024-02-01\n---\nB body\n")
    }

    #[tokio::test]
    async fn test_load_all_caches() {
        let index = DocumentIndex::new(source());
        assert!(index.current().await.is_none());

        let first = index.load_all().await.unwrap();
        let second = index.load_all().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_replaces_snapshot() {
        let index = DocumentIndex::new(source());
        let first = index.load_all().await.unwrap();
        let refreshed = index.refresh().await.unwrap();

        assert!(!Arc::ptr_eq(&first, &refreshed));
        assert!(Arc::ptr_eq(&refreshed, &index.current().await.unwrap()));
        // The old snapshot is still usable.
        assert_eq!(first.len(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_rebuild() {
        let index = DocumentIndex::new(source());
        let first = index.load_all().await.unwrap();
        index.invalidate().await;
        assert!(index.current().await.is_none());

        let second = index.load_all().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[tokio::test]
    async fn test_get_by_slug_not_found() {
        let index = DocumentIndex::new(source());
        let err = index.get_by_slug("missing").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(index.get_by_slug("a").await.unwrap().title(), "A");
    }

    #[tokio::test]
    async fn test_query_conveniences() {
        let index = DocumentIndex::new(source());
        let all = index.all().await.unwrap();
        assert_eq!(all[0].slug, "b");
        assert_eq!(index.featured(1).await.unwrap().len(), 1);
        assert_eq!(index.related("b", 5).await.unwrap()[0].slug, "a");
        assert!(index.by_tag("x").await.unwrap().is_empty());
        assert!(index.by_category("x").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_options_applied() {
        let index = DocumentIndex::with_options(
            source().with_document("c-wip.md", "---\ndate: 2024-03-01\n---\nC\n"),
            IndexOptions::default().with_exclude_markers(["wip"]),
        );
        let snapshot = index.load_all().await.unwrap();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.report().stats.excluded, 1);
        assert_eq!(index.options().exclude_markers, vec!["wip"]);
    }
}
