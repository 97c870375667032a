//! Common test utilities and harness for index integration tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use folio_core::{DocumentSource, MemorySource, Result, SourceEntry};

/// A source that counts enumerations and can be slowed down, to observe
/// caching and single-flight builds.
pub struct CountingSource {
    inner: MemorySource,
    calls: Arc<AtomicUsize>,
    delay: Duration,
}

impl CountingSource {
    pub fn new(inner: MemorySource) -> Self {
        Self {
            inner,
            calls: Arc::new(AtomicUsize::new(0)),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Shared counter of `documents()` calls.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl DocumentSource for CountingSource {
    async fn documents(&self) -> Result<Vec<SourceEntry>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.inner.documents().await
    }
}

/// A source that always fails to enumerate.
pub struct BrokenSource;

#[async_trait]
impl DocumentSource for BrokenSource {
    async fn documents(&self) -> Result<Vec<SourceEntry>> {
        Err(folio_core::Error::source("backing store offline"))
    }
}

/// Build a document with a header.
pub fn document(title: &str, date: &str, extra: &str) -> String {
    format!("---\ntitle: \"{title}\"\ndate: {date}\n{extra}---\n\nBody of {title}.\n")
}

/// A small corpus: three published posts (two featured) and one draft.
pub fn blog_corpus() -> MemorySource {
    MemorySource::new()
        .with_document(
            "blog/agent-tracing.md",
            document(
                "Agent Tracing",
                "2024-03-01",
                "featured: true\ntags: [tracing, agents]\ncategory: guides\n",
            ),
        )
        .with_document(
            "blog/cost-control.md",
            document("Cost Control", "2024-02-01", "tags: [cost]\ncategory: ops\n"),
        )
        .with_document(
            "blog/eval-basics.md",
            document(
                "Eval Basics",
                "2024-01-15",
                "featured: true\ntags: [evals, Agents]\ncategory: Guides\n",
            ),
        )
        .with_document(
            "blog/unreleased.md",
            document("Unreleased", "2024-04-01", "draft: true\nfeatured: true\n"),
        )
        .with_document(
            "blog/post-template.md",
            document("Template", "2024-05-01", ""),
        )
}
