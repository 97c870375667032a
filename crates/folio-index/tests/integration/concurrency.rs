//! Cache sharing and single-flight builds.

use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;

use folio_index::DocumentIndex;

use crate::common::{CountingSource, blog_corpus};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_first_loads_build_once() {
    let source = CountingSource::new(blog_corpus()).with_delay(Duration::from_millis(50));
    let calls = source.counter();
    let index = Arc::new(DocumentIndex::new(source));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let index = Arc::clone(&index);
            tokio::spawn(async move { index.load_all().await.unwrap() })
        })
        .collect();

    let snapshots: Vec<_> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(snapshots.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
}

#[tokio::test]
async fn test_cached_loads_skip_source() {
    let source = CountingSource::new(blog_corpus());
    let calls = source.counter();
    let index = DocumentIndex::new(source);

    for _ in 0..3 {
        index.load_all().await.unwrap();
    }
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    index.refresh().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    index.invalidate().await;
    index.load_all().await.unwrap();
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_reader_keeps_old_snapshot_across_refresh() {
    let index = DocumentIndex::new(CountingSource::new(blog_corpus()));
    let held = index.load_all().await.unwrap();
    let fresh = index.refresh().await.unwrap();

    assert!(!Arc::ptr_eq(&held, &fresh));
    assert_eq!(held.len(), fresh.len());
    assert_eq!(held.all()[0].slug, "agent-tracing");
}
