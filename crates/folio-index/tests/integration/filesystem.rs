//! Loading from a content directory on disk.

use std::fs;

use folio_core::FsSource;
use folio_index::{DocumentIndex, WarningKind};
use tempfile::TempDir;

use crate::common::document;

fn content_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let blog = dir.path().join("blog");
    fs::create_dir_all(&blog).unwrap();

    fs::write(blog.join("first.md"), document("First", "2024-01-01", "")).unwrap();
    fs::write(blog.join("second.md"), document("Second", "2024-02-01", "")).unwrap();
    fs::write(blog.join("blog-template.md"), document("T", "2024-03-01", "")).unwrap();
    fs::write(blog.join("empty.md"), "").unwrap();
    fs::write(blog.join("notes.txt"), "not markdown").unwrap();
    fs::write(blog.join("broken.md"), [0xff, 0xfe, 0x00]).unwrap();
    dir
}

#[tokio::test]
async fn test_fs_source_end_to_end() {
    let dir = content_dir();
    let index = DocumentIndex::new(FsSource::new(dir.path()));
    let snapshot = index.load_all().await.unwrap();

    let slugs: Vec<&str> = snapshot.all().iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["second", "first"]);
    assert_eq!(
        snapshot.get_by_slug("first").unwrap().identifier,
        "blog/first.md"
    );

    let stats = &snapshot.report().stats;
    assert_eq!(stats.entries_seen, 5);
    assert_eq!(stats.excluded, 1);
    assert_eq!(stats.skipped, 2);

    let kinds: Vec<&WarningKind> = snapshot.report().warnings.iter().map(|w| &w.kind).collect();
    assert!(kinds.contains(&&WarningKind::Empty));
    assert!(kinds.iter().any(|k| matches!(k, WarningKind::Unreadable { .. })));
}

#[tokio::test]
async fn test_fs_source_missing_root_is_error() {
    let dir = TempDir::new().unwrap();
    let index = DocumentIndex::new(FsSource::new(dir.path().join("nope")));
    assert!(index.load_all().await.is_err());
    assert!(index.current().await.is_none());
}
