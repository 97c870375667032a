//! Async file utilities.
//!
//! File discovery and reading used by [`FsSource`](crate::source::FsSource).

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// Options for discovering files.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "md"
    pub extension: Option<String>,
    /// Maximum directory depth to search (None = unlimited)
    pub max_depth: Option<usize>,
}

impl FindOptions {
    /// Create options for finding markdown files.
    pub fn markdown() -> Self {
        Self {
            extension: Some("md".to_string()),
            max_depth: None,
        }
    }

    /// Match a different extension (without dot).
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = Some(extension.into());
        self
    }

    /// Set maximum search depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

/// A directory entry the walk could not visit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkFailure {
    /// Path relative to the search base (empty when the walker did not
    /// report one).
    pub relative_path: PathBuf,
    /// Why the entry could not be visited.
    pub reason: String,
}

/// Files found by [`walk_files`], plus the entries it had to skip.
#[derive(Debug, Clone, Default)]
pub struct WalkResult {
    /// Matching files, sorted by relative path.
    pub files: Vec<FileInfo>,
    /// Entries that could not be visited, in walk order.
    pub failures: Vec<WalkFailure>,
}

/// Find all files matching criteria in a directory.
///
/// Results are sorted by relative path so that repeated walks over the same
/// tree enumerate files in the same order. Entries the walk cannot visit
/// are logged and skipped.
///
/// Returns an error if `base_path` itself cannot be accessed.
pub async fn find_all_files(base_path: &Path, options: &FindOptions) -> Result<Vec<FileInfo>> {
    let walk = walk_files(base_path, options).await?;
    for failure in &walk.failures {
        log::warn!(
            "Skipping {}: {}",
            base_path.join(&failure.relative_path).display(),
            failure.reason
        );
    }
    Ok(walk.files)
}

/// Walk a directory, collecting matching files and the entries that could
/// not be visited.
///
/// A subdirectory that cannot be listed becomes a [`WalkFailure`] and the
/// walk continues. Returns an error only if `base_path` itself cannot be
/// accessed.
pub async fn walk_files(base_path: &Path, options: &FindOptions) -> Result<WalkResult> {
    fs::metadata(base_path)
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?;

    let mut result = WalkResult::default();
    let mut walker = WalkDir::new(base_path);

    while let Some(entry_result) = walker.next().await {
        let entry = match entry_result {
            Ok(entry) => entry,
            Err(e) => {
                let relative_path = e
                    .path()
                    .map(|p| p.strip_prefix(base_path).unwrap_or(p).to_path_buf())
                    .unwrap_or_default();
                result.failures.push(WalkFailure {
                    relative_path,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let path = entry.path();

        // Skip directories
        if path.is_dir() {
            continue;
        }

        // Check depth limit
        if let Some(max_depth) = options.max_depth {
            let depth = path
                .strip_prefix(base_path)
                .map(|p| p.components().count())
                .unwrap_or(0);
            if depth > max_depth {
                continue;
            }
        }

        // Check extension if specified
        if let Some(ext) = options.extension.as_deref() {
            let matches = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(ext));
            if !matches {
                continue;
            }
        }

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();

        result.files.push(FileInfo {
            path: path.clone(),
            relative_path,
        });
    }

    result
        .files
        .sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    Ok(result)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
