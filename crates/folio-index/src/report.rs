//! Load cycle reporting.
//!
//! A load never fails because of one bad document. Each document that is
//! skipped or only partially understood produces a [`LoadWarning`], and
//! the counts for the whole cycle are kept in [`LoadStats`].

use std::fmt;

use serde::Serialize;

use folio_content::Diagnostic;

/// Counts for one load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Entries produced by the source.
    pub entries_seen: usize,
    /// Entries whose identifier matched an exclude marker.
    pub excluded: usize,
    /// Entries dropped as empty, unreadable or without a usable slug.
    pub skipped: usize,
    /// Documents dropped because they are drafts.
    pub drafts: usize,
    /// Documents in the resulting snapshot.
    pub indexed: usize,
}

/// Why a document produced a warning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum WarningKind {
    /// Empty or whitespace-only content. The document was skipped.
    Empty,
    /// The source could not read the document. It was skipped.
    Unreadable { reason: String },
    /// No slug could be derived from the identifier. It was skipped.
    InvalidSlug,
    /// Another document already uses this slug; lookups resolve to the
    /// earlier one.
    DuplicateSlug { slug: String },
    /// The date did not parse; the document sorts last.
    UnparsableDate { value: String },
    /// The header parser skipped or coerced something.
    Header(Diagnostic),
}

/// A per-document problem recorded during a load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadWarning {
    /// Source identifier of the document.
    pub identifier: String,
    /// What went wrong.
    pub kind: WarningKind,
}

impl LoadWarning {
    /// Create a warning for an identifier.
    pub fn new(identifier: impl Into<String>, kind: WarningKind) -> Self {
        Self {
            identifier: identifier.into(),
            kind,
        }
    }
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = &self.identifier;
        match &self.kind {
            WarningKind::Empty => write!(f, "{id}: empty document skipped"),
            WarningKind::Unreadable { reason } => write!(f, "{id}: unreadable ({reason})"),
            WarningKind::InvalidSlug => write!(f, "{id}: no slug could be derived"),
            WarningKind::DuplicateSlug { slug } => write!(f, "{id}: duplicate slug '{slug}'"),
            WarningKind::UnparsableDate { value } => {
                write!(f, "{id}: unparsable date '{value}', sorted last")
            }
            WarningKind::Header(diagnostic) => write!(f, "{id}: {diagnostic}"),
        }
    }
}

/// Outcome of one load cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Counts for the load.
    pub stats: LoadStats,
    /// Per-document warnings, in the order they were recorded.
    pub warnings: Vec<LoadWarning>,
}

impl LoadReport {
    /// Record a warning and log it.
    pub(crate) fn warn(&mut self, warning: LoadWarning) {
        log::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Whether the cycle produced no warnings.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }

    /// Warnings for a single identifier.
    pub fn warnings_for<'a>(&'a self, identifier: &'a str) -> impl Iterator<Item = &'a LoadWarning> {
        self.warnings
            .iter()
            .filter(move |w| w.identifier == identifier)
    }
}
