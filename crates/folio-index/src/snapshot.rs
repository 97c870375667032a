//! Immutable index snapshots.
//!
//! A snapshot is built from one enumeration of the source and never changes
//! afterwards. Building is synchronous and pure; caching and refreshing
//! live in [`DocumentIndex`](crate::DocumentIndex).

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use folio_content::parse_document;
use folio_core::{RawDocument, SourceEntry, slug_from_identifier};

use crate::date::parse_date;
use crate::document::{Document, ReadTime, word_count};
use crate::options::IndexOptions;
use crate::report::{LoadReport, LoadWarning, WarningKind};

/// A sorted, draft-free set of documents with slug lookup.
///
/// Order: documents with a parsed date come first, newest first; documents
/// whose date did not parse follow. Ties are broken by slug, ascending.
#[derive(Debug, Clone, Default)]
pub struct IndexSnapshot {
    documents: Vec<Arc<Document>>,
    by_slug: HashMap<String, usize>,
    report: LoadReport,
}

/// Turn one raw document into an indexed one, recording warnings.
///
/// Returns `None` when the document is skipped or is a draft.
fn index_document(
    raw: RawDocument,
    options: &IndexOptions,
    report: &mut LoadReport,
) -> Option<Document> {
    let RawDocument {
        identifier,
        content,
    } = raw;

    if content.trim().is_empty() {
        report.stats.skipped += 1;
        report.warn(LoadWarning::new(identifier, WarningKind::Empty));
        return None;
    }

    let Some(slug) = slug_from_identifier(&identifier) else {
        report.stats.skipped += 1;
        report.warn(LoadWarning::new(identifier, WarningKind::InvalidSlug));
        return None;
    };

    let parsed = parse_document(&content);
    for diagnostic in &parsed.diagnostics {
        report.warn(LoadWarning::new(
            identifier.as_str(),
            WarningKind::Header(diagnostic.clone()),
        ));
    }

    if parsed.metadata.draft {
        log::debug!("Skipping draft: {identifier}");
        report.stats.drafts += 1;
        return None;
    }

    let published = parse_date(&parsed.metadata.date);
    if published.is_none() {
        report.warn(LoadWarning::new(
            identifier.as_str(),
            WarningKind::UnparsableDate {
                value: parsed.metadata.date.clone(),
            },
        ));
    }

    Some(Document {
        slug,
        read_time: ReadTime::from_words(word_count(parsed.body), options.words_per_minute),
        body: parsed.body.to_string(),
        metadata: parsed.metadata,
        published,
        identifier,
    })
}

impl IndexSnapshot {
    /// Build a snapshot from source entries.
    ///
    /// Per-entry problems never fail the build; they are counted and
    /// recorded in the snapshot's [`LoadReport`].
    pub fn build(entries: Vec<SourceEntry>, options: &IndexOptions) -> Self {
        let mut report = LoadReport::default();
        report.stats.entries_seen = entries.len();

        let mut documents = Vec::with_capacity(entries.len());
        for entry in entries {
            if options.is_excluded(entry.identifier()) {
                log::debug!("Excluding {}", entry.identifier());
                report.stats.excluded += 1;
                continue;
            }

            match entry {
                SourceEntry::Unreadable { identifier, reason } => {
                    report.stats.skipped += 1;
                    report.warn(LoadWarning::new(
                        identifier,
                        WarningKind::Unreadable { reason },
                    ));
                }
                SourceEntry::Document(raw) => {
                    if let Some(doc) = index_document(raw, options, &mut report) {
                        documents.push(doc);
                    }
                }
            }
        }

        documents.sort_by(|a, b| {
            b.published
                .cmp(&a.published)
                .then_with(|| a.slug.cmp(&b.slug))
        });

        let mut by_slug = HashMap::with_capacity(documents.len());
        let mut duplicates = Vec::new();
        for (idx, doc) in documents.iter().enumerate() {
            match by_slug.entry(doc.slug.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(idx);
                }
                Entry::Occupied(_) => duplicates.push(LoadWarning::new(
                    doc.identifier.as_str(),
                    WarningKind::DuplicateSlug {
                        slug: doc.slug.clone(),
                    },
                )),
            }
        }
        for warning in duplicates {
            report.warn(warning);
        }

        report.stats.indexed = documents.len();

        Self {
            documents: documents.into_iter().map(Arc::new).collect(),
            by_slug,
            report,
        }
    }

    /// All documents, in sort order.
    pub fn all(&self) -> &[Arc<Document>] {
        &self.documents
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns `true` if nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The report of the load that produced this snapshot.
    pub fn report(&self) -> &LoadReport {
        &self.report
    }

    /// Look up a document by slug. With duplicate slugs, the first in sort
    /// order wins.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Arc<Document>> {
        self.by_slug.get(slug).map(|&idx| &self.documents[idx])
    }

    /// Up to `limit` documents: featured ones first, then the newest
    /// non-featured ones to fill the remaining slots.
    pub fn featured(&self, limit: usize) -> Vec<Arc<Document>> {
        let featured = self.documents.iter().filter(|d| d.is_featured());
        let rest = self.documents.iter().filter(|d| !d.is_featured());
        featured.chain(rest).take(limit).cloned().collect()
    }

    /// Up to `limit` documents other than `exclude_slug`, in sort order.
    pub fn related(&self, exclude_slug: &str, limit: usize) -> Vec<Arc<Document>> {
        self.documents
            .iter()
            .filter(|d| d.slug != exclude_slug)
            .take(limit)
            .cloned()
            .collect()
    }

    /// Documents carrying `tag`, compared case-insensitively.
    pub fn by_tag(&self, tag: &str) -> Vec<Arc<Document>> {
        self.documents
            .iter()
            .filter(|d| d.metadata.has_tag(tag))
            .cloned()
            .collect()
    }

    /// Documents in `category`, compared case-insensitively.
    pub fn by_category(&self, category: &str) -> Vec<Arc<Document>> {
        self.documents
            .iter()
            .filter(|d| d.metadata.matches_category(category))
            .cloned()
            .collect()
    }
}
