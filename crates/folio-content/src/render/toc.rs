//! Table of contents extraction.

use serde::Serialize;

use super::blocks::{Block, parse_blocks};
use super::inline::strip_inline;

/// Heading levels listed when none are given.
pub const DEFAULT_TOC_LEVELS: &[u8] = &[2];

/// One table of contents entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    /// Anchor id, identical to the rendered heading's `id`.
    pub id: String,
    /// Heading text with inline markup removed.
    pub title: String,
    /// Heading level, `1` to `4`.
    pub level: u8,
}

/// Collect headings at the given levels, in document order.
///
/// Headings with an empty id or title are skipped.
///
/// # Example
///
/// ```
/// use folio_content::render::toc::{table_of_contents, DEFAULT_TOC_LEVELS};
///
/// let toc = table_of_contents("# Top\n## First **Step**\n### Detail\n", DEFAULT_TOC_LEVELS);
/// assert_eq!(toc.len(), 1);
/// assert_eq!(toc[0].id, "first-step");
/// assert_eq!(toc[0].title, "First Step");
/// ```
pub fn table_of_contents(body: &str, levels: &[u8]) -> Vec<TocEntry> {
    parse_blocks(body)
        .into_iter()
        .filter_map(|block| match block {
            Block::Heading { level, id, text } if levels.contains(&level) => {
                let title = strip_inline(&text).trim().to_string();
                (!id.is_empty() && !title.is_empty()).then_some(TocEntry { id, title, level })
            }
            _ => None,
        })
        .collect()
}
