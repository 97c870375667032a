//! Indexed document representation.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

use folio_content::Metadata;

/// Estimated reading time in whole minutes, never less than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReadTime(u32);

impl ReadTime {
    /// Reading time for `words` words at `words_per_minute`.
    ///
    /// A rate of zero is treated as one word per minute.
    pub fn from_words(words: usize, words_per_minute: u32) -> Self {
        let wpm = u64::from(words_per_minute.max(1));
        let minutes = (words as u64).div_ceil(wpm).max(1);
        Self(u32::try_from(minutes).unwrap_or(u32::MAX))
    }

    /// Whole minutes.
    pub fn minutes(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ReadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} min read", self.0)
    }
}

impl Serialize for ReadTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Count whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// A document as held by the index.
///
/// Serializes as the flattened metadata plus `slug`, `readTime`, `content`
/// and, when the date parsed, `published`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// URL slug derived from the identifier.
    pub slug: String,
    /// Identifier the source produced this document under.
    #[serde(skip)]
    pub identifier: String,
    /// Typed header fields.
    #[serde(flatten)]
    pub metadata: Metadata,
    /// Estimated reading time of the body.
    pub read_time: ReadTime,
    /// Raw Markdown body.
    #[serde(rename = "content")]
    pub body: String,
    /// Parsed `date`, when it is in a supported format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDateTime>,
}

impl Document {
    /// The document title.
    pub fn title(&self) -> &str {
        &self.metadata.title
    }

    /// Whether the document is marked featured.
    pub fn is_featured(&self) -> bool {
        self.metadata.featured
    }
}
