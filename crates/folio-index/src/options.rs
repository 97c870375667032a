//! Index build options.

/// Default reading speed for read time estimates.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 200;

/// Options controlling how a snapshot is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOptions {
    /// Entries whose identifier contains any of these substrings are
    /// skipped before parsing.
    pub exclude_markers: Vec<String>,
    /// Reading speed used for read time estimates.
    pub words_per_minute: u32,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            exclude_markers: vec!["template".to_string()],
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

impl IndexOptions {
    /// Replace the exclude markers.
    pub fn with_exclude_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the reading speed.
    pub fn with_words_per_minute(mut self, wpm: u32) -> Self {
        self.words_per_minute = wpm;
        self
    }

    /// Whether an identifier matches an exclude marker.
    pub fn is_excluded(&self, identifier: &str) -> bool {
        self.exclude_markers
            .iter()
            .any(|m| !m.is_empty() && identifier.contains(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = IndexOptions::default();
        assert_eq!(opts.exclude_markers, vec!["template"]);
        assert_eq!(opts.words_per_minute, 200);
    }

    #[test]
    fn test_is_excluded() {
        let opts = IndexOptions::default();
        assert!(opts.is_excluded("blog/post-template.md"));
        assert!(!opts.is_excluded("blog/post.md"));
    }

    #[test]
    fn test_empty_marker_never_matches() {
        let opts = IndexOptions::default().with_exclude_markers([""]);
        assert!(!opts.is_excluded("anything.md"));
    }

    #[test]
    fn test_builders() {
        let opts = IndexOptions::default()
            .with_exclude_markers(["wip", "_draft"])
            .with_words_per_minute(250);
        assert!(opts.is_excluded("notes_draft.md"));
        assert_eq!(opts.words_per_minute, 250);
    }
}
