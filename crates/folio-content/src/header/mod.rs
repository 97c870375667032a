//! Document header parsing.
//!
//! A document is an optional metadata header followed by a Markdown body.
//! [`parse_document`] splits the two, scans the header with the restricted
//! grammar described in [`scan`], and converts the result into typed
//! [`Metadata`]. It never fails: problems become [`Diagnostic`]s.

pub mod diagnostics;
pub mod metadata;
pub mod scan;
pub mod split;

pub use diagnostics::{Diagnostic, DiagnosticKind};
pub use metadata::Metadata;
pub use scan::{FaqEntry, HeaderField, HeaderValue, ParsedHeader, parse_header_block, parse_value};
pub use split::{HeaderSplit, split_header};

/// A document split into typed metadata and its raw body.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument<'a> {
    /// Typed metadata; defaults when the document has no header.
    pub metadata: Metadata,
    /// Everything after the header, untouched.
    pub body: &'a str,
    /// Everything the parser skipped or coerced, in line order.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDocument<'_> {
    /// Whether the document parsed without any diagnostic.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Parse a complete document.
///
/// Line numbers in diagnostics refer to the whole document, so the first
/// header line is line 2.
///
/// # Example
///
/// ```
/// use folio_content::header::parse_document;
///
/// let doc = parse_document("---\ntitle: Hi\ntags: [a, b]\n---\n# Body\n");
/// assert_eq!(doc.metadata.title, "Hi");
/// assert_eq!(doc.metadata.tags, vec!["a", "b"]);
/// assert_eq!(doc.body, "# Body\n");
/// ```
pub fn parse_document(content: &str) -> ParsedDocument<'_> {
    let split = split_header(content);

    if split.is_unclosed() {
        return ParsedDocument {
            metadata: Metadata::default(),
            body: split.body(),
            diagnostics: vec![Diagnostic::at(1, DiagnosticKind::UnclosedHeader)],
        };
    }

    let Some(block) = split.block() else {
        return ParsedDocument {
            metadata: Metadata::default(),
            body: split.body(),
            diagnostics: Vec::new(),
        };
    };

    let header = scan::parse_header_lines(block, 2);
    let mut diagnostics = header.diagnostics.clone();
    let metadata = Metadata::from_fields(&header, &mut diagnostics);
    diagnostics.sort_by_key(|d| d.line);

    for diagnostic in &diagnostics {
        log::debug!("Header diagnostic: {diagnostic}");
    }

    ParsedDocument {
        metadata,
        body: split.body(),
        diagnostics,
    }
}
