//! Header block detection.
//!
//! A header is a block of lines at the very start of a document, delimited
//! by lines consisting solely of `---`:
//!
//! ```markdown
//! ---
//! title: "Tracing LLM Agents"
//! tags: [observability, agents]
//! ---
//!
//! # Document Content
//! ```
//!
//! Detection is line based. Trailing whitespace on a delimiter line is
//! ignored, so `---  ` and `---\r` both count.

/// Result of splitting a document into header block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderSplit<'a> {
    /// Raw header lines between the delimiters, if a closed header was found.
    block: Option<&'a str>,
    /// Body content after the closing delimiter (or the whole input).
    body: &'a str,
    /// An opening delimiter was found without a matching closing one.
    unclosed: bool,
}

impl<'a> HeaderSplit<'a> {
    fn with_header(block: &'a str, body: &'a str) -> Self {
        Self {
            block: Some(block),
            body,
            unclosed: false,
        }
    }

    fn without_header(body: &'a str) -> Self {
        Self {
            block: None,
            body,
            unclosed: false,
        }
    }

    fn unclosed(body: &'a str) -> Self {
        Self {
            block: None,
            body,
            unclosed: true,
        }
    }

    /// Check if a closed header block was found.
    pub fn has_header(&self) -> bool {
        self.block.is_some()
    }

    /// Check if an opening delimiter had no closing delimiter.
    pub fn is_unclosed(&self) -> bool {
        self.unclosed
    }

    /// The raw header block (without delimiters), if present.
    pub fn block(&self) -> Option<&'a str> {
        self.block
    }

    /// The body content (everything after the header).
    pub fn body(&self) -> &'a str {
        self.body
    }
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Split a document into its header block and body.
///
/// # Behavior
///
/// - First line is not `---`: no header, the whole input is the body
/// - `---` opens but never closes: no header, the whole input is the body,
///   [`HeaderSplit::is_unclosed`] is `true`
/// - Otherwise: the lines between the delimiters are the block and the body
///   starts on the line after the closing delimiter
///
/// # Example
///
/// ```rust
/// use folio_content::header::split_header;
///
/// let split = split_header("---\ntitle: Test\n---\n\n# Heading");
/// assert_eq!(split.block(), Some("title: Test\n"));
/// assert_eq!(split.body(), "\n# Heading");
///
/// let split = split_header("# Just Markdown");
/// assert!(!split.has_header());
/// assert_eq!(split.body(), "# Just Markdown");
/// ```
pub fn split_header(content: &str) -> HeaderSplit<'_> {
    let mut lines = content.split_inclusive('\n');

    let block_start = match lines.next() {
        Some(first) if is_delimiter(first) => first.len(),
        _ => return HeaderSplit::without_header(content),
    };

    let mut offset = block_start;

    for line in lines {
        let line_end = offset + line.len();
        if is_delimiter(line) {
            return HeaderSplit::with_header(&content[block_start..offset], &content[line_end..]);
        }
        offset = line_end;
    }

    log::debug!("Header opening delimiter found but no closing delimiter");
    HeaderSplit::unclosed(content)
}
