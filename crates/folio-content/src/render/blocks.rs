//! Block scanning.
//!
//! The body is tokenized line by line into a flat list of [`Block`]s. Each
//! line is classified with this precedence:
//!
//! 1. callout: `> **Label**: text`
//! 2. blockquote: any line whose trimmed form starts with `>`
//! 3. heading: one to four `#` followed by a space
//! 4. list item: `- text` or `1. text` at column 0
//! 5. raw HTML: a line opening a block-level tag
//! 6. blank line
//! 7. paragraph text
//!
//! Consecutive paragraph lines, list items and quoted lines each form a
//! single block. Any other kind of line ends the open run.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use folio_core::anchor_id;

static CALLOUT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^> \*\*(.*?)\*\*:(?:[ \t]+(.*))?$").expect("Invalid callout regex")
});

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,4}) (.*)$").expect("Invalid heading regex"));

static LIST_ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:-|\d+\.) (.*)$").expect("Invalid list item regex"));

static RAW_HTML_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^<(?:div|p|ul|ol|li|blockquote|h[1-6]|table|pre|hr|section|figure|details)(?:[\s>/]|$)",
    )
    .expect("Invalid raw HTML regex")
});

/// One block of the rendered body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// `#` through `####`.
    Heading { level: u8, id: String, text: String },
    /// Consecutive text lines, joined with `\n`.
    Paragraph { text: String },
    /// Consecutive list items. Ordered and unordered items are not
    /// distinguished.
    List { items: Vec<String> },
    /// Consecutive quoted lines, joined with a space.
    Quote { text: String },
    /// A highlighted tip. The authored label is not kept; the renderer
    /// supplies its own.
    Callout { text: String },
    /// A line of block-level HTML, passed through unchanged.
    Raw { html: String },
}

#[derive(Debug, Default)]
enum Run {
    #[default]
    Idle,
    Paragraph(Vec<String>),
    List(Vec<String>),
    Quote(Vec<String>),
}

#[derive(Debug, Default)]
struct Scanner {
    blocks: Vec<Block>,
    run: Run,
}

impl Scanner {
    fn flush(&mut self) {
        match std::mem::take(&mut self.run) {
            Run::Idle => {}
            Run::Paragraph(lines) => self.blocks.push(Block::Paragraph {
                text: lines.join("\n"),
            }),
            Run::List(items) => self.blocks.push(Block::List { items }),
            Run::Quote(parts) => self.blocks.push(Block::Quote {
                text: parts.join(" "),
            }),
        }
    }

    fn emit(&mut self, block: Block) {
        self.flush();
        self.blocks.push(block);
    }

    fn push_paragraph(&mut self, line: &str) {
        if let Run::Paragraph(lines) = &mut self.run {
            lines.push(line.to_string());
        } else {
            self.flush();
            self.run = Run::Paragraph(vec![line.to_string()]);
        }
    }

    fn push_list_item(&mut self, item: &str) {
        if let Run::List(items) = &mut self.run {
            items.push(item.to_string());
        } else {
            self.flush();
            self.run = Run::List(vec![item.to_string()]);
        }
    }

    fn push_quote(&mut self, text: &str) {
        if let Run::Quote(parts) = &mut self.run {
            parts.push(text.to_string());
        } else {
            self.flush();
            self.run = Run::Quote(vec![text.to_string()]);
        }
    }

    fn line(&mut self, line: &str) {
        let trimmed = line.trim();

        if let Some(caps) = CALLOUT_RE.captures(line) {
            let text = caps.get(2).map_or("", |m| m.as_str()).trim();
            self.emit(Block::Callout {
                text: text.to_string(),
            });
        } else if let Some(quoted) = trimmed.strip_prefix('>') {
            let quoted = quoted.trim();
            if quoted.is_empty() {
                self.flush();
            } else {
                self.push_quote(quoted);
            }
        } else if let Some(caps) = HEADING_RE.captures(line) {
            let text = caps[2].trim();
            self.emit(Block::Heading {
                level: caps[1].len() as u8,
                id: anchor_id(text),
                text: text.to_string(),
            });
        } else if let Some(caps) = LIST_ITEM_RE.captures(line) {
            self.push_list_item(caps[1].trim());
        } else if RAW_HTML_RE.is_match(line) {
            self.emit(Block::Raw {
                html: line.to_string(),
            });
        } else if trimmed.is_empty() {
            self.flush();
        } else {
            self.push_paragraph(trimmed);
        }
    }
}

/// Tokenize a body into blocks.
///
/// # Example
///
/// ```
/// use folio_content::render::blocks::{parse_blocks, Block};
///
/// let blocks = parse_blocks("## Setup\n\nInstall it.\nThen run it.\n");
/// assert_eq!(blocks.len(), 2);
/// assert!(matches!(&blocks[0], Block::Heading { level: 2, id, .. } if id == "setup"));
/// assert_eq!(blocks[1], Block::Paragraph { text: "Install it.\nThen run it.".into() });
/// ```
pub fn parse_blocks(body: &str) -> Vec<Block> {
    let mut scanner = Scanner::default();
    for line in body.lines() {
        scanner.line(line);
    }
    scanner.flush();
    scanner.blocks
}

/// Drop blocks that would render as empty elements.
pub fn cleanup(blocks: Vec<Block>) -> Vec<Block> {
    blocks
        .into_iter()
        .filter_map(|block| match block {
            Block::Paragraph { text } | Block::Quote { text } if text.trim().is_empty() => None,
            Block::List { items } => {
                let items: Vec<String> = items.into_iter().filter(|i| !i.is_empty()).collect();
                (!items.is_empty()).then_some(Block::List { items })
            }
            other => Some(other),
        })
        .collect()
}
