//! Markdown body rendering.
//!
//! Rendering is a sequence of explicit passes over an intermediate block
//! list:
//!
//! 1. [`blocks::parse_blocks`] tokenizes the body into [`Block`]s
//! 2. [`blocks::cleanup`] drops blocks that would be empty
//! 3. [`html::emit`] writes one element per block, running
//!    [`inline::render_inline`] over each block's text
//!
//! Only the subset of Markdown used by the content corpus is recognized.
//! Anything else is emitted as paragraph text. Output is not sanitized;
//! bodies are trusted authored content.

pub mod blocks;
pub mod html;
pub mod inline;
pub mod toc;

pub use blocks::Block;
pub use folio_core::anchor_id as heading_id;
pub use html::{RenderOptions, Theme};
pub use toc::{DEFAULT_TOC_LEVELS, TocEntry, table_of_contents};

/// Render a body with the default options.
///
/// # Example
///
/// ```
/// use folio_content::render::render;
///
/// let html = render("## Hello\n\nSome **bold** text.");
/// assert!(html.starts_with("<h2 id=\"hello\""));
/// assert!(html.contains("<strong class=\"font-semibold text-gray-900\">bold</strong>"));
/// ```
pub fn render(body: &str) -> String {
    render_with(body, &RenderOptions::default())
}

/// Render a body with explicit options.
pub fn render_with(body: &str, options: &RenderOptions) -> String {
    let blocks = blocks::cleanup(blocks::parse_blocks(body));
    html::emit(&blocks, options)
}
