//! Header parsing and Markdown rendering for Folio documents.
//!
//! Both halves are synchronous, pure and total: they never fail and never
//! panic, whatever the input.
//!
//! # Modules
//!
//! - [`header`]: Metadata header detection and parsing
//!   - [`header::split`]: Header/body split
//!   - [`header::scan`]: Line grammar and the FAQ sub-grammar
//!   - [`header::metadata`]: Typed [`Metadata`]
//! - [`render`]: Body rendering to HTML fragments
//!   - [`render::blocks`]: Block scan and cleanup
//!   - [`render::inline`]: Inline rewrites
//!   - [`render::html`]: Emission and theming
//!   - [`render::toc`]: Table of contents
//!
//! # Example
//!
//! ```rust
//! use folio_content::{parse_document, render};
//!
//! let content = "---\ntitle: \"Hello\"\ntags: [intro]\n---\n\n## Welcome\n";
//! let doc = parse_document(content);
//! assert_eq!(doc.metadata.title, "Hello");
//!
//! let html = render(doc.body);
//! assert!(html.contains("id=\"welcome\""));
//! ```

pub mod header;
pub mod render;

mod proptests;

pub use header::{
    Diagnostic, DiagnosticKind, FaqEntry, HeaderValue, Metadata, ParsedDocument, parse_document,
};
pub use render::{RenderOptions, Theme, TocEntry, render, render_with, table_of_contents};
