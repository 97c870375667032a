//! Identifier utilities.
//!
//! Provides the two identifier derivations the pipeline relies on:
//! document slugs (from a source identifier) and heading anchor ids (from
//! heading text). Both are pure and deterministic so that consumers can
//! recompute them independently (e.g. a table of contents linking to
//! rendered headings).

/// Derive a document slug from a source identifier.
///
/// Takes the last path segment (either `/` or `\` separated) and strips the
/// final extension. The slug is not case-normalized: `My-Post.md` yields
/// `My-Post`. Returns `None` if nothing remains.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::slug_from_identifier;
///
/// assert_eq!(
///     slug_from_identifier("/content/blog/agent-tracing.md"),
///     Some("agent-tracing".to_string())
/// );
/// assert_eq!(slug_from_identifier("notes.draft.md"), Some("notes.draft".to_string()));
/// assert_eq!(slug_from_identifier("README"), Some("README".to_string()));
/// assert_eq!(slug_from_identifier("content/"), None);
/// ```
pub fn slug_from_identifier(identifier: &str) -> Option<String> {
    let name = identifier.rsplit(['/', '\\']).next().unwrap_or(identifier);

    let stem = match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem,
        _ => name,
    };

    let stem = stem.trim();
    if stem.is_empty() {
        None
    } else {
        Some(stem.to_string())
    }
}

/// Compute the anchor id for a heading.
///
/// Performs the following transformations:
/// 1. Converts to lowercase
/// 2. Replaces every run of characters outside `[a-z0-9]` with one hyphen
/// 3. Trims leading/trailing hyphens
///
/// Identical text always yields identical ids; no de-duplication is done.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::anchor_id;
///
/// assert_eq!(anchor_id("Hello, World!"), "hello-world");
/// assert_eq!(anchor_id("  Why OpenTelemetry?  "), "why-opentelemetry");
/// assert_eq!(anchor_id("Step 2: Ship it"), "step-2-ship-it");
/// assert_eq!(anchor_id("!!!"), "");
/// ```
pub fn anchor_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !id.is_empty() {
                id.push('-');
            }
            pending_hyphen = false;
            id.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    id
}
