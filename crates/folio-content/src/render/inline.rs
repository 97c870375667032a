//! Inline rewrites.
//!
//! Applied to the text of every block in a fixed order: bold, italic, code,
//! links. Bold runs first so `**x**` is never read as two italics.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::html::{Theme, open_tag};

static BOLD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("Invalid bold regex"));

static ITALIC_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*([^*]+)\*").expect("Invalid italic regex"));

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").expect("Invalid code regex"));

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("Invalid link regex"));

fn wrap(re: &Regex, text: &str, tag: &str, class: &str) -> String {
    re.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{}</{tag}>", open_tag(tag, class, None), &caps[1])
    })
    .into_owned()
}

/// Rewrite inline markup in `text` to HTML.
///
/// # Example
///
/// ```
/// use folio_content::render::{inline::render_inline, Theme};
///
/// let html = render_inline("**bold** and *soft*", &Theme::unstyled());
/// assert_eq!(html, "<strong>bold</strong> and <em>soft</em>");
/// ```
pub fn render_inline(text: &str, theme: &Theme) -> String {
    let text = wrap(&BOLD_RE, text, "strong", &theme.strong);
    let text = wrap(&ITALIC_RE, &text, "em", &theme.emphasis);
    let text = wrap(&CODE_RE, &text, "code", &theme.code);
    LINK_RE
        .replace_all(&text, |caps: &Captures<'_>| {
            format!(
                "{}{}</a>",
                open_tag("a", &theme.link, Some(("href", &caps[2]))),
                &caps[1]
            )
        })
        .into_owned()
}

/// Remove inline markup, keeping the text it wraps.
///
/// Link targets are dropped; only the link text remains.
pub fn strip_inline(text: &str) -> String {
    let text = BOLD_RE.replace_all(text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = CODE_RE.replace_all(&text, "$1");
    LINK_RE.replace_all(&text, "$1").into_owned()
}
