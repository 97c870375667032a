//! HTML emission.

use super::blocks::Block;
use super::inline::render_inline;

const CALLOUT_LAYOUT: &str = "flex items-start gap-3";

const CALLOUT_ICON: &str = r#"<svg class="w-3 h-3 text-white" fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M18 10a8 8 0 11-16 0 8 8 0 0116 0zm-7-4a1 1 0 11-2 0 1 1 0 012 0zM9 9a1 1 0 000 2v3a1 1 0 001 1h1a1 1 0 100-2v-3a1 1 0 00-1-1H9z" clip-rule="evenodd" /></svg>"#;

/// CSS classes applied to each emitted element.
///
/// The default reproduces the site's Tailwind styling. An empty class
/// string omits the `class` attribute entirely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Classes for `h1` through `h4`.
    pub headings: [String; 4],
    /// Classes for `p`.
    pub paragraph: String,
    /// Classes for `ul`.
    pub list: String,
    /// Classes for `li`.
    pub list_item: String,
    /// Classes for `blockquote`.
    pub quote: String,
    /// Classes for `strong`.
    pub strong: String,
    /// Classes for `em`.
    pub emphasis: String,
    /// Classes for inline `code`.
    pub code: String,
    /// Classes for `a`.
    pub link: String,
    /// Classes for the callout container.
    pub callout: String,
    /// Classes for the round icon badge of a callout.
    pub callout_icon: String,
    /// Classes for the callout label line.
    pub callout_label: String,
    /// Classes for the callout text.
    pub callout_text: String,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            headings: [
                "text-4xl font-bold text-gray-900 mb-6 mt-8".into(),
                "text-3xl font-bold text-gray-900 mb-4 mt-8".into(),
                "text-2xl font-semibold text-gray-900 mb-3 mt-6".into(),
                "text-xl font-semibold text-gray-900 mb-2 mt-4".into(),
            ],
            paragraph: "mb-4 leading-relaxed text-gray-700".into(),
            list: "list-disc list-inside mb-4 space-y-2 ml-4".into(),
            list_item: "ml-4 mb-2 text-gray-700".into(),
            quote: "border-l-4 border-cyan-500 pl-4 py-2 my-4 italic text-gray-600 bg-gray-50 rounded-r"
                .into(),
            strong: "font-semibold text-gray-900".into(),
            emphasis: "italic text-gray-700".into(),
            code: "px-1.5 py-0.5 bg-gray-100 text-cyan-700 rounded text-sm font-mono".into(),
            link: "text-cyan-600 hover:text-cyan-700 underline underline-offset-2".into(),
            callout: "bg-cyan-50 border-l-4 border-cyan-500 p-4 rounded-r-lg my-6".into(),
            callout_icon: "w-6 h-6 bg-cyan-500 rounded-full flex items-center justify-center flex-shrink-0 mt-1"
                .into(),
            callout_label: "text-sm font-semibold text-cyan-700 mb-1".into(),
            callout_text: "text-gray-700".into(),
        }
    }
}

impl Theme {
    /// A theme with no classes at all.
    pub fn unstyled() -> Self {
        Self {
            headings: Default::default(),
            paragraph: String::new(),
            list: String::new(),
            list_item: String::new(),
            quote: String::new(),
            strong: String::new(),
            emphasis: String::new(),
            code: String::new(),
            link: String::new(),
            callout: String::new(),
            callout_icon: String::new(),
            callout_label: String::new(),
            callout_text: String::new(),
        }
    }

    /// Classes for a heading level, clamped to `1..=4`.
    pub fn heading(&self, level: u8) -> &str {
        let idx = usize::from(level.clamp(1, 4)) - 1;
        &self.headings[idx]
    }
}

/// Options for [`render_with`](super::render_with).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Element classes.
    pub theme: Theme,
    /// Label shown on every callout, whatever the author wrote.
    pub callout_label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            callout_label: "Pro Tip".to_string(),
        }
    }
}

impl RenderOptions {
    /// Use a different theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Use a different callout label.
    pub fn with_callout_label(mut self, label: impl Into<String>) -> Self {
        self.callout_label = label.into();
        self
    }
}

/// Opening tag with an optional leading attribute and a class.
pub(crate) fn open_tag(tag: &str, class: &str, attr: Option<(&str, &str)>) -> String {
    let mut out = format!("<{tag}");
    if let Some((name, value)) = attr {
        out.push_str(&format!(" {name}=\"{value}\""));
    }
    if !class.is_empty() {
        out.push_str(&format!(" class=\"{class}\""));
    }
    out.push('>');
    out
}

fn emit_block(block: &Block, options: &RenderOptions) -> String {
    let theme = &options.theme;
    match block {
        Block::Heading { level, id, text } => format!(
            "{}{}</h{level}>",
            open_tag(&format!("h{level}"), theme.heading(*level), Some(("id", id))),
            render_inline(text, theme)
        ),
        Block::Paragraph { text } => format!(
            "{}{}</p>",
            open_tag("p", &theme.paragraph, None),
            render_inline(text, theme)
        ),
        Block::List { items } => {
            let mut out = open_tag("ul", &theme.list, None);
            for item in items {
                out.push_str(&open_tag("li", &theme.list_item, None));
                out.push_str(&render_inline(item, theme));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
            out
        }
        Block::Quote { text } => format!(
            "{}{}</blockquote>",
            open_tag("blockquote", &theme.quote, None),
            render_inline(text, theme)
        ),
        Block::Callout { text } => format!(
            "{}{}{}{CALLOUT_ICON}</div><div>{}{}</div>{}{}</p></div></div></div>",
            open_tag("div", &theme.callout, None),
            open_tag("div", CALLOUT_LAYOUT, None),
            open_tag("div", &theme.callout_icon, None),
            open_tag("div", &theme.callout_label, None),
            options.callout_label,
            open_tag("p", &theme.callout_text, None),
            render_inline(text, theme)
        ),
        Block::Raw { html } => html.clone(),
    }
}

/// Emit HTML for a block list, one element per block, joined with `\n`.
pub fn emit(blocks: &[Block], options: &RenderOptions) -> String {
    blocks
        .iter()
        .map(|block| emit_block(block, options))
        .collect::<Vec<_>>()
        .join("\n")
}
