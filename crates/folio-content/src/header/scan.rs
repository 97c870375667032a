//! Header line grammar.
//!
//! Each header line is `key: value`. Values are interpreted in a fixed
//! order, because the order decides the outcome for inputs such as a
//! bracketed list of quoted items:
//!
//! 1. `[a, "b", 'c']` → [`HeaderValue::List`] (items unquoted individually)
//! 2. one pair of matching quotes is stripped from anything else
//! 3. `true` / `false` → [`HeaderValue::Bool`]
//! 4. a finite number → [`HeaderValue::Number`]
//! 5. anything else → [`HeaderValue::String`]
//!
//! Typing runs after quote stripping, so `"3"` is a number and `'true'`
//! a boolean.
//!
//! Quoted strings are taken verbatim between the quotes; escapes are not
//! processed, and a comma inside a quoted list item splits the item.
//!
//! The `faq` key has its own nested-list grammar, scanned before the
//! generic one:
//!
//! ```text
//! faq:
//!   - question: "What is tracing?"
//!     answer: "Recording each step an agent takes."
//! ```

use serde::Serialize;

use super::diagnostics::{Diagnostic, DiagnosticKind};

/// The untyped value of one header line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum HeaderValue {
    /// A plain or quoted string.
    String(String),
    /// `true` or `false`.
    Bool(bool),
    /// A finite number.
    Number(f64),
    /// A bracketed, comma-separated list.
    List(Vec<String>),
}

impl HeaderValue {
    /// Get the value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a number, if it is one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the value as a list, if it is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

/// One question/answer pair from the `faq` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
}

/// A parsed `key: value` line.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderField {
    /// The key, trimmed.
    pub key: String,
    /// The interpreted value.
    pub value: HeaderValue,
    /// 1-based line number.
    pub line: usize,
}

/// Everything the header grammar extracted from a block.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedHeader {
    /// Fields in first-seen order; a repeated key keeps its first position
    /// and its last value.
    pub fields: Vec<HeaderField>,
    /// FAQ entries in source order.
    pub faq: Vec<FaqEntry>,
    /// Lines that were skipped, and why.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedHeader {
    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&HeaderValue> {
        self.fields.iter().find(|f| f.key == key).map(|f| &f.value)
    }

    fn insert(&mut self, key: &str, value: HeaderValue, line: usize) {
        match self.fields.iter_mut().find(|f| f.key == key) {
            Some(field) => {
                field.value = value;
                field.line = line;
            }
            None => self.fields.push(HeaderField {
                key: key.to_string(),
                value,
                line,
            }),
        }
    }
}

/// Strip one pair of matching double or single quotes.
fn strip_quotes(value: &str) -> Option<&str> {
    if value.len() < 2 {
        return None;
    }
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q).and_then(|v| v.strip_suffix(q)))
}

fn unquote(value: &str) -> &str {
    strip_quotes(value).unwrap_or(value)
}

fn parse_number(value: &str) -> Option<f64> {
    let plausible = value.chars().any(|c| c.is_ascii_digit())
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'));
    if !plausible {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Interpret the raw text after `key:`.
///
/// # Example
///
/// ```rust
/// use folio_content::header::{parse_value, HeaderValue};
///
/// assert_eq!(
///     parse_value(r#"["llm", 'agents']"#),
///     HeaderValue::List(vec!["llm".into(), "agents".into()])
/// );
/// assert_eq!(parse_value("\"true\""), HeaderValue::Bool(true));
/// assert_eq!(parse_value("'Hello: World'"), HeaderValue::String("Hello: World".into()));
/// assert_eq!(parse_value("42"), HeaderValue::Number(42.0));
/// assert_eq!(parse_value(" 2024-05-01 "), HeaderValue::String("2024-05-01".into()));
/// ```
pub fn parse_value(raw: &str) -> HeaderValue {
    let value = raw.trim();

    if let Some(inner) = value.strip_prefix('[').and_then(|v| v.strip_suffix(']')) {
        let items = inner
            .split(',')
            .map(|item| unquote(item.trim()))
            .filter(|item| !item.is_empty())
            .map(String::from)
            .collect();
        return HeaderValue::List(items);
    }

    let value = unquote(value);

    match value {
        "true" => HeaderValue::Bool(true),
        "false" => HeaderValue::Bool(false),
        _ => match parse_number(value) {
            Some(n) => HeaderValue::Number(n),
            None => HeaderValue::String(value.to_string()),
        },
    }
}

// ============================================================================
// FAQ sub-grammar
// ============================================================================

#[derive(Default)]
struct PendingFaq {
    question: Option<String>,
    answer: Option<String>,
    line: usize,
}

fn non_empty(value: &str) -> Option<String> {
    let value = unquote(value.trim());
    (!value.is_empty()).then(|| value.to_string())
}

fn flush_faq(pending: Option<PendingFaq>, parsed: &mut ParsedHeader) {
    let Some(pending) = pending else {
        return;
    };
    match (pending.question, pending.answer) {
        (Some(question), Some(answer)) => parsed.faq.push(FaqEntry { question, answer }),
        (question, _) => parsed.diagnostics.push(Diagnostic::at(
            pending.line,
            DiagnosticKind::IncompleteFaqEntry { question },
        )),
    }
}

/// A non-blank line that is unindented, not a list item, and has a colon
/// starts a new top-level key.
fn is_top_level_key(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty()
        && !line.starts_with(char::is_whitespace)
        && !line.starts_with('-')
        && trimmed.contains(':')
}

/// Scan the first `faq:` section, marking every line it covers as consumed.
fn scan_faq(lines: &[&str], first_line: usize, consumed: &mut [bool], parsed: &mut ParsedHeader) {
    let Some(start) = lines.iter().position(|l| l.trim() == "faq:") else {
        return;
    };
    consumed[start] = true;

    let mut pending: Option<PendingFaq> = None;

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        if is_top_level_key(line) {
            break;
        }
        consumed[idx] = true;

        let trimmed = line.trim();
        let line_no = first_line + idx;

        if let Some(rest) = trimmed.strip_prefix("- question:") {
            flush_faq(pending.take(), parsed);
            pending = Some(PendingFaq {
                question: non_empty(rest),
                answer: None,
                line: line_no,
            });
        } else if let Some(rest) = trimmed.strip_prefix("answer:") {
            match pending.as_mut() {
                Some(entry) => entry.answer = non_empty(rest),
                None => parsed
                    .diagnostics
                    .push(Diagnostic::at(line_no, DiagnosticKind::OrphanFaqAnswer)),
            }
        }
    }

    flush_faq(pending, parsed);
}

// ============================================================================
// Generic scanner
// ============================================================================

/// Parse a header block (the lines between the `---` delimiters).
///
/// Line numbers in the result are 1-based within `block`.
///
/// # Example
///
/// ```rust
/// use folio_content::header::{parse_header_block, HeaderValue};
///
/// let header = parse_header_block("title: \"Hello\"\nfeatured: true\nfaq:\n  - question: Why?\n    answer: Because.\n");
///
/// assert_eq!(header.get("title"), Some(&HeaderValue::String("Hello".into())));
/// assert_eq!(header.get("featured"), Some(&HeaderValue::Bool(true)));
/// assert_eq!(header.faq[0].answer, "Because.");
/// assert!(header.diagnostics.is_empty());
/// ```
pub fn parse_header_block(block: &str) -> ParsedHeader {
    parse_header_lines(block, 1)
}

/// Parse a header block whose first line is line `first_line` of the
/// enclosing document.
pub(crate) fn parse_header_lines(block: &str, first_line: usize) -> ParsedHeader {
    let lines: Vec<&str> = block.lines().collect();
    let mut consumed = vec![false; lines.len()];
    let mut parsed = ParsedHeader::default();

    scan_faq(&lines, first_line, &mut consumed, &mut parsed);

    for (idx, line) in lines.iter().enumerate() {
        if consumed[idx] {
            continue;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let line_no = first_line + idx;
        let Some((key, value)) = trimmed.split_once(':') else {
            parsed.diagnostics.push(Diagnostic::at(
                line_no,
                DiagnosticKind::MissingColon {
                    text: trimmed.to_string(),
                },
            ));
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            parsed
                .diagnostics
                .push(Diagnostic::at(line_no, DiagnosticKind::EmptyKey));
            continue;
        }

        // Only the nested-list form populates the FAQ.
        if key == "faq" {
            continue;
        }

        parsed.insert(key, parse_value(value), line_no);
    }

    parsed.diagnostics.sort_by_key(|d| d.line);
    parsed
}
