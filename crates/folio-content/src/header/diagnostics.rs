//! Non-fatal header diagnostics.
//!
//! Header parsing never fails. Anything it cannot interpret is skipped and
//! reported here so callers can surface it (the document index turns them
//! into load warnings).

use std::fmt;

use serde::Serialize;

/// What went wrong on a header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// `---` opened a header that was never closed; the whole input was
    /// treated as body.
    UnclosedHeader,
    /// A header line without a `:` separator.
    MissingColon {
        /// The offending line, trimmed.
        text: String,
    },
    /// A header line with nothing before the `:`.
    EmptyKey,
    /// A FAQ entry missing its question or its answer.
    IncompleteFaqEntry {
        /// The question, if one was given.
        question: Option<String>,
    },
    /// An `answer:` line with no open FAQ entry.
    OrphanFaqAnswer,
    /// A recognized key whose value has the wrong shape; the field default
    /// was used instead.
    TypeMismatch {
        /// The key.
        key: String,
        /// What the field expects.
        expected: &'static str,
    },
}

/// A diagnostic with its 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: usize,
    /// What happened.
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    pub(crate) fn at(line: usize, kind: DiagnosticKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnclosedHeader => write!(f, "header opened with --- but never closed"),
            Self::MissingColon { text } => write!(f, "expected `key: value`, found {text:?}"),
            Self::EmptyKey => write!(f, "empty key"),
            Self::IncompleteFaqEntry { question: Some(q) } => {
                write!(f, "faq entry {q:?} has no answer")
            }
            Self::IncompleteFaqEntry { question: None } => write!(f, "faq entry has no question"),
            Self::OrphanFaqAnswer => write!(f, "faq answer without a question"),
            Self::TypeMismatch { key, expected } => write!(f, "`{key}` should be {expected}"),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}
