//! Typed document metadata.

use std::collections::BTreeMap;

use serde::Serialize;

use super::diagnostics::{Diagnostic, DiagnosticKind};
use super::scan::{FaqEntry, HeaderField, HeaderValue, ParsedHeader};

/// Typed metadata for a document.
///
/// Recognized keys are converted to typed fields with best-effort defaults;
/// unrecognized keys are kept in [`extra`](Self::extra) without
/// interpretation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    /// Document title.
    pub title: String,
    /// Short summary for listings.
    pub description: String,
    /// Author name.
    pub author: String,
    /// The author's role or title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_role: Option<String>,
    /// Name of the reviewer, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    /// Publication date as written in the header.
    pub date: String,
    /// Last-updated date as written in the header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    /// Category name.
    pub category: String,
    /// Cover image reference.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    /// Listed among featured documents.
    pub featured: bool,
    /// Excluded from the index.
    pub draft: bool,
    /// Always a list: a scalar becomes one tag, absence becomes none.
    pub tags: Vec<String>,
    /// Question/answer pairs from the `faq` section.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub faq: Vec<FaqEntry>,
    /// Unrecognized keys.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, HeaderValue>,
}

fn mismatch(field: &HeaderField, expected: &'static str) -> Diagnostic {
    Diagnostic::at(
        field.line,
        DiagnosticKind::TypeMismatch {
            key: field.key.clone(),
            expected,
        },
    )
}

fn to_text(field: &HeaderField, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
    match &field.value {
        HeaderValue::String(s) => Some(s.clone()),
        HeaderValue::Number(n) => Some(n.to_string()),
        HeaderValue::Bool(b) => Some(b.to_string()),
        HeaderValue::List(_) => {
            diagnostics.push(mismatch(field, "a string"));
            None
        }
    }
}

fn to_optional_text(field: &HeaderField, diagnostics: &mut Vec<Diagnostic>) -> Option<String> {
    to_text(field, diagnostics).filter(|s| !s.is_empty())
}

fn to_flag(field: &HeaderField, diagnostics: &mut Vec<Diagnostic>) -> bool {
    match &field.value {
        HeaderValue::Bool(b) => *b,
        _ => {
            diagnostics.push(mismatch(field, "a boolean"));
            false
        }
    }
}

fn to_tags(field: &HeaderField, diagnostics: &mut Vec<Diagnostic>) -> Vec<String> {
    match &field.value {
        HeaderValue::List(items) => items.clone(),
        HeaderValue::String(s) if s.is_empty() => Vec::new(),
        HeaderValue::String(s) => vec![s.clone()],
        HeaderValue::Number(n) => vec![n.to_string()],
        HeaderValue::Bool(_) => {
            diagnostics.push(mismatch(field, "a list of strings"));
            Vec::new()
        }
    }
}

impl Metadata {
    /// Build typed metadata from a parsed header.
    ///
    /// Conversion problems are appended to `diagnostics`; the affected field
    /// keeps its default.
    pub fn from_fields(header: &ParsedHeader, diagnostics: &mut Vec<Diagnostic>) -> Self {
        let mut meta = Self {
            faq: header.faq.clone(),
            ..Self::default()
        };

        for field in &header.fields {
            match field.key.as_str() {
                "title" => meta.title = to_text(field, diagnostics).unwrap_or_default(),
                "description" => meta.description = to_text(field, diagnostics).unwrap_or_default(),
                "author" => meta.author = to_text(field, diagnostics).unwrap_or_default(),
                "date" => meta.date = to_text(field, diagnostics).unwrap_or_default(),
                "category" => meta.category = to_text(field, diagnostics).unwrap_or_default(),
                "authorRole" => meta.author_role = to_optional_text(field, diagnostics),
                "reviewedBy" => meta.reviewed_by = to_optional_text(field, diagnostics),
                "updated" => meta.updated = to_optional_text(field, diagnostics),
                "cover" => meta.cover = to_optional_text(field, diagnostics),
                "featured" => meta.featured = to_flag(field, diagnostics),
                "draft" => meta.draft = to_flag(field, diagnostics),
                "tags" => meta.tags = to_tags(field, diagnostics),
                _ => {
                    meta.extra.insert(field.key.clone(), field.value.clone());
                }
            }
        }

        meta
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Case-insensitive category match.
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.eq_ignore_ascii_case(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::scan::parse_header_block;

    fn metadata(block: &str) -> (Metadata, Vec<Diagnostic>) {
        let header = parse_header_block(block);
        let mut diagnostics = header.diagnostics.clone();
        let meta = Metadata::from_fields(&header, &mut diagnostics);
        (meta, diagnostics)
    }

    #[test]
    fn test_all_recognized_fields() {
        let (meta, diags) = metadata(
            "title: \"Tracing Agents\"\n\
             description: How to trace\n\
             author: Dana\n\
             authorRole: Staff Engineer\n\
             reviewedBy: Sam\n\
             date: 2024-03-01\n\
             updated: 2024-04-01\n\
             category: guides\n\
             cover: /img/cover.png\n\
             featured: true\n\
             draft: false\n\
             tags: [tracing, llm]\n",
        );

        assert!(diags.is_empty());
        assert_eq!(meta.title, "Tracing Agents");
        assert_eq!(meta.description, "How to trace");
        assert_eq!(meta.author, "Dana");
        assert_eq!(meta.author_role.as_deref(), Some("Staff Engineer"));
        assert_eq!(meta.reviewed_by.as_deref(), Some("Sam"));
        assert_eq!(meta.date, "2024-03-01");
        assert_eq!(meta.updated.as_deref(), Some("2024-04-01"));
        assert_eq!(meta.category, "guides");
        assert_eq!(meta.cover.as_deref(), Some("/img/cover.png"));
        assert!(meta.featured);
        assert!(!meta.draft);
        assert_eq!(meta.tags, vec!["tracing", "llm"]);
        assert!(meta.extra.is_empty());
    }

    #[test]
    fn test_defaults_when_absent() {
        let (meta, diags) = metadata("");
        assert!(diags.is_empty());
        assert_eq!(meta, Metadata::default());
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_scalar_tag_becomes_list() {
        let (meta, _) = metadata("tags: solo\n");
        assert_eq!(meta.tags, vec!["solo"]);
    }

    #[test]
    fn test_empty_tags_becomes_empty_list() {
        let (meta, _) = metadata("tags:\n");
        assert!(meta.tags.is_empty());
    }

    #[test]
    fn test_numeric_title_coerced() {
        let (meta, diags) = metadata("title: 2024\n");
        assert_eq!(meta.title, "2024");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_list_title_is_mismatch() {
        let (meta, diags) = metadata("title: [a, b]\n");
        assert_eq!(meta.title, "");
        assert_eq!(
            diags[0].kind,
            DiagnosticKind::TypeMismatch {
                key: "title".into(),
                expected: "a string"
            }
        );
    }

    #[test]
    fn test_quoted_flag_accepted() {
        let (meta, diags) = metadata("draft: \"true\"\n");
        assert!(meta.draft);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_bad_flag_defaults_false() {
        let (meta, diags) = metadata("featured: yes\n");
        assert!(!meta.featured);
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].line, 1);
    }

    #[test]
    fn test_empty_optional_is_none() {
        let (meta, _) = metadata("cover: \"\"\n");
        assert!(meta.cover.is_none());
    }

    #[test]
    fn test_unknown_keys_preserved() {
        let (meta, _) = metadata("canonical: https://example.com/a\npriority: 3\n");
        assert_eq!(
            meta.extra.get("canonical"),
            Some(&HeaderValue::String("https://example.com/a".into()))
        );
        assert_eq!(meta.extra.get("priority"), Some(&HeaderValue::Number(3.0)));
    }

    #[test]
    fn test_unknown_quoted_scalars_typed() {
        let (meta, _) = metadata("priority: \"3\"\npinned: 'true'\nlabel: \"beta\"\n");
        assert_eq!(meta.extra.get("priority"), Some(&HeaderValue::Number(3.0)));
        assert_eq!(meta.extra.get("pinned"), Some(&HeaderValue::Bool(true)));
        assert_eq!(
            meta.extra.get("label"),
            Some(&HeaderValue::String("beta".into()))
        );
    }

    #[test]
    fn test_faq_carried_over() {
        let (meta, _) = metadata("faq:\n  - question: Q?\n    answer: A.\n");
        assert_eq!(meta.faq.len(), 1);
    }

    #[test]
    fn test_tag_and_category_matching() {
        let (meta, _) = metadata("category: Guides\ntags: [LLM, tracing]\n");
        assert!(meta.has_tag("llm"));
        assert!(!meta.has_tag("rust"));
        assert!(meta.matches_category("guides"));
    }

    #[test]
    fn test_serialize_camel_case() {
        let (meta, _) = metadata("title: A\nauthorRole: CTO\n");
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["authorRole"], "CTO");
        assert!(json.get("reviewedBy").is_none());
        assert!(json.get("faq").is_none());
        assert_eq!(json["tags"], serde_json::json!([]));
    }
}
