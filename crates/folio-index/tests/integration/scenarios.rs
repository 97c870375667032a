//! End-to-end scenarios over an in-memory corpus.

use folio_content::{HeaderValue, parse_document, render};
use folio_index::{DocumentIndex, WarningKind};

use crate::common::{BrokenSource, blog_corpus};

#[test]
fn test_header_body_render_scenario() {
    let content = "---\ntitle: \"A\"\ntags: [x, y]\nfeatured: true\ndraft: false\n---\n# Hi\n\nSome text.";
    let doc = parse_document(content);

    assert!(doc.is_clean());
    assert_eq!(doc.metadata.title, "A");
    assert_eq!(doc.metadata.tags, vec!["x", "y"]);
    assert!(doc.metadata.featured);
    assert!(!doc.metadata.draft);
    assert_eq!(doc.body, "# Hi\n\nSome text.");

    let html = render(doc.body);
    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains("id=\"hi\""));
    assert_eq!(html.matches("<p").count(), 1);
    assert!(html.contains("Some text.</p>"));
}

#[test]
fn test_every_value_type_round_trips() {
    let content = "---\n\
                   title: \"Quoted: with colon\"\n\
                   tags: [a, \"b\", 'c']\n\
                   featured: true\n\
                   priority: 3\n\
                   faq:\n  \
                     - question: \"Q1?\"\n    \
                       answer: \"A1.\"\n\
                   ---\n";
    let doc = parse_document(content);

    assert!(doc.is_clean());
    assert_eq!(doc.metadata.title, "Quoted: with colon");
    assert_eq!(doc.metadata.tags, vec!["a", "b", "c"]);
    assert!(doc.metadata.featured);
    assert_eq!(
        doc.metadata.extra.get("priority"),
        Some(&HeaderValue::Number(3.0))
    );
    assert_eq!(doc.metadata.faq.len(), 1);
    assert_eq!(doc.metadata.faq[0].question, "Q1?");
    assert_eq!(doc.metadata.faq[0].answer, "A1.");
}

#[test]
fn test_heading_id_is_stable() {
    let first = render("## Hello, World!");
    let second = render("## Hello, World!");
    assert_eq!(first, second);
    assert!(first.contains("id=\"hello-world\""));
}

#[test]
fn test_callout_not_blockquote() {
    let html = render("> **Pro Tip**: do X");
    assert!(!html.contains("<blockquote"));
    assert!(html.contains("Pro Tip</div>"));
    assert!(html.contains(">do X</p>"));
}

#[test]
fn test_bold_and_italic_do_not_nest() {
    let html = render("**bold** and *italic*");
    assert!(html.contains(">bold</strong> and <em"));
    assert!(html.contains(">italic</em>"));
    assert!(!html.contains("<em class=\"italic text-gray-700\"><strong"));
}

#[tokio::test]
async fn test_draft_alongside_two() {
    let source = folio_core::MemorySource::new()
        .with_document("one.md", "---\ntitle: One\ndate: 2024-01-01\n---\nOne\n")
        .with_document("two.md", "---\ntitle: Two\ndate: 2024-01-02\n---\nTwo\n")
        .with_document(
            "three.md",
            "---\ntitle: Three\ndate: 2024-01-03\ndraft: true\n---\nThree\n",
        );
    let index = DocumentIndex::new(source);

    let all = index.all().await.unwrap();
    let slugs: Vec<&str> = all.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["two", "one"]);
}

#[tokio::test]
async fn test_drafts_never_returned() {
    let index = DocumentIndex::new(blog_corpus());
    let snapshot = index.load_all().await.unwrap();

    let is_draft = |d: &std::sync::Arc<folio_index::Document>| d.slug == "unreleased";
    assert!(!snapshot.all().iter().any(is_draft));
    assert!(!snapshot.featured(10).iter().any(is_draft));
    assert!(!snapshot.related("agent-tracing", 10).iter().any(is_draft));
    assert!(index.get_by_slug("unreleased").await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_sort_and_featured_padding() {
    let index = DocumentIndex::new(blog_corpus());
    let snapshot = index.load_all().await.unwrap();

    let dated: Vec<_> = snapshot.all().iter().map(|d| d.published.unwrap()).collect();
    assert!(dated.windows(2).all(|w| w[0] >= w[1]));

    let featured = index.featured(3).await.unwrap();
    let slugs: Vec<&str> = featured.iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["agent-tracing", "eval-basics", "cost-control"]);
}

#[tokio::test]
async fn test_listing_filters() {
    let index = DocumentIndex::new(blog_corpus());
    let agents = index.by_tag("agents").await.unwrap();
    assert_eq!(agents.len(), 2);
    let guides = index.by_category("guides").await.unwrap();
    assert_eq!(guides.len(), 2);
}

#[tokio::test]
async fn test_template_excluded_and_reported() {
    let index = DocumentIndex::new(blog_corpus());
    let snapshot = index.load_all().await.unwrap();
    let stats = &snapshot.report().stats;

    assert_eq!(stats.entries_seen, 5);
    assert_eq!(stats.excluded, 1);
    assert_eq!(stats.drafts, 1);
    assert_eq!(stats.indexed, 3);
    assert!(snapshot.report().is_clean());
}

#[tokio::test]
async fn test_unparsable_date_included_last() {
    let source = folio_core::MemorySource::new()
        .with_document("later.md", "---\ndate: 2024-06-01\n---\nx\n")
        .with_document("undated.md", "---\ndate: next week\n---\nx\n")
        .with_document("earlier.md", "---\ndate: Jan 5, 2023\n---\nx\n");
    let index = DocumentIndex::new(source);
    let snapshot = index.load_all().await.unwrap();

    let slugs: Vec<&str> = snapshot.all().iter().map(|d| d.slug.as_str()).collect();
    assert_eq!(slugs, vec!["later", "earlier", "undated"]);
    assert!(matches!(
        &snapshot.report().warnings[0].kind,
        WarningKind::UnparsableDate { value } if value == "next week"
    ));
}

#[tokio::test]
async fn test_source_failure_leaves_cache_untouched() {
    let index = DocumentIndex::new(BrokenSource);
    let err = index.load_all().await.unwrap_err();
    assert!(err.to_string().contains("backing store offline"));
    assert!(index.current().await.is_none());
}
