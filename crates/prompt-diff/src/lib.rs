//! Visual diff between an original and an edited prompt string.
//!
//! Produces the span sequence a UI iterates over to highlight what the
//! optimizer changed, plus a ready-to-render HTML form. Word-level diffing
//! keeps the output readable for prose prompts; character diffs degenerate
//! into confetti on natural language.

use serde::Serialize;
use similar::{ChangeTag, TextDiff};

/// How a span relates the edited text to the original.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Equal,
    Insert,
    Delete,
}

impl From<ChangeTag> for SpanKind {
    fn from(tag: ChangeTag) -> Self {
        match tag {
            ChangeTag::Equal => SpanKind::Equal,
            ChangeTag::Insert => SpanKind::Insert,
            ChangeTag::Delete => SpanKind::Delete,
        }
    }
}

/// One run of text sharing a single diff tag. Adjacent runs with the same
/// tag are merged, so consumers never see two consecutive spans of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffSpan {
    pub kind: SpanKind,
    pub text: String,
}

/// Computes the word-level diff between `original` and `edited`.
///
/// Concatenating the Equal and Delete spans reproduces `original`;
/// Equal and Insert spans reproduce `edited`.
pub fn diff_spans(original: &str, edited: &str) -> Vec<DiffSpan> {
    let diff = TextDiff::from_words(original, edited);

    let mut spans: Vec<DiffSpan> = Vec::new();
    for change in diff.iter_all_changes() {
        let kind = SpanKind::from(change.tag());
        match spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(change.value()),
            _ => spans.push(DiffSpan {
                kind,
                text: change.value().to_string(),
            }),
        }
    }
    spans
}

/// Renders the diff as safe HTML: `<span>` for unchanged text, `<ins>` for
/// additions, `<del>` for removals. Newlines are rendered visibly as a
/// pilcrow plus `<br>`, matching the classic diff presentation.
pub fn diff_html(original: &str, edited: &str) -> String {
    let mut html = String::new();
    for span in diff_spans(original, edited) {
        let text = escape_html(&span.text);
        match span.kind {
            SpanKind::Equal => {
                html.push_str("<span>");
                html.push_str(&text);
                html.push_str("</span>");
            }
            SpanKind::Insert => {
                html.push_str("<ins style=\"background:#e6ffe6;\">");
                html.push_str(&text);
                html.push_str("</ins>");
            }
            SpanKind::Delete => {
                html.push_str("<del style=\"background:#ffe6e6;\">");
                html.push_str(&text);
                html.push_str("</del>");
            }
        }
    }
    html
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("&para;<br>"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(spans: &[DiffSpan], keep: SpanKind) -> String {
        spans
            .iter()
            .filter(|s| s.kind == SpanKind::Equal || s.kind == keep)
            .map(|s| s.text.as_str())
            .collect()
    }

    #[test]
    fn test_identical_inputs_yield_single_equal_span() {
        let spans = diff_spans("escreva um poema", "escreva um poema");
        assert_eq!(
            spans,
            vec![DiffSpan {
                kind: SpanKind::Equal,
                text: "escreva um poema".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_inputs_yield_no_spans() {
        assert!(diff_spans("", "").is_empty());
    }

    #[test]
    fn test_insertion_only_diff() {
        let spans = diff_spans("olá mundo", "olá belo mundo");

        assert!(spans.iter().any(|s| s.kind == SpanKind::Insert && s.text.contains("belo")));
        assert!(spans.iter().all(|s| s.kind != SpanKind::Delete));
        assert_eq!(reconstruct(&spans, SpanKind::Delete), "olá mundo");
        assert_eq!(reconstruct(&spans, SpanKind::Insert), "olá belo mundo");
    }

    #[test]
    fn test_deletion_only_diff() {
        let spans = diff_spans("um prompt muito longo", "um prompt longo");

        assert!(spans.iter().any(|s| s.kind == SpanKind::Delete && s.text.contains("muito")));
        assert!(spans.iter().all(|s| s.kind != SpanKind::Insert));
        assert_eq!(reconstruct(&spans, SpanKind::Delete), "um prompt muito longo");
        assert_eq!(reconstruct(&spans, SpanKind::Insert), "um prompt longo");
    }

    #[test]
    fn test_replacement_produces_delete_and_insert() {
        let spans = diff_spans("escreva sobre o gato", "escreva sobre o cachorro");

        assert!(spans.iter().any(|s| s.kind == SpanKind::Delete));
        assert!(spans.iter().any(|s| s.kind == SpanKind::Insert));
        assert_eq!(reconstruct(&spans, SpanKind::Delete), "escreva sobre o gato");
        assert_eq!(reconstruct(&spans, SpanKind::Insert), "escreva sobre o cachorro");
    }

    #[test]
    fn test_adjacent_spans_never_share_a_kind() {
        let spans = diff_spans(
            "Escreva um texto curto sobre inverno",
            "Escreva um poema detalhado sobre o inverno",
        );
        for pair in spans.windows(2) {
            assert_ne!(pair[0].kind, pair[1].kind, "unmerged spans: {spans:?}");
        }
    }

    #[test]
    fn test_html_escapes_metacharacters() {
        let html = diff_html("<b> & </b>", "<b> & </b>");
        assert_eq!(html, "<span>&lt;b&gt; &amp; &lt;/b&gt;</span>");
    }

    #[test]
    fn test_html_renders_newlines_visibly() {
        let html = diff_html("linha um\nlinha dois", "linha um\nlinha dois");
        assert!(html.contains("&para;<br>"));
        assert!(!html.contains('\n'));
    }

    #[test]
    fn test_html_tags_insertions_and_deletions() {
        let html = diff_html("olá mundo", "olá belo mundo");
        assert!(html.contains("<ins style=\"background:#e6ffe6;\">"));
        assert!(html.contains("belo"));

        let html = diff_html("olá belo mundo", "olá mundo");
        assert!(html.contains("<del style=\"background:#ffe6e6;\">"));
    }

    #[test]
    fn test_span_serializes_with_lowercase_kind() {
        let span = DiffSpan {
            kind: SpanKind::Insert,
            text: "belo ".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&span).unwrap(),
            serde_json::json!({ "kind": "insert", "text": "belo " })
        );
    }
}
