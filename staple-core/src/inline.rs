use regex::Regex;
use std::sync::LazyLock;

/// A styled run of text within a single line.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Text(String),
    Bold(String),
    Italic(String),
    BoldItalic(String),
    Code(String),
    Link { text: String, url: String },
}

#[derive(Debug, Clone, Copy)]
enum SpanKind {
    BoldItalic,
    Bold,
    Italic,
    Code,
    Link,
}

// Ordered by precedence: the longer delimiters must be tried before their
// prefixes, so `***x***` is bold+italic rather than an empty bold.
static RULES: LazyLock<Vec<(Regex, SpanKind)>> = LazyLock::new(|| {
    vec![
        (Regex::new(r"\*\*\*(.+?)\*\*\*").unwrap(), SpanKind::BoldItalic),
        (Regex::new(r"\*\*(.+?)\*\*").unwrap(), SpanKind::Bold),
        (Regex::new(r"\*(.+?)\*").unwrap(), SpanKind::Italic),
        (Regex::new(r"__(.+?)__").unwrap(), SpanKind::Bold),
        (Regex::new(r"_(.+?)_").unwrap(), SpanKind::Italic),
        (Regex::new(r"`(.+?)`").unwrap(), SpanKind::Code),
        (Regex::new(r"\[(.+?)\]\((.+?)\)").unwrap(), SpanKind::Link),
    ]
});

/// Split one line of text into styled spans.
///
/// Each rule is matched left-to-right; the earliest-starting match wins, and
/// ties go to the rule listed first. Text outside any match is emitted as
/// plain spans, so unbalanced delimiters come through literally instead of
/// failing.
pub fn parse_spans(text: &str) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let mut best: Option<(regex::Captures<'_>, SpanKind)> = None;
        for (re, kind) in RULES.iter() {
            if let Some(caps) = re.captures_at(text, pos) {
                let start = caps.get(0).unwrap().start();
                let better = match &best {
                    Some((b, _)) => start < b.get(0).unwrap().start(),
                    None => true,
                };
                if better {
                    best = Some((caps, *kind));
                }
            }
        }

        let Some((caps, kind)) = best else {
            spans.push(Span::Text(text[pos..].to_string()));
            break;
        };

        let m = caps.get(0).unwrap();
        if m.start() > pos {
            spans.push(Span::Text(text[pos..m.start()].to_string()));
        }

        let inner = caps.get(1).unwrap().as_str().to_string();
        spans.push(match kind {
            SpanKind::BoldItalic => Span::BoldItalic(inner),
            SpanKind::Bold => Span::Bold(inner),
            SpanKind::Italic => Span::Italic(inner),
            SpanKind::Code => Span::Code(inner),
            SpanKind::Link => Span::Link {
                text: inner,
                url: caps.get(2).unwrap().as_str().to_string(),
            },
        });
        pos = m.end();
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_a_single_span() {
        let spans = parse_spans("just some words");
        assert_eq!(spans, vec![Span::Text("just some words".to_string())]);
    }

    #[test]
    fn mixed_styles_in_one_line() {
        let spans = parse_spans("**bold** and *italic* and `code`");
        assert_eq!(
            spans,
            vec![
                Span::Bold("bold".to_string()),
                Span::Text(" and ".to_string()),
                Span::Italic("italic".to_string()),
                Span::Text(" and ".to_string()),
                Span::Code("code".to_string()),
            ]
        );
    }

    #[test]
    fn triple_asterisks_are_bold_italic() {
        let spans = parse_spans("***loud***");
        assert_eq!(spans, vec![Span::BoldItalic("loud".to_string())]);
    }

    #[test]
    fn underscore_variants() {
        let spans = parse_spans("__strong__ or _soft_");
        assert_eq!(
            spans,
            vec![
                Span::Bold("strong".to_string()),
                Span::Text(" or ".to_string()),
                Span::Italic("soft".to_string()),
            ]
        );
    }

    #[test]
    fn link_keeps_label_and_url() {
        let spans = parse_spans("see [docs](https://example.com) here");
        assert_eq!(
            spans,
            vec![
                Span::Text("see ".to_string()),
                Span::Link {
                    text: "docs".to_string(),
                    url: "https://example.com".to_string(),
                },
                Span::Text(" here".to_string()),
            ]
        );
    }

    #[test]
    fn adjacent_emphasis_does_not_span() {
        let spans = parse_spans("*a* and *b*");
        assert_eq!(
            spans,
            vec![
                Span::Italic("a".to_string()),
                Span::Text(" and ".to_string()),
                Span::Italic("b".to_string()),
            ]
        );
    }

    #[test]
    fn no_nesting_inside_a_match() {
        let spans = parse_spans("**bold with *italic* inside**");
        assert_eq!(
            spans,
            vec![Span::Bold("bold with *italic* inside".to_string())]
        );
    }

    #[test]
    fn unmatched_delimiters_stay_literal() {
        let spans = parse_spans("a ** b");
        assert_eq!(spans, vec![Span::Text("a ** b".to_string())]);
    }

    #[test]
    fn empty_line_has_no_spans() {
        assert!(parse_spans("").is_empty());
    }
}
