use crate::document::DocElement;
use crate::inline::{Span, parse_spans};
use crate::markdown::Block;

pub fn render_blocks(blocks: &[Block]) -> Vec<DocElement> {
    blocks.iter().flat_map(render_block).collect()
}

/// Map one block to its output elements. Most blocks map to a single
/// element; list runs expand to one item per line and section markers to a
/// label plus separator.
pub fn render_block(block: &Block) -> Vec<DocElement> {
    match block {
        Block::Heading { level, text } => vec![DocElement::Heading {
            level: *level,
            spans: parse_spans(text),
        }],
        Block::Paragraph { text } => vec![DocElement::Paragraph {
            spans: parse_spans(text),
        }],
        Block::List { ordered, items } => items
            .iter()
            .map(|item| DocElement::ListItem {
                ordered: *ordered,
                spans: parse_spans(item),
            })
            .collect(),
        // Quote text is rendered literally: no inline pass, one plain span
        // the serializer styles as italic.
        Block::Blockquote { lines } => vec![DocElement::Quote {
            spans: vec![Span::Text(lines.join(" "))],
        }],
        Block::CodeBlock { text } => vec![DocElement::CodeBlock { text: text.clone() }],
        Block::Rule => vec![DocElement::Rule],
        Block::SectionMarker { filename } => vec![
            DocElement::SectionLabel {
                text: format!("Source: {}", display_name(filename)),
            },
            DocElement::Rule,
        ],
    }
}

/// Strip the final `.extension` for display; a name without a dot is shown
/// unchanged.
fn display_name(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    }
}
