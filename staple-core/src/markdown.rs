use regex::Regex;
use std::sync::LazyLock;

static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#+)\s+(.+)$").unwrap());
static UNORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.*)$").unwrap());
static ORDERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\s+(.*)$").unwrap());
static RULE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\*{3,}|-{3,}|_{3,})$").unwrap());
static QUOTE_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^>\s*").unwrap());

/// One block-level unit of a markdown document, in source order.
///
/// List and quote runs are grouped: consecutive marker lines become one
/// `List` (or `Blockquote`) with their markers already stripped.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    List { ordered: bool, items: Vec<String> },
    Blockquote { lines: Vec<String> },
    CodeBlock { text: String },
    Rule,
    SectionMarker { filename: String },
}

/// Parse a whole document into blocks.
///
/// Consecutive non-blank paragraph lines are joined with single spaces, so
/// line breaks inside a paragraph are not preserved in the output.
pub fn parse_blocks(content: &str) -> Vec<Block> {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut blocks = Vec::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let (block, consumed) = next_block(&lines, cursor);
        if let Some(block) = block {
            blocks.push(block);
        }
        cursor += consumed;
    }

    blocks
}

/// Classify the block starting at `cursor` and report how many lines it
/// consumed (always at least one). Blank lines consume one line and yield
/// no block.
pub fn next_block(lines: &[&str], cursor: usize) -> (Option<Block>, usize) {
    let line = lines[cursor];

    // Code fences toggle: a fence line opens a block that runs to the next
    // fence line, or to the end of input if none follows.
    if is_fence(line) {
        let mut end = cursor + 1;
        while end < lines.len() && !is_fence(lines[end]) {
            end += 1;
        }
        let text = lines[cursor + 1..end].join("\n");
        let consumed = if end < lines.len() {
            end - cursor + 1
        } else {
            end - cursor
        };
        return (Some(Block::CodeBlock { text }), consumed);
    }

    if let Some(caps) = HEADING_RE.captures(line) {
        let level = caps[1].len().min(6) as u8;
        let text = caps[2].trim().to_string();
        return (Some(Block::Heading { level, text }), 1);
    }

    if RULE_RE.is_match(line.trim()) {
        return (Some(Block::Rule), 1);
    }

    if UNORDERED_RE.is_match(line) {
        let (items, consumed) = collect_run(lines, cursor, &UNORDERED_RE);
        return (Some(Block::List { ordered: false, items }), consumed);
    }

    if ORDERED_RE.is_match(line) {
        let (items, consumed) = collect_run(lines, cursor, &ORDERED_RE);
        return (Some(Block::List { ordered: true, items }), consumed);
    }

    if line.starts_with('>') {
        let mut quote_lines = Vec::new();
        let mut end = cursor;
        while end < lines.len() && lines[end].starts_with('>') {
            quote_lines.push(QUOTE_PREFIX_RE.replace(lines[end], "").to_string());
            end += 1;
        }
        return (
            Some(Block::Blockquote { lines: quote_lines }),
            end - cursor,
        );
    }

    if !line.trim().is_empty() {
        let mut parts = Vec::new();
        let mut end = cursor;
        while end < lines.len() && continues_paragraph(lines[end]) {
            parts.push(lines[end]);
            end += 1;
        }
        return (
            Some(Block::Paragraph { text: parts.join(" ") }),
            end - cursor,
        );
    }

    // Blank line.
    (None, 1)
}

fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

/// A paragraph keeps consuming lines until one is blank or starts a heading,
/// list, quote, or code fence. Rule lines do not end a paragraph; they get
/// absorbed into it.
fn continues_paragraph(line: &str) -> bool {
    !line.trim().is_empty()
        && !HEADING_RE.is_match(line)
        && !UNORDERED_RE.is_match(line)
        && !ORDERED_RE.is_match(line)
        && !line.starts_with('>')
        && !is_fence(line)
}

fn collect_run(lines: &[&str], cursor: usize, marker: &Regex) -> (Vec<String>, usize) {
    let mut items = Vec::new();
    let mut end = cursor;
    while end < lines.len() {
        match marker.captures(lines[end]) {
            Some(caps) => {
                items.push(caps[1].to_string());
                end += 1;
            }
            None => break,
        }
    }
    (items, end - cursor)
}
