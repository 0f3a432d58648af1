use std::fmt;
use std::fs::File;
use std::path::Path;

use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, DocxError, IndentLevel, Level, LevelJc,
    LevelText, NumberFormat, Numbering, NumberingId, Paragraph, Run, RunFonts,
    SpecialIndentType, Start, Style, StyleType,
};

use crate::config::StyleConfig;
use crate::document::{DocElement, Document};
use crate::inline::Span;

// Word sizes are half-points; heading sizes fall from 15pt at level 1 to
// 10pt at level 6.
const HEADING_SIZES: [usize; 6] = [30, 28, 26, 24, 22, 20];
const BULLET_NUMBERING: usize = 1;
const ORDERED_NUMBERING: usize = 2;
// Twips; 720 is half an inch.
const BLOCK_INDENT: i32 = 720;

#[derive(Debug)]
pub enum WriteError {
    Io(std::io::Error),
    Docx(DocxError),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Io(e) => write!(f, "IO error: {}", e),
            WriteError::Docx(e) => write!(f, "Docx error: {}", e),
        }
    }
}

impl std::error::Error for WriteError {}

impl From<std::io::Error> for WriteError {
    fn from(value: std::io::Error) -> Self {
        WriteError::Io(value)
    }
}

impl From<DocxError> for WriteError {
    fn from(value: DocxError) -> Self {
        WriteError::Docx(value)
    }
}

/// Serialize the document model to a `.docx` file. All binary-format
/// encoding lives behind the docx-rs boundary; this module only maps
/// elements to paragraphs and runs.
pub fn write_document(
    document: &Document,
    styles: &StyleConfig,
    path: &Path,
) -> Result<(), WriteError> {
    let mut docx = setup_styles(Docx::new(), styles);

    for element in document.elements() {
        docx = add_element(docx, element, styles);
    }

    let file = File::create(path)?;
    docx.build()
        .pack(file)
        .map_err(|e| WriteError::Docx(e.into()))?;

    Ok(())
}

fn setup_styles(docx: Docx, styles: &StyleConfig) -> Docx {
    let mut docx = docx
        .default_fonts(RunFonts::new().ascii(styles.body_font.as_str()))
        .default_size(styles.body_size * 2);

    for (i, size) in HEADING_SIZES.iter().enumerate() {
        let level = i + 1;
        docx = docx.add_style(
            Style::new(format!("Heading{}", level), StyleType::Paragraph)
                .name(format!("Heading {}", level))
                .size(*size)
                .bold(),
        );
    }

    docx.add_abstract_numbering(
        AbstractNumbering::new(BULLET_NUMBERING).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("bullet"),
                LevelText::new("•"),
                LevelJc::new("left"),
            )
            .indent(Some(BLOCK_INDENT), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_numbering(Numbering::new(BULLET_NUMBERING, BULLET_NUMBERING))
    .add_abstract_numbering(
        AbstractNumbering::new(ORDERED_NUMBERING).add_level(
            Level::new(
                0,
                Start::new(1),
                NumberFormat::new("decimal"),
                LevelText::new("%1."),
                LevelJc::new("left"),
            )
            .indent(Some(BLOCK_INDENT), Some(SpecialIndentType::Hanging(360)), None, None),
        ),
    )
    .add_numbering(Numbering::new(ORDERED_NUMBERING, ORDERED_NUMBERING))
}

fn add_element(docx: Docx, element: &DocElement, styles: &StyleConfig) -> Docx {
    match element {
        DocElement::Heading { level, spans } => {
            let style_id = format!("Heading{}", level);
            docx.add_paragraph(spans_paragraph(spans, styles).style(&style_id))
        }
        DocElement::Paragraph { spans } => docx.add_paragraph(spans_paragraph(spans, styles)),
        DocElement::ListItem { ordered, spans } => {
            let numbering = if *ordered {
                ORDERED_NUMBERING
            } else {
                BULLET_NUMBERING
            };
            docx.add_paragraph(
                spans_paragraph(spans, styles)
                    .numbering(NumberingId::new(numbering), IndentLevel::new(0)),
            )
        }
        DocElement::Quote { spans } => {
            let mut paragraph =
                Paragraph::new().indent(Some(BLOCK_INDENT), None, Some(BLOCK_INDENT), None);
            for span in spans {
                paragraph = paragraph.add_run(span_run(span, styles).italic());
            }
            docx.add_paragraph(paragraph)
        }
        DocElement::CodeBlock { text } => docx.add_paragraph(code_paragraph(text, styles)),
        DocElement::Rule => docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_text(separator(styles))),
        ),
        DocElement::SectionLabel { text } => docx.add_paragraph(
            Paragraph::new().align(AlignmentType::Right).add_run(
                Run::new()
                    .add_text(text.as_str())
                    .italic()
                    .size(styles.label_size * 2),
            ),
        ),
        DocElement::PageBreak => docx.add_paragraph(
            Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
        ),
    }
}

fn spans_paragraph(spans: &[Span], styles: &StyleConfig) -> Paragraph {
    let mut paragraph = Paragraph::new();
    for span in spans {
        paragraph = paragraph.add_run(span_run(span, styles));
    }
    paragraph
}

fn span_run(span: &Span, styles: &StyleConfig) -> Run {
    match span {
        Span::Text(text) => Run::new().add_text(text.as_str()),
        Span::Bold(text) => Run::new().add_text(text.as_str()).bold(),
        Span::Italic(text) => Run::new().add_text(text.as_str()).italic(),
        Span::BoldItalic(text) => Run::new().add_text(text.as_str()).bold().italic(),
        Span::Code(text) => Run::new()
            .add_text(text.as_str())
            .fonts(RunFonts::new().ascii(styles.code_font.as_str())),
        // The destination is appended as visible text, not a hyperlink.
        Span::Link { text, url } => Run::new()
            .add_text(format!("{} ({})", text, url))
            .underline("single"),
    }
}

/// Code keeps its internal line structure: one run per block, with explicit
/// in-paragraph breaks between lines.
fn code_paragraph(text: &str, styles: &StyleConfig) -> Paragraph {
    let mut run = Run::new()
        .fonts(RunFonts::new().ascii(styles.code_font.as_str()))
        .size(styles.code_size * 2);
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }

    Paragraph::new()
        .indent(Some(BLOCK_INDENT), None, None, None)
        .add_run(run)
}

fn separator(styles: &StyleConfig) -> String {
    "─".repeat(styles.separator_width)
}
