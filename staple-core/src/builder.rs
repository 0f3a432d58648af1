use std::fmt;
use std::path::Path;

use crate::config::StyleConfig;
use crate::docx::{self, WriteError};
use crate::document::{DocElement, Document};
use crate::markdown::{self, Block};
use crate::renderer;
use crate::source::{SourceError, SourceFile};

#[derive(Debug)]
pub enum ConvertError {
    Source(SourceError),
    Write(WriteError),
}

impl From<SourceError> for ConvertError {
    fn from(err: SourceError) -> Self {
        ConvertError::Source(err)
    }
}

impl From<WriteError> for ConvertError {
    fn from(err: WriteError) -> Self {
        ConvertError::Write(err)
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Source(e) => write!(f, "Input error: {}", e),
            ConvertError::Write(e) => write!(f, "Write error: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Assembles one combined document out of a batch of markdown files.
///
/// Files are rendered in ascending filename order no matter the order they
/// were added. Each file after the first is preceded by a page break, and
/// every file opens with its provenance label and a separator.
pub struct DocumentBuilder {
    files: Vec<SourceFile>,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    pub fn add_file(mut self, file: SourceFile) -> Self {
        self.files.push(file);
        self
    }

    pub fn add_files(mut self, files: Vec<SourceFile>) -> Self {
        self.files.extend(files);
        self
    }

    pub fn build(self) -> Document {
        let mut files = self.files;
        files.sort_by(|a, b| a.filename.cmp(&b.filename));

        let mut elements = Vec::new();
        for (i, file) in files.iter().enumerate() {
            if i > 0 {
                elements.push(DocElement::PageBreak);
            }
            elements.extend(renderer::render_block(&Block::SectionMarker {
                filename: file.filename.clone(),
            }));
            let blocks = markdown::parse_blocks(&file.content);
            elements.extend(renderer::render_blocks(&blocks));
        }

        Document::new(elements)
    }
}

/// Convert a batch of in-memory files into a `.docx` at `output`.
pub fn convert(
    files: Vec<SourceFile>,
    output: &Path,
    styles: &StyleConfig,
) -> Result<(), ConvertError> {
    let document = DocumentBuilder::new().add_files(files).build();
    docx::write_document(&document, styles, output)?;

    Ok(())
}

/// Load the given paths from disk, then convert them. The first file that
/// fails to read or decode aborts the whole batch.
pub fn convert_paths<P: AsRef<Path>>(
    paths: &[P],
    output: &Path,
    styles: &StyleConfig,
) -> Result<(), ConvertError> {
    let mut files = Vec::new();
    for path in paths {
        files.push(SourceFile::from_path(path)?);
    }

    convert(files, output, styles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section_labels(document: &Document) -> Vec<String> {
        document
            .elements()
            .iter()
            .filter_map(|e| match e {
                DocElement::SectionLabel { text } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn files_render_in_filename_order() {
        let document = DocumentBuilder::new()
            .add_file(SourceFile::new("z.md", "z content"))
            .add_file(SourceFile::new("a.md", "a content"))
            .build();

        assert_eq!(
            section_labels(&document),
            vec!["Source: a".to_string(), "Source: z".to_string()]
        );
    }

    #[test]
    fn one_label_per_file_with_extension_stripped() {
        let document = DocumentBuilder::new()
            .add_file(SourceFile::new("alpha.md", "one"))
            .add_file(SourceFile::new("beta.md", "two"))
            .add_file(SourceFile::new("gamma.md", "three"))
            .build();

        assert_eq!(
            section_labels(&document),
            vec![
                "Source: alpha".to_string(),
                "Source: beta".to_string(),
                "Source: gamma".to_string(),
            ]
        );
    }

    #[test]
    fn page_break_before_every_file_but_the_first() {
        let document = DocumentBuilder::new()
            .add_file(SourceFile::new("a.md", "one"))
            .add_file(SourceFile::new("b.md", "two"))
            .add_file(SourceFile::new("c.md", "three"))
            .build();

        let breaks = document
            .elements()
            .iter()
            .filter(|e| matches!(e, DocElement::PageBreak))
            .count();
        assert_eq!(breaks, 2);

        // The document must not open with a break, and each break must be
        // followed directly by the next file's label.
        let elements = document.elements();
        assert!(matches!(elements[0], DocElement::SectionLabel { .. }));
        for (i, element) in elements.iter().enumerate() {
            if matches!(element, DocElement::PageBreak) {
                assert!(matches!(elements[i + 1], DocElement::SectionLabel { .. }));
            }
        }
    }

    #[test]
    fn file_content_follows_its_label() {
        let document = DocumentBuilder::new()
            .add_file(SourceFile::new("doc.md", "# Title\n\nbody"))
            .build();

        assert_eq!(
            document.elements(),
            &[
                DocElement::SectionLabel { text: "Source: doc".to_string() },
                DocElement::Rule,
                DocElement::Heading {
                    level: 1,
                    spans: vec![crate::inline::Span::Text("Title".to_string())],
                },
                DocElement::Paragraph {
                    spans: vec![crate::inline::Span::Text("body".to_string())],
                },
            ]
        );
    }

    #[test]
    fn empty_batch_builds_an_empty_document() {
        let document = DocumentBuilder::new().build();
        assert!(document.is_empty());
    }
}
