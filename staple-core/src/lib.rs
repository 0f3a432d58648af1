pub mod builder;
pub mod config;
pub mod document;
pub mod docx;
pub mod inline;
pub mod markdown;
pub mod renderer;
pub mod source;

// Re-export main types
pub use builder::{ConvertError, DocumentBuilder, convert, convert_paths};
pub use config::{Config, StyleConfig};
pub use document::{DocElement, Document};
pub use inline::Span;
pub use markdown::{Block, parse_blocks};
pub use source::{SourceError, SourceFile, collect_markdown_files};
