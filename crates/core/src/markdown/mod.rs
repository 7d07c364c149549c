//! Heading-based section splitting for markdown documents.

pub mod parser;
pub mod reader;
pub mod types;

// Re-export primary API
pub use reader::MarkdownParser;
pub use types::{Document, ParseError, Section};
