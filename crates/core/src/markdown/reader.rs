use std::path::Path;

use crate::markdown::parser;
use crate::markdown::types::{Document, ParseError};

/// High-level API for splitting markdown into sections
pub struct MarkdownParser;

impl MarkdownParser {
    /// Parse markdown text into a title and its `##`/`###` sections
    ///
    /// Never fails: malformed input simply yields fewer sections.
    #[must_use]
    pub fn parse(content: &str) -> Document {
        parser::parse(content)
    }

    /// Read a markdown file as UTF-8 and parse it
    ///
    /// # Errors
    /// * `ReadError` - The file is missing, unreadable or not valid UTF-8
    pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
        parser::parse_file(path)
    }
}
