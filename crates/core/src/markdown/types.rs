use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A heading-delimited run of lines in a markdown document.
///
/// Sections start at a level-2 or level-3 heading and extend up to (but not
/// including) the next such heading. The content always begins with the
/// heading line exactly as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    title: String,
    level: u8,
    line_number: usize,
    end_line: usize,
    content: String,
}

impl Section {
    /// `end_line` is the exclusive source line where the section stops: the
    /// next section heading, or the document's line count.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        level: u8,
        line_number: usize,
        end_line: usize,
        content: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), level, line_number, end_line, content: content.into() }
    }

    /// Heading text without the `#` markers.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Heading depth (2 for `##`, 3 for `###`).
    #[must_use]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Zero-based line index of the heading.
    #[must_use]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Heading line plus every line up to the next section.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of lines in `content`, heading included.
    ///
    /// A title line lying inside the section is not part of `content`, so
    /// this can be one less than `end_line - line_number`.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.split('\n').count()
    }

    /// Zero-based source line index just past the last line of this section.
    #[must_use]
    pub fn end_line(&self) -> usize {
        self.end_line
    }
}

/// Parsed view of a markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    title: Option<String>,
    sections: Vec<Section>,
    #[serde(skip)]
    raw_content: String,
}

impl Document {
    #[must_use]
    pub fn new(
        title: Option<String>,
        sections: Vec<Section>,
        raw_content: impl Into<String>,
    ) -> Self {
        Self { title, sections, raw_content: raw_content.into() }
    }

    /// Text of the first level-1 heading, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// The input exactly as it was handed to the parser.
    #[must_use]
    pub fn raw_content(&self) -> &str {
        &self.raw_content
    }

    /// First section whose title matches, ignoring surrounding whitespace
    /// and ASCII case.
    #[must_use]
    pub fn find_section(&self, title: &str) -> Option<&Section> {
        let wanted = title.trim();
        self.sections.iter().find(|s| s.title.trim().eq_ignore_ascii_case(wanted))
    }

    #[must_use]
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections.iter().map(Section::title).collect()
    }
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read markdown file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
