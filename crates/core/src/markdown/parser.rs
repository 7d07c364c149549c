//! Line scanner that turns markdown text into a title and flat sections.

use std::fs;
use std::path::Path;

use crate::markdown::types::{Document, ParseError, Section};

const TITLE_MARKER: &str = "# ";
const SECTION_MARKERS: [(&str, u8); 2] = [("## ", 2), ("### ", 3)];

/// Section being accumulated while scanning lines.
#[derive(Debug)]
struct OpenSection<'a> {
    title: String,
    level: u8,
    line_number: usize,
    lines: Vec<&'a str>,
}

impl<'a> OpenSection<'a> {
    fn start(title: &str, level: u8, line_number: usize, heading: &'a str) -> Self {
        Self { title: title.trim().to_string(), level, line_number, lines: vec![heading] }
    }

    /// Close the section; `end_line` is the first source line not covered by it.
    fn finish(self, end_line: usize) -> Section {
        Section::new(self.title, self.level, self.line_number, end_line, self.lines.join("\n"))
    }
}

/// Split markdown into a title and flat `##`/`###` sections.
///
/// Only the first `# ` heading is taken as the title. Lines before the first
/// section heading that are not the title are dropped. Headings are matched
/// on the trimmed line, so indented headings count too.
#[must_use]
pub fn parse(content: &str) -> Document {
    let mut title: Option<String> = None;
    let mut sections = Vec::new();
    let mut current: Option<OpenSection<'_>> = None;
    let mut total_lines = 0;

    for (line_number, line) in content.split('\n').enumerate() {
        total_lines = line_number + 1;
        let stripped = line.trim();

        if title.is_none()
            && let Some(rest) = stripped.strip_prefix(TITLE_MARKER)
        {
            title = Some(rest.trim().to_string());
            continue;
        }

        if let Some((rest, level)) = section_heading(stripped) {
            if let Some(open) = current.take() {
                sections.push(open.finish(line_number));
            }
            current = Some(OpenSection::start(rest, level, line_number, line));
        } else if let Some(open) = current.as_mut() {
            open.lines.push(line);
        }
    }

    if let Some(open) = current {
        sections.push(open.finish(total_lines));
    }

    tracing::debug!(
        title = title.as_deref().unwrap_or(""),
        sections = sections.len(),
        "parsed markdown document"
    );

    Document::new(title, sections, content)
}

/// Read a UTF-8 markdown file and parse it.
///
/// # Errors
/// Returns [`ParseError::ReadError`] when the file is missing, unreadable or
/// not valid UTF-8.
pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::ReadError { path: path.to_path_buf(), source: e })?;
    Ok(parse(&content))
}

fn section_heading(stripped: &str) -> Option<(&str, u8)> {
    SECTION_MARKERS
        .iter()
        .find_map(|(marker, level)| stripped.strip_prefix(marker).map(|rest| (rest, *level)))
}
