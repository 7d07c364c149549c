//! Title extraction and slug derivation.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("valid separator regex"));
static DISALLOWED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9-]").expect("valid slug charset regex"));
static DASHES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-+").expect("valid dash regex"));

/// Return the text of the first `# ` heading.
///
/// ```
/// use mdsplice_core::extract_title;
///
/// assert_eq!(extract_title("# Hello World\nSome content").as_deref(), Some("Hello World"));
/// assert_eq!(extract_title("No title here"), None);
/// ```
#[must_use]
#[allow(clippy::str_split_at_newline)] // lines are split on `\n` only, never `\r\n`
pub fn extract_title(content: &str) -> Option<String> {
    content
        .trim()
        .split('\n')
        .find_map(|line| line.trim().strip_prefix("# "))
        .map(|rest| rest.trim().to_string())
}

/// Read a markdown file and return its title.
///
/// Unreadable or missing files yield `None` rather than an error.
#[must_use]
pub fn extract_title_from_file(path: &Path) -> Option<String> {
    match fs::read_to_string(path) {
        Ok(content) => extract_title(&content),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "could not read file for title");
            None
        }
    }
}

/// Convert text into a lowercase, hyphen-separated identifier.
///
/// ```
/// use mdsplice_core::slugify;
///
/// assert_eq!(slugify("Hello World!"), "hello-world");
/// assert_eq!(slugify("This & That"), "this-that");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let slug = text.to_lowercase();
    let slug = SEPARATOR_RE.replace_all(&slug, "-");
    let slug = DISALLOWED_RE.replace_all(&slug, "");
    let slug = DASHES_RE.replace_all(&slug, "-");
    slug.trim_matches('-').to_string()
}
