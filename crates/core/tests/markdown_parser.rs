use mdsplice_core::markdown::{MarkdownParser, ParseError};
use std::fs;
use tempfile::tempdir;

// === Title and section splitting ===

#[test]
fn parses_title_and_two_sections() {
    let doc = MarkdownParser::parse("# T\n\nIntro\n\n## S1\n\nC1\n\n## S2\n\nC2");

    assert_eq!(doc.title(), Some("T"));
    assert_eq!(doc.section_titles(), vec!["S1", "S2"]);
    assert_eq!(doc.sections()[0].level(), 2);
    assert_eq!(doc.sections()[1].level(), 2);
    assert_eq!(doc.sections()[0].content(), "## S1\n\nC1\n");
    assert_eq!(doc.sections()[1].content(), "## S2\n\nC2");
}

#[test]
fn parses_multiple_sections_with_subsection() {
    let input = r#"# Document Title

Intro paragraph

## First Section

First content

## Second Section

Second content

### Subsection

Sub content"#;

    let doc = MarkdownParser::parse(input);

    assert_eq!(doc.title(), Some("Document Title"));
    assert_eq!(doc.sections().len(), 3);
    assert_eq!(doc.sections()[2].title(), "Subsection");
    assert_eq!(doc.sections()[2].level(), 3);
}

#[test]
fn section_without_title() {
    let doc = MarkdownParser::parse("## Section");

    assert!(doc.title().is_none());
    assert_eq!(doc.sections().len(), 1);
    assert_eq!(doc.sections()[0].content(), "## Section");
}

#[test]
fn empty_document() {
    let doc = MarkdownParser::parse("");

    assert!(doc.title().is_none());
    assert!(doc.sections().is_empty());
}

#[test]
fn tracks_zero_based_line_numbers() {
    let input = "# Title\n\nLine 2\n\n## Section One\nLine 5\nLine 6\n\n## Section Two\nLine 9";

    let doc = MarkdownParser::parse(input);

    assert_eq!(doc.sections()[0].line_number(), 4);
    assert_eq!(doc.sections()[0].end_line(), 8);
    assert_eq!(doc.sections()[1].line_number(), 8);
    assert_eq!(doc.sections()[1].end_line(), 10);
}

#[test]
fn raw_content_is_preserved() {
    let input = "# Title\r\n\r\nSome **bold** text.\n\n```python\n## not special\n```\n";

    let doc = MarkdownParser::parse(input);

    assert_eq!(doc.raw_content(), input);
}

#[test]
fn code_fences_are_not_special() {
    let input = "## Real\n```\n## Fenced\n```";

    let doc = MarkdownParser::parse(input);

    assert_eq!(doc.section_titles(), vec!["Real", "Fenced"]);
}

// === Lookup helpers ===

#[test]
fn find_section_is_case_insensitive() {
    let doc = MarkdownParser::parse("## Architecture Overview\n\nText\n\n## Next");

    let section = doc.find_section("  architecture overview ").unwrap();
    assert_eq!(section.line_number(), 0);
    assert!(doc.find_section("Missing").is_none());
}

// === File entry point ===

#[test]
fn parse_file_reads_utf8() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("doc.md");
    fs::write(&path, "# File Title\n\n## File Section\n\nFile content").unwrap();

    let doc = MarkdownParser::parse_file(&path).unwrap();

    assert_eq!(doc.title(), Some("File Title"));
    assert_eq!(doc.section_titles(), vec!["File Section"]);
}

#[test]
fn parse_file_missing_is_read_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("nope.md");

    match MarkdownParser::parse_file(&path) {
        Err(ParseError::ReadError { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected ReadError, got {other:?}"),
    }
}

#[test]
fn parse_file_invalid_utf8_is_read_error() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("binary.md");
    fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

    assert!(matches!(MarkdownParser::parse_file(&path), Err(ParseError::ReadError { .. })));
}

#[test]
fn document_serializes_without_raw_content() {
    let doc = MarkdownParser::parse("# T\n## S\nbody");

    let json = serde_json::to_value(&doc).unwrap();

    assert_eq!(json["title"], "T");
    assert_eq!(json["sections"][0]["title"], "S");
    assert_eq!(json["sections"][0]["line_number"], 1);
    assert!(json.get("raw_content").is_none());
}
