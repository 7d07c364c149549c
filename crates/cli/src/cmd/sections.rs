//! List the sections of a markdown file.

use mdsplice_core::markdown::{Document, MarkdownParser, Section};
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::SectionsArgs;

/// Document summary for JSON output.
#[derive(Serialize)]
struct DocumentOutput<'a> {
    path: String,
    title: Option<&'a str>,
    sections: Vec<SectionOutput<'a>>,
}

#[derive(Serialize)]
struct SectionOutput<'a> {
    title: &'a str,
    level: u8,
    line_number: usize,
    end_line: usize,
    slug: String,
}

impl<'a> From<&'a Section> for SectionOutput<'a> {
    fn from(section: &'a Section) -> Self {
        Self {
            title: section.title(),
            level: section.level(),
            line_number: section.line_number(),
            end_line: section.end_line(),
            slug: mdsplice_core::slugify(section.title()),
        }
    }
}

/// Row for the sections table.
#[derive(Tabled)]
struct SectionRow {
    #[tabled(rename = "Line")]
    line: usize,
    #[tabled(rename = "Level")]
    level: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Lines")]
    lines: usize,
}

pub fn run(args: &SectionsArgs) {
    let doc = match MarkdownParser::parse_file(&args.file) {
        Ok(doc) => doc,
        Err(e) => super::fail("sections", e),
    };

    if args.json {
        print_json(&args.file.display().to_string(), &doc);
    } else {
        print_table(&doc);
    }
}

fn print_json(path: &str, doc: &Document) {
    let output = DocumentOutput {
        path: path.to_string(),
        title: doc.title(),
        sections: doc.sections().iter().map(SectionOutput::from).collect(),
    };

    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => super::fail("sections", e),
    }
}

fn print_table(doc: &Document) {
    println!("Title: {}", doc.title().unwrap_or("(none)"));

    if doc.sections().is_empty() {
        println!("(no sections found)");
        return;
    }

    let rows: Vec<SectionRow> = doc
        .sections()
        .iter()
        .map(|s| SectionRow {
            line: s.line_number(),
            level: "#".repeat(usize::from(s.level())),
            title: s.title().to_string(),
            lines: s.line_count(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}
