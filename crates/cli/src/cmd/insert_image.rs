use mdsplice_core::config::types::ResolvedConfig;
use mdsplice_core::images::{ImageSpec, ImageUpdater, Placement};
use mdsplice_core::markdown::{Document, MarkdownParser};

use crate::InsertImageArgs;

pub fn run(cfg: &ResolvedConfig, args: &InsertImageArgs) {
    let spec = build_spec(cfg, args);

    // Only read the document up front when the anchor or output depends on it
    let doc = (args.section.is_some() || args.dry_run).then(|| {
        MarkdownParser::parse_file(&args.input)
            .unwrap_or_else(|e| super::fail("insert-image", e))
    });

    let target_line = match (&args.section, &doc) {
        (Some(title), Some(doc)) => Some(section_anchor(doc, title, spec.placement)),
        _ => args.line,
    };

    if let Some(doc) = doc.as_ref().filter(|_| args.dry_run) {
        print!("{}", ImageUpdater::insert_image(doc.raw_content(), target_line, &spec));
        return;
    }

    let output = args.output.as_deref().unwrap_or(args.input.as_path());
    if let Err(e) = ImageUpdater::insert_image_in_file(&args.input, output, target_line, &spec) {
        super::fail("insert-image", e);
    }

    println!("OK   mdsplice insert-image");
    println!("image:     {}", spec.path);
    println!("output:    {}", output.display());
    println!("placement: {}", spec.placement);
    match target_line {
        Some(line) => println!("target:    line {line}"),
        None => println!("target:    middle of document"),
    }
}

fn build_spec(cfg: &ResolvedConfig, args: &InsertImageArgs) -> ImageSpec {
    let mut spec = cfg.images.spec_for(args.image.clone());

    if let Some(ref alt) = args.alt {
        spec = spec.alt_text(alt.clone());
    }
    if args.no_width {
        spec = spec.width(None);
    } else if let Some(ref width) = args.width {
        spec = spec.width(Some(width.clone()));
    }
    if let Some(ref placement) = args.placement {
        match placement.parse::<Placement>() {
            Ok(p) => spec = spec.placement(p),
            Err(e) => super::fail("insert-image", format!("{e} (expected one of: {})", placement_names())),
        }
    }

    spec
}

/// Resolve a section title to the anchor line for the placement strategy.
fn section_anchor(doc: &Document, title: &str, placement: Placement) -> usize {
    let Some(section) = doc.find_section(title) else {
        let available = doc
            .sections()
            .iter()
            .map(|s| format!("  - {} (level {})", s.title(), s.level()))
            .collect::<Vec<_>>()
            .join("\n");
        super::fail(
            "insert-image",
            format!("Section not found: '{title}'\nAvailable sections:\n{available}"),
        );
    };

    match placement {
        Placement::AfterSection => section.end_line(),
        _ => section.line_number(),
    }
}

fn placement_names() -> String {
    Placement::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
}
