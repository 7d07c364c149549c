use crate::images::types::{ImageSpec, Placement};

/// Lines scanned on either side of the anchor for `BeforeSection`.
const SECTION_WINDOW: usize = 5;
/// Lines scanned after the anchor for `AfterIntro`.
const INTRO_WINDOW: usize = 20;

/// Splice an image reference into markdown content.
///
/// `target_line` is a zero-based line index used as the anchor for the
/// placement strategy; when absent the middle of the document is used.
/// Targets past the end of the document append the image at the end.
#[must_use]
pub fn insert_image(content: &str, target_line: Option<usize>, image: &ImageSpec) -> String {
    let fragment = render_fragment(image);
    let mut lines: Vec<&str> = content.split('\n').collect();
    let index = resolve_insertion_index(&lines, target_line, image.placement);

    tracing::debug!(
        index,
        target = ?target_line,
        placement = %image.placement,
        "resolved image insertion point"
    );

    if index <= lines.len() {
        lines.insert(index, &fragment);
    }

    lines.join("\n")
}

/// Build the inserted text, padded with a newline on both sides.
#[must_use]
pub fn render_fragment(image: &ImageSpec) -> String {
    match image.width.as_deref().filter(|w| !w.is_empty()) {
        Some(width) => format!(
            "\n<img src=\"{}\" alt=\"{}\" width=\"{width}\">\n",
            image.path, image.alt_text
        ),
        None => format!("\n![{}]({})\n", image.alt_text, image.path),
    }
}

/// Pick the line index the image will be inserted before.
///
/// The result is always within `0..=lines.len()`.
#[must_use]
pub fn resolve_insertion_index(
    lines: &[&str],
    target_line: Option<usize>,
    placement: Placement,
) -> usize {
    let anchor = target_line.unwrap_or(lines.len() / 2);
    let fallback = anchor.min(lines.len());

    let found = match placement {
        Placement::BeforeSection => find_section_start(lines, anchor),
        Placement::AfterIntro => find_intro_end(lines, anchor),
        Placement::AtLine | Placement::AfterSection => None,
    };

    found.unwrap_or(fallback)
}

fn find_section_start(lines: &[&str], anchor: usize) -> Option<usize> {
    let start = anchor.saturating_sub(SECTION_WINDOW);
    let end = lines.len().min(anchor.saturating_add(SECTION_WINDOW));

    (start..end).find(|&i| lines[i].trim().starts_with("##"))
}

fn find_intro_end(lines: &[&str], anchor: usize) -> Option<usize> {
    let end = lines.len().min(anchor.saturating_add(INTRO_WINDOW));

    (anchor.saturating_add(1)..end).find(|&i| lines[i].trim().is_empty()).map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(content: &str) -> Vec<&str> {
        content.split('\n').collect()
    }

    #[test]
    fn missing_target_uses_middle_line() {
        let l = lines("a\nb\nc\nd\ne");
        assert_eq!(resolve_insertion_index(&l, None, Placement::AtLine), 2);
    }

    #[test]
    fn at_line_clamps_past_end() {
        let l = lines("a\nb");
        assert_eq!(resolve_insertion_index(&l, Some(99), Placement::AtLine), 2);
    }

    #[test]
    fn after_section_behaves_like_at_line() {
        let l = lines("## A\nx\n## B\ny");
        assert_eq!(resolve_insertion_index(&l, Some(1), Placement::AfterSection), 1);
    }

    #[test]
    fn before_section_finds_heading_in_window() {
        let l = lines("# T\n\nintro\n\n## S\n\nbody");
        assert_eq!(resolve_insertion_index(&l, Some(2), Placement::BeforeSection), 4);
    }

    #[test]
    fn before_section_looks_behind_anchor() {
        let l = lines("## S\na\nb\nc\nd");
        assert_eq!(resolve_insertion_index(&l, Some(3), Placement::BeforeSection), 0);
    }

    #[test]
    fn before_section_matches_indented_heading() {
        let l = lines("a\n  ## S\nb");
        assert_eq!(resolve_insertion_index(&l, Some(0), Placement::BeforeSection), 1);
    }

    #[test]
    fn before_section_outside_window_falls_back() {
        let l = lines("a\nb\nc\nd\ne\nf\ng\n## far");
        assert_eq!(resolve_insertion_index(&l, Some(2), Placement::BeforeSection), 2);
    }

    #[test]
    fn after_intro_skips_blank_anchor_line() {
        let l = lines("# T\n\nintro\n\nnext");
        assert_eq!(resolve_insertion_index(&l, Some(1), Placement::AfterIntro), 4);
    }

    #[test]
    fn after_intro_without_blank_falls_back() {
        let l = lines("a\nb\nc");
        assert_eq!(resolve_insertion_index(&l, Some(1), Placement::AfterIntro), 1);
    }

    #[test]
    fn fragment_uses_img_tag_with_width() {
        let spec = ImageSpec::new("p.png").alt_text("Alt").width(Some("75%".into()));
        assert_eq!(render_fragment(&spec), "\n<img src=\"p.png\" alt=\"Alt\" width=\"75%\">\n");
    }

    #[test]
    fn fragment_uses_markdown_without_width() {
        let spec = ImageSpec::new("p.png").alt_text("Alt").width(None);
        assert_eq!(render_fragment(&spec), "\n![Alt](p.png)\n");
    }

    #[test]
    fn empty_width_counts_as_absent() {
        let spec = ImageSpec::new("p.png").width(Some(String::new()));
        assert_eq!(render_fragment(&spec), "\n![](p.png)\n");
    }

    #[test]
    fn insert_into_empty_document() {
        let spec = ImageSpec::new("p.png").width(None);
        assert_eq!(insert_image("", None, &spec), "\n![](p.png)\n\n");
    }
}
