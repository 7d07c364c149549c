use std::fs;
use std::path::Path;

use crate::images::heuristic;
use crate::images::types::{ImageSpec, InsertError};

/// High-level API for adding image references to markdown
pub struct ImageUpdater;

impl ImageUpdater {
    /// Insert an image reference into markdown content
    ///
    /// # Arguments
    /// * `content` - The source Markdown document
    /// * `target_line` - Zero-based anchor line (`None` = middle of the document)
    /// * `image` - Image path, alt text, width and placement strategy
    ///
    /// # Returns
    /// The updated document. Out-of-range targets are clamped to the end.
    #[must_use]
    pub fn insert_image(content: &str, target_line: Option<usize>, image: &ImageSpec) -> String {
        heuristic::insert_image(content, target_line, image)
    }

    /// Read `input`, insert the image and write the result to `output`
    ///
    /// Missing parent directories of `output` are created. `input` and
    /// `output` may be the same file.
    ///
    /// # Errors
    /// * `ReadError` - `input` is missing, unreadable or not valid UTF-8
    /// * `CreateDirError` - The output directory could not be created
    /// * `WriteError` - `output` could not be written
    pub fn insert_image_in_file(
        input: &Path,
        output: &Path,
        target_line: Option<usize>,
        image: &ImageSpec,
    ) -> Result<(), InsertError> {
        let content = fs::read_to_string(input)
            .map_err(|e| InsertError::ReadError { path: input.to_path_buf(), source: e })?;

        let updated = heuristic::insert_image(&content, target_line, image);

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| InsertError::CreateDirError {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        fs::write(output, updated)
            .map_err(|e| InsertError::WriteError { path: output.to_path_buf(), source: e })?;

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            image = %image.path,
            "inserted image"
        );

        Ok(())
    }
}
