//! Crate-wide error type covering every fallible markdown operation.

use thiserror::Error;

use crate::images::InsertError;
use crate::markdown::ParseError;

/// Any failure raised while reading, parsing or updating a markdown document.
#[derive(Debug, Error)]
pub enum MarkdownError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Insert(#[from] InsertError),
}
