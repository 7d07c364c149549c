#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod images;
pub mod markdown;
pub mod metadata;

pub use error::MarkdownError;
pub use images::{ImageSpec, ImageUpdater, InsertError, Placement};
pub use markdown::{Document, MarkdownParser, ParseError, Section};
pub use metadata::{extract_title, extract_title_from_file, slugify};

#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
