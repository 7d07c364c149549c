use std::fmt;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default `width` attribute for inserted `<img>` tags.
pub const DEFAULT_WIDTH: &str = "50%";

/// Strategy for choosing the insertion line relative to the target line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Insert exactly at the target line
    #[default]
    AtLine,
    /// Insert just before a `##` heading found near the target line
    BeforeSection,
    /// Accepted for compatibility; placed like `AtLine`
    AfterSection,
    /// Insert after the first blank line following the target line
    AfterIntro,
}

impl Placement {
    pub const ALL: [Placement; 4] =
        [Self::AtLine, Self::BeforeSection, Self::AfterSection, Self::AfterIntro];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AtLine => "at_line",
            Self::BeforeSection => "before_section",
            Self::AfterSection => "after_section",
            Self::AfterIntro => "after_intro",
        }
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Placement {
    type Err = InsertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| InsertError::UnknownPlacement(s.to_string()))
    }
}

/// Description of the image reference to splice into a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSpec {
    /// Path or URL written into the reference as-is
    pub path: String,
    pub alt_text: String,
    /// Emit an HTML `<img>` tag with this width; `None` or empty emits `![alt](path)`
    pub width: Option<String>,
    pub placement: Placement,
}

impl ImageSpec {
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            alt_text: String::new(),
            width: Some(DEFAULT_WIDTH.to_string()),
            placement: Placement::default(),
        }
    }

    #[must_use]
    pub fn alt_text(mut self, value: impl Into<String>) -> Self {
        self.alt_text = value.into();
        self
    }

    #[must_use]
    pub fn width(mut self, value: Option<String>) -> Self {
        self.width = value;
        self
    }

    #[must_use]
    pub fn placement(mut self, value: Placement) -> Self {
        self.placement = value;
        self
    }
}

#[derive(Debug, Error)]
pub enum InsertError {
    #[error("failed to read markdown file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create output directory {path}: {source}")]
    CreateDirError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write markdown file {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unknown placement: {0}")]
    UnknownPlacement(String),
}
