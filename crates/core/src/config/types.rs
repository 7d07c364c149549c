use std::path::PathBuf;

use serde::Deserialize;

use crate::images::{DEFAULT_WIDTH, ImageSpec, Placement};

#[derive(Debug, Deserialize)]
pub struct ConfigFile {
    pub version: u32,
    #[serde(default)]
    pub images: ImageDefaults,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Defaults applied to `insert-image` when the command line leaves them out.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ImageDefaults {
    /// Width for `<img>` tags; an empty string selects `![alt](path)` syntax.
    #[serde(default = "default_width")]
    pub width: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub placement: Placement,
}

impl Default for ImageDefaults {
    fn default() -> Self {
        Self { width: default_width(), alt_text: String::new(), placement: Placement::default() }
    }
}

impl ImageDefaults {
    /// Start an image spec for `path` carrying these defaults.
    #[must_use]
    pub fn spec_for(&self, path: impl Into<String>) -> ImageSpec {
        let width = (!self.width.is_empty()).then(|| self.width.clone());
        ImageSpec::new(path)
            .alt_text(self.alt_text.clone())
            .width(width)
            .placement(self.placement)
    }
}

fn default_width() -> String {
    DEFAULT_WIDTH.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file_level: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), file_level: None, file: None }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Default)]
pub struct ResolvedConfig {
    /// File the settings were read from; `None` when built-in defaults are in use.
    pub source: Option<PathBuf>,
    pub images: ImageDefaults,
    pub logging: LoggingConfig,
}
