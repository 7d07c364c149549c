pub mod doctor;
pub mod insert_image;
pub mod sections;
pub mod slug;
pub mod title;

use mdsplice_core::config::loader::{ConfigLoader, default_config_path};
use mdsplice_core::config::types::ResolvedConfig;
use std::path::Path;

/// Load the config file, falling back to defaults when none exists.
///
/// Runs before logging is set up, so failures go straight to stderr.
pub fn load_config(config: Option<&Path>) -> ResolvedConfig {
    match ConfigLoader::load_or_default(config) {
        Ok(rc) => rc,
        Err(e) => {
            eprintln!("FAIL mdsplice config");
            eprintln!("{e}");
            if config.is_none() {
                eprintln!("looked for: {}", default_config_path().display());
            }
            std::process::exit(1);
        }
    }
}

/// Report a command failure and exit with status 1.
pub fn fail(command: &str, message: impl std::fmt::Display) -> ! {
    tracing::debug!(command, "command failed");
    crate::logging::flush();
    eprintln!("FAIL mdsplice {command}");
    eprintln!("{message}");
    std::process::exit(1);
}
