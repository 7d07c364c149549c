use mdsplice_core::config::loader::default_config_path;
use mdsplice_core::config::types::ResolvedConfig;

pub fn run(cfg: &ResolvedConfig) {
    println!("OK   mdsplice doctor");
    println!(
        "path: {}",
        cfg.source.as_deref().map_or_else(
            || format!("(defaults; no file at {})", default_config_path().display()),
            |p| p.display().to_string()
        )
    );
    println!("images.width: {}", display_width(&cfg.images.width));
    println!("images.alt_text: {:?}", cfg.images.alt_text);
    println!("images.placement: {}", cfg.images.placement);
    println!("logging.level: {}", cfg.logging.level);
    println!(
        "logging.file: {}",
        cfg.logging.file.as_ref().map_or_else(|| "(none)".to_string(), |p| p.display().to_string())
    );
}

fn display_width(width: &str) -> &str {
    if width.is_empty() { "(markdown syntax)" } else { width }
}
