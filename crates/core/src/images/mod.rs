//! Image reference insertion at heuristically chosen lines.

pub mod heuristic;
pub mod types;
pub mod updater;

// Re-export primary API
pub use heuristic::{render_fragment, resolve_insertion_index};
pub use types::{DEFAULT_WIDTH, ImageSpec, InsertError, Placement};
pub use updater::ImageUpdater;
