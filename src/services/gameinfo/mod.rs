pub mod patch;

pub use patch::{ensure_addons_load_path, patch_search_paths, PatchOutcome};
