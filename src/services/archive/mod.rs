//! Mod archive extraction (.zip, .7z, .rar).

mod extract;
mod types;

pub use extract::extract;
pub use types::{ArchiveFormat, ExtractedEntry};

#[cfg(test)]
#[path = "tests/extract_tests.rs"]
mod tests;
