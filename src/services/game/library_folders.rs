//! Steam `libraryfolders.vdf` reader.
//!
//! Only the quoted key/value lines matter here; the nesting is ignored.
//! Recognized lines:
//! - `"path"    "D:\\SteamLibrary"` (current format)
//! - `"1"       "D:\\SteamLibrary"` (pre-2021 format, numeric keys)
//!
//! Anything else is skipped without complaint.

use std::fs;
use std::path::{Path, PathBuf};

pub const LIBRARY_MANIFEST: &str = "libraryfolders.vdf";

/// Extract library paths from manifest text, in file order.
pub fn parse_library_folders(content: &str) -> Vec<PathBuf> {
    content.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<PathBuf> {
    let parts: Vec<&str> = line.trim().split('"').collect();
    if parts.len() < 5 {
        return None;
    }

    let key = parts[1];
    let value = parts[3];
    if value.is_empty() {
        return None;
    }

    let is_path_key = key.eq_ignore_ascii_case("path");
    // Numeric keys also appear in the per-library "apps" map (app id -> size),
    // so only accept them when the value looks like a path.
    let is_legacy_key = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_digit())
        && value.contains(['/', '\\', ':']);

    if !is_path_key && !is_legacy_key {
        return None;
    }

    Some(PathBuf::from(value.replace("\\\\", "\\")))
}

/// All Steam libraries to search: the base install first, then every manifest
/// entry that exists as a directory, without duplicates.
pub fn list_libraries(steam_path: &Path) -> Vec<PathBuf> {
    let mut libraries = vec![steam_path.to_path_buf()];

    let manifest = steam_path.join("steamapps").join(LIBRARY_MANIFEST);
    let Ok(content) = fs::read_to_string(&manifest) else {
        return libraries;
    };

    for library in parse_library_folders(&content) {
        if library.is_dir() && !libraries.contains(&library) {
            libraries.push(library);
        }
    }

    libraries
}
