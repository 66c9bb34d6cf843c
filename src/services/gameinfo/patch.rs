//! `gameinfo.gi` patching so the engine mounts `citadel/addons`.
//!
//! The file is KeyValues text. Only the `SearchPaths { ... }` block is
//! touched: it is swapped for a fixed block listing the addons folder ahead of
//! the stock content folders. Everything outside that block is kept byte for
//! byte.

use crate::services::config::GameLayout;
use crate::services::fs_utils::file_utils::atomic_write;
use crate::types::{ModError, ModResult};
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

static SEARCH_PATHS_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bSearchPaths\s*\{").expect("valid SearchPaths regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PatchOutcome {
    Patched,
    AlreadyRegistered,
}

/// Byte range of the first `SearchPaths { ... }` block, from the keyword to
/// its matching closing brace. Nested braces are balanced; an unterminated
/// block runs to the end of the text.
pub fn find_search_paths_block(content: &str) -> Option<Range<usize>> {
    let open = SEARCH_PATHS_OPEN.find(content)?;
    let brace = open.end() - 1;

    let mut depth = 0usize;
    for (offset, c) in content[brace..].char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open.start()..brace + offset + 1);
                }
            }
            _ => {}
        }
    }

    Some(open.start()..content.len())
}

fn render_block(layout: &GameLayout) -> String {
    let mut block = String::from("SearchPaths\n\t\t{\n");
    for entry in &layout.search_paths {
        block.push_str("\t\t\t");
        block.push_str(entry);
        block.push('\n');
    }
    block.push_str("\t\t}");
    block
}

/// Return `content` with the first `SearchPaths` block replaced, or with the
/// block appended when the file has none.
pub fn patch_search_paths(content: &str, layout: &GameLayout) -> String {
    let block = render_block(layout);

    match find_search_paths_block(content) {
        Some(range) => {
            let mut patched = String::with_capacity(content.len() + block.len());
            patched.push_str(&content[..range.start]);
            patched.push_str(&block);
            patched.push_str(&content[range.end..]);
            patched
        }
        None => {
            let mut patched = content.to_string();
            if !patched.is_empty() && !patched.ends_with('\n') {
                patched.push('\n');
            }
            patched.push_str(&block);
            patched.push('\n');
            patched
        }
    }
}

/// Make sure the game loads the addons folder.
///
/// A file that already carries the layout's marker is left untouched, so
/// repeated installs never re-patch.
pub fn ensure_addons_load_path(config_path: &Path, layout: &GameLayout) -> ModResult<PatchOutcome> {
    if !config_path.is_file() {
        return Err(ModError::ConfigMissing(config_path.to_path_buf()));
    }

    let content = fs::read_to_string(config_path).map_err(|e| ModError::io(config_path, e))?;
    if content.contains(&layout.gameinfo_marker) {
        log::debug!("{} already registers addons", config_path.display());
        return Ok(PatchOutcome::AlreadyRegistered);
    }

    let patched = patch_search_paths(&content, layout);
    atomic_write(config_path, patched.as_bytes()).map_err(|e| ModError::io(config_path, e))?;

    log::info!("Patched SearchPaths in {}", config_path.display());
    Ok(PatchOutcome::Patched)
}

#[cfg(test)]
#[path = "tests/patch_tests.rs"]
mod tests;
