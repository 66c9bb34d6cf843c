//! Addon file name collision handling.
//!
//! The addons folder is one flat namespace. A payload whose name is already
//! on disk gets a two-digit suffix before its extension: `skin.vpk`,
//! `skin_01.vpk`, `skin_02.vpk`, ... up to `_99`.

use crate::types::{ModError, ModResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub const MAX_CONFLICT_SUFFIX: u32 = 99;

/// A payload file and the name it will take in the addons folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub source: PathBuf,
    pub file_name: String,
}

/// Split `skin.vpk` into (`skin`, `.vpk`). Names without an extension, or
/// dotfiles like `.vpk`, get an empty extension.
fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

/// Pick a free name for every payload before anything is copied.
///
/// A name is taken when a file or folder of that name exists in `addons_dir`
/// (tracked or not) or when an earlier payload of this batch already claimed
/// it. Names in `reusable` belong to the record being replaced and count as
/// free, since those files are deleted before placement.
pub fn resolve_placements(
    addons_dir: &Path,
    payloads: &[(PathBuf, String)],
    reusable: &HashSet<&str>,
) -> ModResult<Vec<Placement>> {
    let mut claimed: HashSet<String> = HashSet::new();
    let mut placements = Vec::with_capacity(payloads.len());

    for (source, base_name) in payloads {
        let is_free = |candidate: &str| {
            !claimed.contains(candidate)
                && (reusable.contains(candidate) || !addons_dir.join(candidate).exists())
        };

        let file_name = if is_free(base_name) {
            base_name.clone()
        } else {
            let (stem, ext) = split_extension(base_name);
            let renamed = (1..=MAX_CONFLICT_SUFFIX)
                .map(|n| format!("{stem}_{n:02}{ext}"))
                .find(|candidate| is_free(candidate))
                .ok_or_else(|| ModError::TooManyConflicts(base_name.clone()))?;
            log::debug!("Name conflict: {base_name} -> {renamed}");
            renamed
        };

        claimed.insert(file_name.clone());
        placements.push(Placement {
            source: source.clone(),
            file_name,
        });
    }

    Ok(placements)
}

#[cfg(test)]
#[path = "tests/conflict_tests.rs"]
mod tests;
