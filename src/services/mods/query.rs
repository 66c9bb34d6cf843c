//! Read-only views over the installed mod records.

use super::metadata::ModMetadataStore;
use crate::services::config::GameLayout;
use crate::services::fs_utils::file_utils::join_entry;
use crate::types::ModResult;
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstalledMod {
    pub name: String,
    pub files: Vec<String>,
}

/// A record whose files are partly or wholly gone from the addons folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaleRecord {
    pub name: String,
    pub missing_files: Vec<String>,
}

/// All recorded mods sorted by name. No metadata file means no mods.
pub fn list_installed_mods(install_root: &Path, layout: &GameLayout) -> ModResult<Vec<InstalledMod>> {
    let index = ModMetadataStore::for_install(install_root, layout).load()?;
    Ok(index
        .into_iter()
        .map(|(name, files)| InstalledMod { name, files })
        .collect())
}

/// Whether a record exists for `mod_name`. Unreadable metadata answers `false`.
pub fn is_mod_installed(mod_name: &str, install_root: &Path, layout: &GameLayout) -> bool {
    match ModMetadataStore::for_install(install_root, layout).load() {
        Ok(index) => index.contains_key(mod_name),
        Err(e) => {
            log::warn!("Duplicate check could not read metadata: {e}");
            false
        }
    }
}

/// Records listing files that no longer exist. Reports only; the store is
/// never modified here.
pub fn find_stale_records(install_root: &Path, layout: &GameLayout) -> ModResult<Vec<StaleRecord>> {
    let addons_dir = layout.addons_dir(install_root);
    let index = ModMetadataStore::for_install(install_root, layout).load()?;

    Ok(index
        .into_iter()
        .filter_map(|(name, files)| {
            let missing_files: Vec<String> = files
                .into_iter()
                .filter(|file| {
                    join_entry(&addons_dir, file).map_or(true, |path| !path.is_file())
                })
                .collect();
            (!missing_files.is_empty()).then_some(StaleRecord {
                name,
                missing_files,
            })
        })
        .collect())
}

#[cfg(test)]
#[path = "tests/query_tests.rs"]
mod tests;
