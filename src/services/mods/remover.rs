use super::metadata::ModMetadataStore;
use crate::services::config::GameLayout;
use crate::services::fs_utils::file_utils::{join_entry, remove_file_if_exists};
use crate::types::{ModError, ModResult};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Serialize)]
pub struct RemovalReport {
    pub mod_name: String,
    pub deleted_files: Vec<String>,
    /// Recorded files that were already gone from the addons folder.
    pub missing_files: Vec<String>,
}

/// Delete every file recorded for `mod_name`, then drop its record.
///
/// Files that are already missing are tolerated and reported back.
pub fn remove_mod(
    mod_name: &str,
    install_root: &Path,
    layout: &GameLayout,
) -> ModResult<RemovalReport> {
    let store = ModMetadataStore::for_install(install_root, layout);
    let mut index = store.load_existing()?.ok_or(ModError::MetadataMissing)?;
    let files = index
        .remove(mod_name)
        .ok_or_else(|| ModError::ModNotFound(mod_name.to_string()))?;

    let addons_dir = layout.addons_dir(install_root);
    let mut deleted_files = Vec::new();
    let mut missing_files = Vec::new();

    for name in files {
        let Some(path) = join_entry(&addons_dir, &name) else {
            log::warn!("Ignoring unsafe recorded file name '{name}'");
            missing_files.push(name);
            continue;
        };
        if remove_file_if_exists(&path).map_err(|e| ModError::io(&path, e))? {
            deleted_files.push(name);
        } else {
            log::warn!("Recorded file already missing: {}", path.display());
            missing_files.push(name);
        }
    }

    store.save(&index)?;
    log::info!(
        "Removed mod '{mod_name}' ({} files deleted, {} already missing)",
        deleted_files.len(),
        missing_files.len()
    );

    Ok(RemovalReport {
        mod_name: mod_name.to_string(),
        deleted_files,
        missing_files,
    })
}

#[cfg(test)]
#[path = "tests/remover_tests.rs"]
mod tests;
