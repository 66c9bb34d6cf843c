//! Install one mod archive into the addons folder.
//!
//! Steps, in order: validate the archive type, extract into a private scratch
//! folder, pick the payload files, resolve name conflicts, confirm overwrite
//! of an existing record, place the files, persist metadata, patch gameinfo.
//! The scratch folder is removed whatever happens.
//!
//! Anything that fails before placement leaves the addons folder and the
//! metadata untouched. A failure while copying, or while saving metadata, can
//! leave copied files that no record lists.

use super::conflict::{resolve_placements, Placement};
use super::metadata::ModMetadataStore;
use crate::services::archive::{self, ArchiveFormat};
use crate::services::config::GameLayout;
use crate::services::fs_utils::file_utils::{entry_file_name, join_entry, remove_file_if_exists};
use crate::services::gameinfo::{ensure_addons_load_path, PatchOutcome};
use crate::types::{ModError, ModResult};
use serde::Serialize;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

const SCRATCH_PREFIX: &str = "_temp_extract";

/// Decides whether an already-installed mod may be replaced.
///
/// Called synchronously, at most once per install, only when the mod name
/// already has a record.
pub trait OverwriteConfirmation {
    fn decide(&self, mod_name: &str) -> bool;
}

impl<F> OverwriteConfirmation for F
where
    F: Fn(&str) -> bool,
{
    fn decide(&self, mod_name: &str) -> bool {
        self(mod_name)
    }
}

/// State of `gameinfo.gi` after an install.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameInfoStatus {
    Patched,
    AlreadyRegistered,
    /// The file was not found. The mod is installed but the game will not
    /// load it until the user fixes gameinfo by hand.
    Missing(PathBuf),
}

#[derive(Debug, Clone, Serialize)]
pub struct InstallReport {
    pub mod_name: String,
    /// Names placed in the addons folder, after conflict renaming.
    pub installed_files: Vec<String>,
    /// Files of the previous install that were deleted on overwrite.
    pub replaced_files: Vec<String>,
    pub gameinfo: GameInfoStatus,
}

impl InstallReport {
    /// Post-install problem the caller should surface, if any.
    pub fn warning(&self) -> Option<String> {
        match &self.gameinfo {
            GameInfoStatus::Missing(path) => {
                Some(ModError::ConfigMissing(path.clone()).to_string())
            }
            _ => None,
        }
    }
}

/// Mod name for an archive: its file name without the extension, verbatim.
pub fn mod_name_for(archive_path: &Path) -> ModResult<String> {
    archive_path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ModError::UnsupportedFormat(archive_path.to_path_buf()))
}

/// Install `archive_path` under `install_root`.
///
/// `confirm` is consulted only when a mod of the same name is already
/// recorded. Without a collaborator the overwrite goes ahead.
pub fn install_mod(
    archive_path: &Path,
    install_root: &Path,
    layout: &GameLayout,
    confirm: Option<&dyn OverwriteConfirmation>,
) -> ModResult<InstallReport> {
    if ArchiveFormat::from_path(archive_path).is_none() {
        return Err(ModError::UnsupportedFormat(archive_path.to_path_buf()));
    }
    let mod_name = mod_name_for(archive_path)?;

    let addons_dir = layout.addons_dir(install_root);
    fs::create_dir_all(&addons_dir).map_err(|e| ModError::io(&addons_dir, e))?;

    let scratch = tempfile::Builder::new()
        .prefix(SCRATCH_PREFIX)
        .tempdir_in(&addons_dir)
        .map_err(|e| ModError::io(&addons_dir, e))?;

    let job = InstallJob {
        archive_path,
        install_root,
        addons_dir: &addons_dir,
        scratch_dir: scratch.path(),
        layout,
        mod_name,
    };
    let result = job.run(confirm);

    let scratch_path = scratch.path().to_path_buf();
    if let Err(e) = scratch.close() {
        log::warn!(
            "Failed to remove scratch folder {}: {e}",
            scratch_path.display()
        );
    }

    match &result {
        Ok(report) => log::info!(
            "Installed mod '{}' ({} files)",
            report.mod_name,
            report.installed_files.len()
        ),
        Err(e) => log::warn!("Install of {} failed: {e}", archive_path.display()),
    }
    result
}

struct InstallJob<'a> {
    archive_path: &'a Path,
    install_root: &'a Path,
    addons_dir: &'a Path,
    scratch_dir: &'a Path,
    layout: &'a GameLayout,
    mod_name: String,
}

impl InstallJob<'_> {
    fn run(self, confirm: Option<&dyn OverwriteConfirmation>) -> ModResult<InstallReport> {
        let payloads = self.extract_payloads()?;

        let store = ModMetadataStore::for_install(self.install_root, self.layout);
        let mut index = store.load()?;
        let previous = index.get(&self.mod_name).cloned();

        let reusable: HashSet<&str> = previous.iter().flatten().map(String::as_str).collect();
        let placements = resolve_placements(self.addons_dir, &payloads, &reusable)?;

        if previous.is_some() {
            if let Some(confirm) = confirm {
                if !confirm.decide(&self.mod_name) {
                    return Err(ModError::OverwriteDeclined(self.mod_name));
                }
            }
            log::info!("Overwriting existing mod '{}'", self.mod_name);
        }

        let replaced_files = match &previous {
            Some(old_files) => self.remove_previous(old_files)?,
            None => Vec::new(),
        };
        let installed_files = self.place(&placements)?;

        index.insert(self.mod_name.clone(), installed_files.clone());
        store.save(&index)?;

        let gameinfo_path = self.layout.gameinfo_path(self.install_root);
        let gameinfo = match ensure_addons_load_path(&gameinfo_path, self.layout) {
            Ok(PatchOutcome::Patched) => GameInfoStatus::Patched,
            Ok(PatchOutcome::AlreadyRegistered) => GameInfoStatus::AlreadyRegistered,
            Err(ModError::ConfigMissing(path)) => {
                log::warn!("gameinfo not found at {}", path.display());
                GameInfoStatus::Missing(path)
            }
            Err(e) => return Err(e),
        };

        Ok(InstallReport {
            mod_name: self.mod_name,
            installed_files,
            replaced_files,
            gameinfo,
        })
    }

    /// Extract and keep the entries that are payload files, paired with the
    /// bare file name they should take in the addons folder.
    fn extract_payloads(&self) -> ModResult<Vec<(PathBuf, String)>> {
        let entries = archive::extract(self.archive_path, self.scratch_dir)?;

        let payloads: Vec<(PathBuf, String)> = entries
            .into_iter()
            .filter(|entry| self.layout.is_payload(&entry.name) && entry.path.is_file())
            .map(|entry| {
                let file_name = entry_file_name(&entry.name).to_string();
                (entry.path, file_name)
            })
            .collect();

        if payloads.is_empty() {
            return Err(ModError::NoPayloadFound(self.layout.payload_extension.clone()));
        }
        Ok(payloads)
    }

    fn remove_previous(&self, old_files: &[String]) -> ModResult<Vec<String>> {
        let mut removed = Vec::with_capacity(old_files.len());
        for name in old_files {
            let Some(path) = join_entry(self.addons_dir, name) else {
                log::warn!("Ignoring unsafe recorded file name '{name}'");
                continue;
            };
            if remove_file_if_exists(&path).map_err(|e| ModError::io(&path, e))? {
                removed.push(name.clone());
            } else {
                log::warn!("Recorded file already missing: {}", path.display());
            }
        }
        Ok(removed)
    }

    fn place(&self, placements: &[Placement]) -> ModResult<Vec<String>> {
        let mut placed = Vec::with_capacity(placements.len());
        for placement in placements {
            let target = self.addons_dir.join(&placement.file_name);
            fs::copy(&placement.source, &target).map_err(|e| ModError::io(&target, e))?;
            log::info!("Placed {}", placement.file_name);
            placed.push(placement.file_name.clone());
        }
        Ok(placed)
    }
}

#[cfg(test)]
#[path = "tests/installer_tests.rs"]
mod tests;
