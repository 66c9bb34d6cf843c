//! `installed_mods.json`: which addon files belong to which mod.
//!
//! Layout on disk is a flat JSON object, pretty-printed with two spaces:
//!
//! ```json
//! {
//!   "cool_skin": ["skin.vpk"],
//!   "other": ["skin_01.vpk", "extra.vpk"]
//! }
//! ```
//!
//! Nothing is cached. Every install or remove call loads the file, edits the
//! map and saves it back in one go.

use crate::services::config::GameLayout;
use crate::services::fs_utils::file_utils::atomic_write;
use crate::types::{ModError, ModResult};
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Mod name to the addon file names it placed, in placement order.
pub type ModIndex = BTreeMap<String, Vec<String>>;

#[derive(Debug, Clone)]
pub struct ModMetadataStore {
    path: PathBuf,
}

impl ModMetadataStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn for_install(install_root: &Path, layout: &GameLayout) -> Self {
        Self::new(layout.metadata_path(install_root))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index, treating a missing file as an empty index.
    pub fn load(&self) -> ModResult<ModIndex> {
        Ok(self.load_existing()?.unwrap_or_default())
    }

    /// Load the index, returning `None` when the file does not exist.
    pub fn load_existing(&self) -> ModResult<Option<ModIndex>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ModError::io(&self.path, e)),
        };

        let index = serde_json::from_str(&raw).map_err(|source| ModError::CorruptMetadata {
            path: self.path.clone(),
            source,
        })?;
        Ok(Some(index))
    }

    /// Atomically replace the file with `index`.
    pub fn save(&self, index: &ModIndex) -> ModResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| ModError::io(parent, e))?;
        }

        let mut json = serde_json::to_string_pretty(index).map_err(|e| {
            ModError::io(&self.path, io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        json.push('\n');

        atomic_write(&self.path, json.as_bytes()).map_err(|e| ModError::io(&self.path, e))?;
        log::debug!("Saved {} mod records to {}", index.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/metadata_tests.rs"]
mod tests;
