pub mod models;

pub use models::*;

use crate::services::fs_utils::file_utils::atomic_write;
use crate::services::game::locator::{find_install_root, InstallDiscovery, SteamRegistry};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// File-backed manager settings (selected install root and game layout).
pub struct ConfigService {
    config_path: PathBuf,
    settings: Mutex<AppSettings>,
}

impl ConfigService {
    /// Load settings from `config_path`, falling back to defaults when the
    /// file is missing or unreadable.
    pub fn new(config_path: PathBuf) -> Self {
        let settings = Self::load_from_file(&config_path);
        Self {
            config_path,
            settings: Mutex::new(settings),
        }
    }

    fn load_from_file(config_path: &PathBuf) -> AppSettings {
        let raw = match fs::read_to_string(config_path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return AppSettings::default(),
            Err(e) => {
                log::error!("Failed to read settings {}: {e}", config_path.display());
                return AppSettings::default();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::error!("Invalid settings file {}: {e}", config_path.display());
            AppSettings::default()
        })
    }

    pub fn get_settings(&self) -> AppSettings {
        self.settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn save_settings(&self, new_settings: AppSettings) -> Result<(), String> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create settings directory: {e}"))?;
        }

        let json = serde_json::to_string_pretty(&new_settings)
            .map_err(|e| format!("Failed to serialize settings: {e}"))?;
        atomic_write(&self.config_path, json.as_bytes())
            .map_err(|e| format!("Failed to write settings: {e}"))?;

        *self
            .settings
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = new_settings;
        Ok(())
    }

    /// Saved install root if it still exists, otherwise Steam discovery.
    pub fn resolve_install_root(&self, registry: &dyn SteamRegistry) -> InstallDiscovery {
        let settings = self.get_settings();
        if let Some(saved) = settings.install_root {
            if saved.is_dir() {
                return InstallDiscovery::Found(saved);
            }
            log::warn!(
                "Saved install root no longer exists: {}; running auto-detect",
                saved.display()
            );
        }
        find_install_root(registry, &settings.layout)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
