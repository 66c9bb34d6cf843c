//! Deadlock install root discovery through Steam.

use super::library_folders::list_libraries;
use crate::services::config::GameLayout;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome of auto-detection. Not finding the game is a normal result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum InstallDiscovery {
    Found(PathBuf),
    NotFound,
}

impl InstallDiscovery {
    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            InstallDiscovery::Found(path) => Some(path),
            InstallDiscovery::NotFound => None,
        }
    }
}

/// Source of the Steam base install path.
///
/// Injected so discovery can run against a fake Steam tree in tests.
pub trait SteamRegistry {
    fn steam_path(&self) -> Option<PathBuf>;
}

/// Reads the real machine: the registry on Windows, well-known home
/// directory locations elsewhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemSteamRegistry;

impl SteamRegistry for SystemSteamRegistry {
    #[cfg(windows)]
    fn steam_path(&self) -> Option<PathBuf> {
        use winreg::enums::HKEY_CURRENT_USER;
        use winreg::RegKey;

        let hkcu = RegKey::predef(HKEY_CURRENT_USER);
        let key = hkcu.open_subkey(r"Software\Valve\Steam").ok()?;
        let value: String = key.get_value("SteamPath").ok()?;
        Some(PathBuf::from(value))
    }

    #[cfg(not(windows))]
    fn steam_path(&self) -> Option<PathBuf> {
        let home = dirs::home_dir()?;
        let mut candidates = vec![home.join(".steam").join("steam")];
        if let Some(data) = dirs::data_dir() {
            candidates.push(data.join("Steam"));
        }
        candidates.push(home.join(".local").join("share").join("Steam"));

        candidates.into_iter().find(|p| p.is_dir())
    }
}

/// Find the game by checking each Steam library, base install first.
pub fn find_install_root(registry: &dyn SteamRegistry, layout: &GameLayout) -> InstallDiscovery {
    let Some(steam_path) = registry.steam_path() else {
        log::info!("Steam installation not found; skipping auto-detect");
        return InstallDiscovery::NotFound;
    };

    for library in list_libraries(&steam_path) {
        let candidate = library.join(&layout.library_subpath);
        if candidate.is_dir() {
            log::info!("Auto-detected game folder: {}", candidate.display());
            return InstallDiscovery::Found(candidate);
        }
    }

    log::info!(
        "Game not present in any Steam library under {}",
        steam_path.display()
    );
    InstallDiscovery::NotFound
}

#[cfg(test)]
#[path = "tests/locator_tests.rs"]
mod tests;
