use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Where things live inside a Deadlock installation.
///
/// Defaults match the retail Steam layout; every field can be overridden from
/// the settings file for relocated or test installs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct GameLayout {
    pub game_id: String,
    pub addons_dir_name: String,
    pub metadata_file_name: String,
    pub gameinfo_file_name: String,
    pub payload_extension: String,
    /// Game folder relative to a Steam library root.
    pub library_subpath: PathBuf,
    /// Presence of this string in gameinfo means addons are already loaded.
    pub gameinfo_marker: String,
    /// Entries written inside the replacement `SearchPaths` block.
    pub search_paths: Vec<String>,
}

impl Default for GameLayout {
    fn default() -> Self {
        Self {
            game_id: "citadel".into(),
            addons_dir_name: "addons".into(),
            metadata_file_name: "installed_mods.json".into(),
            gameinfo_file_name: "gameinfo.gi".into(),
            payload_extension: "vpk".into(),
            library_subpath: ["steamapps", "common", "Deadlock"].iter().collect(),
            gameinfo_marker: "Game citadel/addons".into(),
            search_paths: vec![
                "Mod citadel".into(),
                "Write citadel".into(),
                "Game citadel/addons".into(),
                "Game citadel".into(),
                "Game core".into(),
            ],
        }
    }
}

impl GameLayout {
    /// `<root>/game/<game_id>`
    pub fn game_dir(&self, install_root: &Path) -> PathBuf {
        install_root.join("game").join(&self.game_id)
    }

    /// The plugin directory the game scans for `.vpk` files.
    pub fn addons_dir(&self, install_root: &Path) -> PathBuf {
        self.game_dir(install_root).join(&self.addons_dir_name)
    }

    pub fn metadata_path(&self, install_root: &Path) -> PathBuf {
        self.addons_dir(install_root).join(&self.metadata_file_name)
    }

    pub fn gameinfo_path(&self, install_root: &Path) -> PathBuf {
        self.game_dir(install_root).join(&self.gameinfo_file_name)
    }

    /// Case-insensitive payload extension check on an archive entry name.
    pub fn is_payload(&self, entry_name: &str) -> bool {
        let suffix = format!(".{}", self.payload_extension.to_lowercase());
        entry_name.to_lowercase().ends_with(&suffix)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppSettings {
    /// Install root chosen by the user or found by auto-detection.
    pub install_root: Option<PathBuf>,
    pub layout: GameLayout,
}
