#![allow(dead_code)]

use deadlock_mods_lib::GameLayout;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub const STOCK_GAMEINFO: &str = "\"GameInfo\"\n{\n\tFileSystem\n\t{\n\t\tSearchPaths\n\t\t{\n\t\t\tGame\tcitadel\n\t\t\tGame\tcore\n\t\t}\n\t}\n}\n";

pub struct Fixture {
    pub dir: TempDir,
    pub layout: GameLayout,
}

impl Fixture {
    pub fn new() -> Self {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });

        let dir = TempDir::new().expect("Failed to create temp dir");
        let layout = GameLayout::default();
        fs::create_dir_all(layout.game_dir(dir.path())).expect("Failed to create game dir");
        fs::write(layout.gameinfo_path(dir.path()), STOCK_GAMEINFO)
            .expect("Failed to write gameinfo");
        Self { dir, layout }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn addons(&self) -> PathBuf {
        self.layout.addons_dir(self.root())
    }

    pub fn gameinfo(&self) -> String {
        fs::read_to_string(self.layout.gameinfo_path(self.root())).expect("gameinfo readable")
    }

    pub fn metadata_raw(&self) -> Option<String> {
        fs::read_to_string(self.layout.metadata_path(self.root())).ok()
    }

    /// Sorted file names in the addons folder.
    pub fn addons_listing(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.addons()) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .flatten()
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }

    pub fn read_addon(&self, name: &str) -> Vec<u8> {
        fs::read(self.addons().join(name)).expect("addon file readable")
    }

    pub fn zip(&self, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
        let downloads = self.root().join("downloads");
        fs::create_dir_all(&downloads).unwrap();
        let path = downloads.join(name);
        let mut writer = zip::ZipWriter::new(fs::File::create(&path).unwrap());
        let options = zip::write::SimpleFileOptions::default();
        for (entry, content) in files {
            writer.start_file(entry.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
        path
    }
}
