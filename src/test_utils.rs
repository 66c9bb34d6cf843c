use crate::services::config::GameLayout;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

pub const STOCK_GAMEINFO: &str = "\"GameInfo\"\n{\n\tFileSystem\n\t{\n\t\tSearchPaths\n\t\t{\n\t\t\tGame\tcitadel\n\t\t\tGame\tcore\n\t\t}\n\t}\n}\n";

/// A throwaway install root with `game/citadel/gameinfo.gi` in place.
pub struct TestInstall {
    pub dir: TempDir,
    pub layout: GameLayout,
}

impl TestInstall {
    pub fn new() -> Self {
        INIT.call_once(|| {
            let _ = env_logger::builder().is_test(true).try_init();
        });

        let dir = TempDir::new().expect("Failed to create temp install root");
        let layout = GameLayout::default();
        let game_dir = layout.game_dir(dir.path());
        fs::create_dir_all(&game_dir).expect("Failed to create game dir");
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

    /// Sorted names of everything directly inside the addons folder.
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

    /// Build a ZIP outside the install root.
    pub fn zip(&self, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
        let staging = self.root().join("downloads");
        fs::create_dir_all(&staging).unwrap();
        let zip_path = staging.join(name);
        let file = fs::File::create(&zip_path).unwrap();
        let mut writer = zip::ZipWriter::new(file);
        let options = zip::write::SimpleFileOptions::default()
            .compression_method(zip::CompressionMethod::Stored);

        for (entry_name, content) in files {
            writer.start_file(entry_name.to_string(), options).unwrap();
            writer.write_all(content).unwrap();
        }
        writer.finish().unwrap();
        zip_path
    }

    /// Build a 7z archive outside the install root from staged files.
    pub fn seven_z(&self, name: &str, files: &[(&str, &[u8])]) -> PathBuf {
        let staging = self.root().join("staging").join(name);
        for (entry_name, content) in files {
            let path = staging.join(entry_name);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        let downloads = self.root().join("downloads");
        fs::create_dir_all(&downloads).unwrap();
        let archive_path = downloads.join(name);
        sevenz_rust::compress_to_path(&staging, &archive_path).unwrap();
        archive_path
    }

    /// Copy a committed archive from `tests/fixtures` next to the other downloads.
    pub fn fixture(&self, fixture_name: &str, as_name: &str) -> PathBuf {
        let downloads = self.root().join("downloads");
        fs::create_dir_all(&downloads).unwrap();
        let target = downloads.join(as_name);
        fs::copy(fixture_path(fixture_name), &target).unwrap();
        target
    }
}

/// Path of a committed test archive under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}
