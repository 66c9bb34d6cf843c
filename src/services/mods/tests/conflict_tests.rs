use super::*;
use std::fs;
use tempfile::TempDir;

fn payload(name: &str) -> (PathBuf, String) {
    (PathBuf::from("/scratch").join(name), name.to_string())
}

fn names(placements: &[Placement]) -> Vec<&str> {
    placements.iter().map(|p| p.file_name.as_str()).collect()
}

#[test]
fn test_free_name_is_kept() {
    let addons = TempDir::new().unwrap();
    let placements =
        resolve_placements(addons.path(), &[payload("skin.vpk")], &HashSet::new()).unwrap();
    assert_eq!(names(&placements), vec!["skin.vpk"]);
}

#[test]
fn test_existing_file_gets_suffix() {
    let addons = TempDir::new().unwrap();
    fs::write(addons.path().join("skin.vpk"), "old").unwrap();
    fs::write(addons.path().join("skin_01.vpk"), "old").unwrap();

    let placements =
        resolve_placements(addons.path(), &[payload("skin.vpk")], &HashSet::new()).unwrap();
    assert_eq!(names(&placements), vec!["skin_02.vpk"]);
}

#[test]
fn test_same_name_twice_in_one_archive() {
    let addons = TempDir::new().unwrap();
    let payloads = vec![
        (PathBuf::from("/scratch/a/skin.vpk"), "skin.vpk".to_string()),
        (PathBuf::from("/scratch/b/skin.vpk"), "skin.vpk".to_string()),
    ];

    let placements = resolve_placements(addons.path(), &payloads, &HashSet::new()).unwrap();
    assert_eq!(names(&placements), vec!["skin.vpk", "skin_01.vpk"]);
    assert_eq!(placements[1].source, PathBuf::from("/scratch/b/skin.vpk"));
}

#[test]
fn test_reusable_names_count_as_free() {
    let addons = TempDir::new().unwrap();
    fs::write(addons.path().join("skin.vpk"), "previous install").unwrap();

    let reusable: HashSet<&str> = ["skin.vpk"].into_iter().collect();
    let placements = resolve_placements(addons.path(), &[payload("skin.vpk")], &reusable).unwrap();
    assert_eq!(names(&placements), vec!["skin.vpk"]);
}

#[test]
fn test_suffix_before_extension_only_for_last_dot() {
    let addons = TempDir::new().unwrap();
    fs::write(addons.path().join("pak01_dir.v2.vpk"), "x").unwrap();

    let placements =
        resolve_placements(addons.path(), &[payload("pak01_dir.v2.vpk")], &HashSet::new())
            .unwrap();
    assert_eq!(names(&placements), vec!["pak01_dir.v2_01.vpk"]);
}

#[test]
fn test_ninety_nine_suffixes_then_failure() {
    let addons = TempDir::new().unwrap();
    fs::write(addons.path().join("skin.vpk"), "x").unwrap();
    for n in 1..=98 {
        fs::write(addons.path().join(format!("skin_{n:02}.vpk")), "x").unwrap();
    }

    let placements =
        resolve_placements(addons.path(), &[payload("skin.vpk")], &HashSet::new()).unwrap();
    assert_eq!(names(&placements), vec!["skin_99.vpk"]);

    fs::write(addons.path().join("skin_99.vpk"), "x").unwrap();
    let result = resolve_placements(addons.path(), &[payload("skin.vpk")], &HashSet::new());
    match result {
        Err(ModError::TooManyConflicts(name)) => assert_eq!(name, "skin.vpk"),
        other => panic!("Expected TooManyConflicts, got {other:?}"),
    }
}
