use deadlock_mods_lib::services::config::{AppSettings, ConfigService};
use std::fs;
use tempfile::tempdir;

#[test]
fn save_settings_can_overwrite_existing_config_file() {
    let dir = tempdir().expect("temp dir should be created");
    let config_path = dir.path().join("config.json");
    let service = ConfigService::new(config_path.clone());

    let mut first = service.get_settings();
    first.install_root = Some(dir.path().join("first"));
    service
        .save_settings(first)
        .expect("first save should create config file");

    let mut second = service.get_settings();
    second.install_root = Some(dir.path().join("second"));
    second.layout.payload_extension = "vpk".to_string();

    let second_save = service.save_settings(second.clone());
    assert!(
        second_save.is_ok(),
        "second save should replace existing config file without failing: {second_save:?}"
    );

    let saved_content = fs::read_to_string(&config_path).expect("config should exist");
    let saved_settings: AppSettings =
        serde_json::from_str(&saved_content).expect("saved config should be valid JSON");

    assert_eq!(saved_settings, second);
    assert!(!dir.path().join("config.json.tmp").exists());
}
