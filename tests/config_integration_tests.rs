//! Integration tests for ConfigManager and configuration file handling
//!
//! These tests verify:
//! - Configuration loading and saving
//! - Default configuration generation
//! - Partial files falling back to per-field defaults
//! - Invalid YAML being reported instead of silently ignored

use ocrmover::ConfigManager;
use camino::Utf8PathBuf;
use std::fs;
use tempfile::TempDir;

fn create_test_config_dir() -> (TempDir, Utf8PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
    (temp_dir, config_path)
}

#[test]
fn test_create_config_manager() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    assert_eq!(manager.config_dir(), &config_path);
}

#[test]
fn test_config_dir_created_when_missing() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let nested = config_path.join("OcrMover Data");

    ConfigManager::new(&nested).unwrap();

    assert!(nested.is_dir());
}

#[test]
fn test_load_default_user_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let user_config = manager.load_user_config().unwrap();

    assert_eq!(user_config.ocr_settings.languages, vec!["hin", "eng"]);
    assert_eq!(user_config.ocr_settings.tesseract_exe, "tesseract");
    assert_eq!(user_config.ocr_settings.timeout_secs, 0);
    assert!(user_config.mover_settings.clear_after_each_file);
    assert!(!user_config.mover_settings.debug_mode);
}

#[test]
fn test_save_and_load_user_config() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    let mut config = manager.load_user_config().unwrap();
    config.ocr_settings.languages = vec!["eng".to_string()];
    config.ocr_settings.page_segmentation_mode = Some(6);
    config.mover_settings.clear_after_each_file = false;
    manager.save_user_config(&config).unwrap();

    let loaded = manager.load_user_config().unwrap();

    assert_eq!(loaded.ocr_settings.language_arg(), "eng");
    assert_eq!(loaded.ocr_settings.page_segmentation_mode, Some(6));
    assert!(!loaded.mover_settings.clear_after_each_file);
}

#[test]
fn test_yaml_uses_readable_keys() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    manager.ensure_user_config().unwrap();
    let contents = fs::read_to_string(manager.user_config_path()).unwrap();

    assert!(contents.contains("OCR_Settings"));
    assert!(contents.contains("Languages"));
    assert!(contents.contains("Tessdata Dir"));
    assert!(contents.contains("Mover_Settings"));
    assert!(contents.contains("Clear After Each File"));
}

#[test]
fn test_partial_config_file() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(
        manager.user_config_path(),
        "Mover_Settings:\n  Debug Mode: true\n",
    )
    .unwrap();

    let loaded = manager.load_user_config().unwrap();

    assert!(loaded.mover_settings.debug_mode);
    assert!(loaded.mover_settings.clear_after_each_file);
    assert_eq!(loaded.ocr_settings.language_arg(), "hin+eng");
}

#[test]
fn test_ensure_keeps_existing_file() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(
        manager.user_config_path(),
        "OCR_Settings:\n  Timeout Seconds: 45\n",
    )
    .unwrap();

    let config = manager.ensure_user_config().unwrap();

    assert_eq!(config.ocr_settings.timeout_secs, 45);
}

#[test]
fn test_invalid_yaml_is_an_error() {
    let (_temp_dir, config_path) = create_test_config_dir();
    let manager = ConfigManager::new(&config_path).unwrap();

    fs::write(manager.user_config_path(), "OCR_Settings: [unclosed").unwrap();

    let result = manager.load_user_config();
    assert!(result.is_err());
    assert!(format!("{:#}", result.unwrap_err()).contains("Failed to parse user config"));
}
