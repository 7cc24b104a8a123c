//! Integration tests for loading and saving `ModeButtonConfig` files.

use modebutton::style::StyleProvider;
use modebutton::{ConfigError, ModeButtonConfig, ThemeMode};

#[test]
fn load_reads_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("modebutton.toml");
    std::fs::write(&path, "theme = \"dark\"\ninner_border = 2\n").unwrap();

    let config = ModeButtonConfig::load(&path).unwrap();

    assert_eq!(config.theme, ThemeMode::Dark);
    assert_eq!(config.inner_border, 2);
    assert_eq!(config.spacing, 6.0);
    assert_eq!(config.style().metrics().inner_border, 2);
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("saved.toml");
    let config = ModeButtonConfig {
        spacing: 3.0,
        border_width: 2.0,
        padding: 1.0,
        inner_border: 0,
        theme: ThemeMode::HighContrast,
    };

    config.save(&path).unwrap();

    assert_eq!(ModeButtonConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    match ModeButtonConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}

#[test]
fn invalid_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "border_width = -1.0\n").unwrap();

    let err = ModeButtonConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { field: "border_width", .. }));
    assert!(err.to_string().contains("border_width"));
}
