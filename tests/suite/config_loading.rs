//! Config file loading and settings resolution.

use std::time::Duration;

use ticklist_engine::{App, AppSettings, ConfigError, DEFAULT_FADE, Priority, TicklistConfig};

use crate::common::config_file;

#[test]
fn missing_file_is_not_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let loaded = TicklistConfig::load_from(&dir.path().join("absent.toml")).expect("load");
    assert!(loaded.is_none());
    assert_eq!(AppSettings::from_config(loaded.as_ref()), AppSettings::default());
}

#[test]
fn full_config_drives_app_settings() {
    let (_dir, path) = config_file(
        r#"
[app]
ascii_only = true
high_contrast = true

[tasks]
default_priority = "High"
fade_ms = 250
"#,
    );
    let config = TicklistConfig::load_from(&path).expect("load").expect("present");
    let settings = AppSettings::from_config(Some(&config));

    assert!(settings.ui_options.ascii_only);
    assert!(settings.ui_options.high_contrast);
    assert!(!settings.ui_options.reduced_motion);
    assert_eq!(settings.default_priority, Priority::High);
    assert_eq!(settings.fade_duration, Duration::from_millis(250));

    let app = App::new(settings);
    assert_eq!(app.draft_priority(), Priority::High);
    assert!(app.ui_options().ascii_only);
}

#[test]
fn partial_config_keeps_defaults() {
    let (_dir, path) = config_file("[app]\nreduced_motion = true\n");
    let config = TicklistConfig::load_from(&path).expect("load").expect("present");
    let settings = AppSettings::from_config(Some(&config));

    assert!(settings.ui_options.reduced_motion);
    assert_eq!(settings.default_priority, Priority::Medium);
    assert_eq!(settings.fade_duration, DEFAULT_FADE);
    assert_eq!(settings.effective_fade(), Duration::ZERO);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = config_file("[tasks\nfade_ms = ");
    let err = TicklistConfig::load_from(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Parse { .. }), "{err:?}");
    assert_eq!(err.path(), &path);
}

#[test]
fn unknown_priority_is_rejected() {
    let (_dir, path) = config_file("[tasks]\ndefault_priority = \"urgent\"\n");
    let err = TicklistConfig::load_from(&path).expect_err("should fail");
    assert!(matches!(err, ConfigError::Invalid { .. }), "{err:?}");
    assert!(err.to_string().contains("urgent"), "{err}");
}

#[test]
fn oversized_fade_is_clamped() {
    let (_dir, path) = config_file("[tasks]\nfade_ms = 600000\n");
    let config = TicklistConfig::load_from(&path).expect("load").expect("present");
    let settings = AppSettings::from_config(Some(&config));
    assert_eq!(settings.fade_duration, Duration::from_secs(10));
}
