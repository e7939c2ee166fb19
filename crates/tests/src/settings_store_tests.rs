use pretty_assertions::assert_eq;
use server::config::{read_settings_file, write_settings_file};
use shared_types::AppSettings;

use crate::common::{sample_settings, temp_settings_path};

#[test]
fn settings_round_trip_through_the_file() {
    let path = temp_settings_path();
    let settings = sample_settings();

    write_settings_file(&path, &settings).unwrap();
    let loaded = read_settings_file(&path);

    assert_eq!(loaded, settings);
    assert!(loaded.is_configured());
    assert_eq!(loaded.selected_config().map(|c| c.name.as_str()), Some("Main board"));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn missing_file_yields_unconfigured_defaults() {
    let path = temp_settings_path();

    let loaded = read_settings_file(&path);

    assert_eq!(loaded, AppSettings::default());
    assert!(!loaded.is_configured());
}

#[test]
fn malformed_file_yields_defaults_instead_of_failing() {
    let path = temp_settings_path();
    std::fs::write(&path, "not = [valid").unwrap();

    let loaded = read_settings_file(&path);
    assert_eq!(loaded, AppSettings::default());

    let _ = std::fs::remove_file(&path);
}

#[test]
fn saving_overwrites_previous_contents() {
    let path = temp_settings_path();
    write_settings_file(&path, &sample_settings()).unwrap();

    let mut updated = sample_settings();
    updated.personal_access_token = "ROTATED".to_string();
    updated.project_configs.truncate(1);
    updated.selected_config_id = Some("p1".to_string());
    write_settings_file(&path, &updated).unwrap();

    let loaded = read_settings_file(&path);
    assert_eq!(loaded.personal_access_token, "ROTATED");
    assert_eq!(loaded.project_configs.len(), 1);

    let _ = std::fs::remove_file(&path);
}
