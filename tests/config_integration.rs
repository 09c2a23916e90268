//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use folio::config::AppConfig;
use serial_test::serial;
use std::path::PathBuf;

/// Fresh config directory under the system temp dir
fn config_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("folio-config-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("FOLIO_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("FOLIO_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_default_file_loads() {
    std::env::remove_var("FOLIO_WINDOW__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Dan Mercede");
    assert_eq!(config.field.particle_count, 40);
    assert_eq!(config.site.start_route, "/");
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = config_dir("user");
    std::fs::write(dir.join("default.toml"), "[field]\nparticle_count = 40\n").unwrap();
    std::fs::write(dir.join("user.toml"), "[field]\nparticle_count = 12\n[site]\nstart_route = \"/thoughts\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.field.particle_count, 12);
    assert_eq!(config.site.start_route, "/thoughts");
    // untouched sections keep their defaults
    assert_eq!(config.field.connection_distance, 150.0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_env_beats_user_file() {
    let dir = config_dir("env");
    std::fs::write(dir.join("user.toml"), "[field]\nparticle_count = 12\n").unwrap();
    std::env::set_var("FOLIO_FIELD__PARTICLE_COUNT", "7");

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.field.particle_count, 7);

    std::env::remove_var("FOLIO_FIELD__PARTICLE_COUNT");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_invalid_field_rejected() {
    let dir = config_dir("invalid");
    std::fs::write(dir.join("user.toml"), "[field]\nradius_min = 4.0\nradius_max = 2.0\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(err.to_string().contains("field"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_missing_directory_gives_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.rendering.layer_opacity, 0.4);
}

#[test]
#[serial]
fn test_load_or_default_survives_bad_env() {
    std::env::set_var("FOLIO_FIELD__CONNECTION_DISTANCE", "-5.0");
    let config = AppConfig::load_or_default();
    assert_eq!(config.field.connection_distance, 150.0);
    std::env::remove_var("FOLIO_FIELD__CONNECTION_DISTANCE");
}
