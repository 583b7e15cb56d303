//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use math4games::config::AppConfig;
use math4games::math::Vector3;
use math4games::smoke;
use serial_test::serial;

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("M4G_DISPLAY__PRECISION");
    std::env::remove_var("M4G_SMOKE__POINT");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.debug.log_level, "info");
    assert_eq!(config.smoke.rotation_degrees, Vector3::new(0.0, 0.0, 90.0));
    assert!(config.smoke.iterations >= 1);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("M4G_DISPLAY__PRECISION", "6");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.display.precision, 6);
    std::env::remove_var("M4G_DISPLAY__PRECISION");
}

#[test]
#[serial]
fn test_env_override_vector() {
    std::env::set_var("M4G_SMOKE__POINT", "[4.0, 5.0, 6.0]");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("M4G_SMOKE__POINT");

    assert_eq!(config.smoke.point, Vector3::new(4.0, 5.0, 6.0));
    let report = smoke::run(&config.smoke);
    assert_eq!(report.translated, Vector3::new(4.0, 5.0, 6.0));
}

#[test]
#[serial]
fn test_bad_env_value_is_an_error() {
    std::env::set_var("M4G_DISPLAY__PRECISION", "lots");
    let result = AppConfig::load();
    std::env::remove_var("M4G_DISPLAY__PRECISION");

    let err = result.unwrap_err();
    assert!(err.to_string().starts_with("Configuration error:"));
}
