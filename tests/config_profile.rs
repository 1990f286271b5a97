//! config.toml / 입력 프로필 저장·로드 테스트.
use std::fs;
use std::path::PathBuf;

use india_co2_estimator::config::{self, Config, ConfigError};
use india_co2_estimator::emission::{compute, EmissionInput};

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("india_co2_estimator_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("scratch dir");
    dir.join(name)
}

#[test]
fn missing_config_is_created_with_defaults() {
    let path = scratch("fresh_config.toml");
    let _ = fs::remove_file(&path);
    let cfg = config::load_or_create(&path).expect("create");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    assert_eq!(config::load_from(&path).expect("reload"), cfg);
}

#[test]
fn profile_round_trip_keeps_result() {
    let path = scratch("profile.toml");
    let input = EmissionInput::default().with_diet("Eggetarian");
    config::save_profile(&path, &input).expect("save");
    let loaded = config::load_profile(&path).expect("load");
    assert_eq!(loaded, input);
    assert_eq!(compute(&loaded), compute(&input));
}

#[test]
fn profile_with_unknown_diet_loads_but_fails_to_compute() {
    let path = scratch("vegan.toml");
    fs::write(&path, "[diet]\ndiet_type = \"Vegan\"\n").expect("write");
    let loaded = config::load_profile(&path).expect("load");
    assert!(compute(&loaded).is_err());
}

#[test]
fn malformed_profile_is_parse_error() {
    let path = scratch("broken.toml");
    fs::write(&path, "[transport\ncar_km_per_week = ").expect("write");
    assert!(matches!(
        config::load_profile(&path),
        Err(ConfigError::Parse(_))
    ));
}

#[test]
fn missing_profile_is_io_error() {
    let path = scratch("does_not_exist.toml");
    assert!(matches!(
        config::load_profile(&path),
        Err(ConfigError::Io(_))
    ));
}
