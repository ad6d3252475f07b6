//! Tests for the configuration system: validation, presets, environment
//! parsing and file persistence.

use super::*;
use crate::containers::ContainerKind;
use crate::error::ContainerError;
use std::env;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_default_config() {
    let config = ContainerConfig::default();
    assert_eq!(config.kind, ContainerKind::DynamicArray);
    assert_eq!(config.initial_capacity, 16);
    assert!(config.validate().is_ok());
}

#[test]
fn test_all_presets_valid() {
    assert!(ContainerConfig::performance_preset().validate().is_ok());
    assert!(ContainerConfig::memory_preset().validate().is_ok());
    assert!(ContainerConfig::realtime_preset().validate().is_ok());
    assert!(ContainerConfig::balanced_preset().validate().is_ok());
}

#[test]
fn test_preset_characteristics() {
    let perf = ContainerConfig::performance_preset();
    let mem = ContainerConfig::memory_preset();
    let balanced = ContainerConfig::balanced_preset();

    assert!(perf.initial_capacity > balanced.initial_capacity);
    assert!(mem.initial_capacity < balanced.initial_capacity);
    assert_eq!(balanced, ContainerConfig::default());
}

#[test]
fn test_zero_capacity_rejected() {
    let config = ContainerConfig {
        kind: ContainerKind::ArrayStack,
        initial_capacity: 0,
    };
    assert!(matches!(
        config.validate(),
        Err(ContainerError::Configuration { .. })
    ));
    assert!(matches!(
        config.create::<i32>(),
        Err(ContainerError::Configuration { .. })
    ));
}

#[test]
fn test_for_kind_and_create() {
    for kind in ContainerKind::ALL {
        let config = ContainerConfig::for_kind(kind);
        assert_eq!(config.initial_capacity, ContainerConfig::default().initial_capacity);
        let container = config.create::<u64>().unwrap();
        assert_eq!(container.kind(), kind);
    }
}

#[test]
fn test_env_var_parsing() {
    env::set_var("SOAS_TEST_ENV_CONTAINER_KIND", "linked_queue");
    env::set_var("SOAS_TEST_ENV_CONTAINER_INITIAL_CAPACITY", "64");

    let config = ContainerConfig::from_env_with_prefix("SOAS_TEST_ENV_").unwrap();
    assert_eq!(config.kind, ContainerKind::LinkedQueue);
    assert_eq!(config.initial_capacity, 64);

    env::remove_var("SOAS_TEST_ENV_CONTAINER_KIND");
    env::remove_var("SOAS_TEST_ENV_CONTAINER_INITIAL_CAPACITY");
}

#[test]
fn test_env_var_fallback_on_garbage() {
    env::set_var("SOAS_TEST_BAD_CONTAINER_KIND", "red_black_tree");
    env::set_var("SOAS_TEST_BAD_CONTAINER_INITIAL_CAPACITY", "lots");

    let config = ContainerConfig::from_env_with_prefix("SOAS_TEST_BAD_").unwrap();
    assert_eq!(config, ContainerConfig::default());

    env::remove_var("SOAS_TEST_BAD_CONTAINER_KIND");
    env::remove_var("SOAS_TEST_BAD_CONTAINER_INITIAL_CAPACITY");
}

#[test]
fn test_env_zero_capacity_fails_validation() {
    env::set_var("SOAS_TEST_ZERO_CONTAINER_INITIAL_CAPACITY", "0");

    let result = ContainerConfig::from_env_with_prefix("SOAS_TEST_ZERO_");
    assert!(matches!(result, Err(ContainerError::Configuration { .. })));

    env::remove_var("SOAS_TEST_ZERO_CONTAINER_INITIAL_CAPACITY");
}

#[test]
fn test_file_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("container.json");

    let config = ContainerConfig {
        kind: ContainerKind::BinaryHeap,
        initial_capacity: 128,
    };
    config.save_to_file(&path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"binary_heap\""));

    let loaded = ContainerConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_load_rejects_invalid_file() {
    let dir = tempdir().unwrap();

    let zero = dir.path().join("zero.json");
    fs::write(&zero, r#"{"kind":"dynamic_array","initial_capacity":0}"#).unwrap();
    assert!(matches!(
        ContainerConfig::load_from_file(&zero),
        Err(ContainerError::Configuration { .. })
    ));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "not json").unwrap();
    assert!(matches!(
        ContainerConfig::load_from_file(&garbage),
        Err(ContainerError::Configuration { .. })
    ));

    assert!(ContainerConfig::load_from_file(dir.path().join("missing.json")).is_err());
}
