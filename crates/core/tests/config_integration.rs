//! faultdemo.toml 통합 설정 테스트
//!
//! - faultdemo.toml.example 파싱 테스트
//! - 파일 로딩 / 환경변수 우선순위 테스트
//! - 빈 파일 / 잘못된 형식 에러 테스트

use std::fs;

use serial_test::serial;
use tempfile::TempDir;

use faultdemo_core::config::{FaultDemoConfig, ScenarioConfig};
use faultdemo_core::error::{ConfigError, FaultDemoError};

// =============================================================================
// faultdemo.toml.example 파싱 테스트
// =============================================================================

#[test]
fn example_config_parses_successfully() {
    let content = include_str!("../../../faultdemo.toml.example");
    let config = FaultDemoConfig::parse(content).expect("example config should parse");
    config
        .validate()
        .expect("example config should pass validation");
}

#[test]
fn example_config_matches_defaults() {
    let content = include_str!("../../../faultdemo.toml.example");
    let config = FaultDemoConfig::parse(content).expect("should parse");
    let defaults = ScenarioConfig::default();

    assert_eq!(config.general.log_level, "warn");
    assert_eq!(config.general.log_format, "pretty");
    assert_eq!(config.scenarios.read_line_path, defaults.read_line_path);
    assert_eq!(config.scenarios.open_path, defaults.open_path);
    assert_eq!(config.scenarios.eof_source, defaults.eof_source);
    assert_eq!(config.scenarios.database_url, defaults.database_url);
    assert_eq!(config.scenarios.type_name, defaults.type_name);
    assert_eq!(config.scenarios.dividend, defaults.dividend);
    assert_eq!(config.scenarios.divisor, defaults.divisor);
    assert_eq!(config.scenarios.text_reference, defaults.text_reference);
    assert_eq!(config.scenarios.array, defaults.array);
    assert_eq!(config.scenarios.index, defaults.index);
    assert_eq!(config.scenarios.boxed_value, defaults.boxed_value);
    assert_eq!(config.scenarios.wait_millis, defaults.wait_millis);
    assert_eq!(config.scenarios.numeric_text, defaults.numeric_text);
}

// =============================================================================
// 파일 로딩 테스트
// =============================================================================

#[test]
#[serial]
fn load_reads_file_from_disk() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("faultdemo.toml");
    fs::write(&path, "[scenarios]\ndivisor = 5\n").expect("should write config");

    let config = FaultDemoConfig::load(&path).expect("config should load");
    assert_eq!(config.scenarios.divisor, 5);
}

#[test]
fn missing_file_is_config_file_not_found() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("absent.toml");

    let err = FaultDemoConfig::from_file(&path).expect_err("missing file should fail");
    assert!(matches!(
        err,
        FaultDemoError::Config(ConfigError::FileNotFound { .. })
    ));
}

#[test]
fn empty_file_uses_defaults() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").expect("should write empty file");

    let config = FaultDemoConfig::from_file(&path).expect("empty config should load");
    assert_eq!(config.scenarios.numeric_text, "NotANumber");
}

#[test]
fn invalid_value_in_file_fails_validation() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[general]\nlog_format = \"xml\"\n").expect("should write config");

    let err = FaultDemoConfig::from_file(&path).expect_err("invalid format should fail");
    assert!(matches!(
        err,
        FaultDemoError::Config(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn wrong_value_type_is_parse_failure() {
    let err = FaultDemoConfig::parse("[scenarios]\ndivisor = \"zero\"\n")
        .expect_err("string divisor should fail");
    assert!(matches!(
        err,
        FaultDemoError::Config(ConfigError::ParseFailed { .. })
    ));
}

// =============================================================================
// 환경변수 우선순위 테스트
// =============================================================================

#[test]
#[serial]
fn env_overrides_file_values() {
    let dir = TempDir::new().expect("should create temp dir");
    let path = dir.path().join("faultdemo.toml");
    fs::write(&path, "[scenarios]\nnumeric_text = \"12\"\n").expect("should write config");

    // SAFETY: serial 테스트에서만 환경변수를 조작합니다.
    unsafe {
        std::env::set_var("FAULTDEMO_SCENARIOS_NUMERIC_TEXT", "34");
        std::env::set_var("FAULTDEMO_SCENARIOS_INDEX", "1");
    }

    let config = FaultDemoConfig::load(&path);

    unsafe {
        std::env::remove_var("FAULTDEMO_SCENARIOS_NUMERIC_TEXT");
        std::env::remove_var("FAULTDEMO_SCENARIOS_INDEX");
    }

    let config = config.expect("config should load");
    assert_eq!(config.scenarios.numeric_text, "34");
    assert_eq!(config.scenarios.index, 1);
}

#[test]
#[serial]
fn from_env_validates_overrides() {
    // SAFETY: serial 테스트에서만 환경변수를 조작합니다.
    unsafe { std::env::set_var("FAULTDEMO_GENERAL_LOG_LEVEL", "loud") };
    let result = FaultDemoConfig::from_env();
    unsafe { std::env::remove_var("FAULTDEMO_GENERAL_LOG_LEVEL") };

    let err = result.expect_err("invalid level should fail");
    assert!(err.to_string().contains("general.log_level"));
}
