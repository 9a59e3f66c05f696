//! 설정 관리 — faultdemo.toml 파싱 및 런타임 설정
//!
//! [`FaultDemoConfig`]는 로깅 설정과 각 시나리오의 입력값을 담습니다.
//! 기본값은 모든 시나리오가 예정된 장애를 일으키도록 고정되어 있습니다.
//!
//! # 설정 로딩 우선순위
//! 1. CLI 인자 (최고 우선)
//! 2. 환경변수 (`FAULTDEMO_SCENARIOS_DIVISOR=2` 형식)
//! 3. 설정 파일 (`faultdemo.toml`, 선택)
//! 4. 기본값 (`Default` 구현)
//!
//! # 사용 예시
//! ```no_run
//! # fn example() -> Result<(), faultdemo_core::error::FaultDemoError> {
//! use faultdemo_core::config::FaultDemoConfig;
//!
//! // 파일에서 로드 + 환경변수 오버라이드
//! let config = FaultDemoConfig::load("faultdemo.toml")?;
//!
//! // TOML 문자열에서 직접 파싱
//! let config = FaultDemoConfig::parse("[scenarios]\ndivisor = 0")?;
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, FaultDemoError};

/// faultdemo 통합 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaultDemoConfig {
    /// 일반 설정
    #[serde(default)]
    pub general: GeneralConfig,
    /// 시나리오 입력값
    #[serde(default)]
    pub scenarios: ScenarioConfig,
}

impl FaultDemoConfig {
    /// TOML 파일에서 설정을 로드하고 환경변수 오버라이드를 적용합니다.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FaultDemoError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 설정 파일 없이 기본값에 환경변수 오버라이드만 적용합니다.
    pub fn from_env() -> Result<Self, FaultDemoError> {
        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// TOML 파일에서 설정을 로드합니다 (환경변수 오버라이드 없음).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FaultDemoError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FaultDemoError::Config(ConfigError::FileNotFound {
                    path: path.display().to_string(),
                })
            } else {
                FaultDemoError::Io(e)
            }
        })?;
        let config = Self::parse(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// TOML 문자열에서 설정을 파싱합니다.
    pub fn parse(toml_str: &str) -> Result<Self, FaultDemoError> {
        toml::from_str(toml_str).map_err(|e| {
            FaultDemoError::Config(ConfigError::ParseFailed {
                reason: e.to_string(),
            })
        })
    }

    /// 환경변수로 설정값을 오버라이드합니다.
    ///
    /// 환경변수 네이밍 규칙: `FAULTDEMO_{SECTION}_{FIELD}`
    /// 예: `FAULTDEMO_SCENARIOS_NUMERIC_TEXT=42`
    pub fn apply_env_overrides(&mut self) {
        // General
        override_string(&mut self.general.log_level, "FAULTDEMO_GENERAL_LOG_LEVEL");
        override_string(&mut self.general.log_format, "FAULTDEMO_GENERAL_LOG_FORMAT");

        // I/O
        let s = &mut self.scenarios;
        override_string(&mut s.read_line_path, "FAULTDEMO_SCENARIOS_READ_LINE_PATH");
        override_string(&mut s.open_path, "FAULTDEMO_SCENARIOS_OPEN_PATH");
        override_opt_string(&mut s.eof_source, "FAULTDEMO_SCENARIOS_EOF_SOURCE");

        // External
        override_string(&mut s.database_url, "FAULTDEMO_SCENARIOS_DATABASE_URL");
        override_string(&mut s.database_user, "FAULTDEMO_SCENARIOS_DATABASE_USER");
        override_string(
            &mut s.database_password,
            "FAULTDEMO_SCENARIOS_DATABASE_PASSWORD",
        );
        override_string(&mut s.type_name, "FAULTDEMO_SCENARIOS_TYPE_NAME");

        // Runtime
        override_parsed(&mut s.dividend, "FAULTDEMO_SCENARIOS_DIVIDEND");
        override_parsed(&mut s.divisor, "FAULTDEMO_SCENARIOS_DIVISOR");
        override_opt_string(&mut s.text_reference, "FAULTDEMO_SCENARIOS_TEXT_REFERENCE");
        override_csv_i32(&mut s.array, "FAULTDEMO_SCENARIOS_ARRAY");
        override_parsed(&mut s.index, "FAULTDEMO_SCENARIOS_INDEX");
        override_parsed(&mut s.boxed_value, "FAULTDEMO_SCENARIOS_BOXED_VALUE");
        override_parsed(&mut s.wait_millis, "FAULTDEMO_SCENARIOS_WAIT_MILLIS");
        override_string(&mut s.numeric_text, "FAULTDEMO_SCENARIOS_NUMERIC_TEXT");
    }

    /// 설정값의 유효성을 검증합니다.
    pub fn validate(&self) -> Result<(), FaultDemoError> {
        // log_level 검증
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.general.log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_level".to_owned(),
                reason: format!("must be one of: {}", valid_levels.join(", ")),
            }
            .into());
        }

        // log_format 검증
        let valid_formats = ["json", "pretty"];
        if !valid_formats.contains(&self.general.log_format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "general.log_format".to_owned(),
                reason: format!("must be one of: {}", valid_formats.join(", ")),
            }
            .into());
        }

        // 파일 경로와 이름은 비어 있으면 안 됨
        let required = [
            ("scenarios.read_line_path", &self.scenarios.read_line_path),
            ("scenarios.open_path", &self.scenarios.open_path),
            ("scenarios.database_url", &self.scenarios.database_url),
            ("scenarios.type_name", &self.scenarios.type_name),
        ];
        for (field, value) in required {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_owned(),
                    reason: "must not be empty".to_owned(),
                }
                .into());
            }
        }

        Ok(())
    }
}

/// 일반 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// 로그 레벨 (trace, debug, info, warn, error)
    pub log_level: String,
    /// 로그 형식 (json, pretty)
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_owned(),
            log_format: "pretty".to_owned(),
        }
    }
}

/// 시나리오 입력값
///
/// 기본값은 모두 장애를 일으키는 값입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// 한 줄 읽기를 시도할 파일 (존재하지 않아야 함)
    pub read_line_path: String,
    /// 바이트 입력으로 열 파일 (존재하지 않아야 함)
    pub open_path: String,
    /// 레코드를 읽을 파일. 없으면 길이 0인 메모리 스트림 사용
    pub eof_source: Option<String>,
    /// 연결 URL
    pub database_url: String,
    /// 연결 사용자
    pub database_user: String,
    /// 연결 비밀번호
    pub database_password: String,
    /// 조회할 타입 이름
    pub type_name: String,
    /// 피제수
    pub dividend: i32,
    /// 제수
    pub divisor: i32,
    /// 길이를 구할 문자열 참조. 없으면 비어 있는 참조
    pub text_reference: Option<String>,
    /// 인덱싱할 배열
    pub array: Vec<i32>,
    /// 읽을 인덱스
    pub index: usize,
    /// 문자열로 변환을 시도할 정수 값
    pub boxed_value: i32,
    /// 대기 시간 (밀리초)
    pub wait_millis: i64,
    /// 정수로 파싱할 문자열
    pub numeric_text: String,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            read_line_path: "nonexistentfile.txt".to_owned(),
            open_path: "missingfile.txt".to_owned(),
            eof_source: None,
            database_url: "jdbc:mysql://localhost:3306/invalidDB".to_owned(),
            database_user: "user".to_owned(),
            database_password: "password".to_owned(),
            type_name: "com.unknown.NonExistentClass".to_owned(),
            dividend: 10,
            divisor: 0,
            text_reference: None,
            array: vec![1, 2, 3],
            index: 5,
            boxed_value: 10,
            wait_millis: -1000,
            numeric_text: "NotANumber".to_owned(),
        }
    }
}

fn override_string(target: &mut String, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = val;
    }
}

fn override_opt_string(target: &mut Option<String>, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        *target = (!val.is_empty()).then_some(val);
    }
}

fn override_parsed<T: std::str::FromStr>(target: &mut T, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        match val.trim().parse::<T>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                expected = std::any::type_name::<T>(),
                "failed to parse env var, ignoring"
            ),
        }
    }
}

fn override_csv_i32(target: &mut Vec<i32>, env_key: &str) {
    if let Ok(val) = std::env::var(env_key) {
        let parsed: Result<Vec<i32>, _> = val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<i32>)
            .collect();
        match parsed {
            Ok(values) => *target = values,
            Err(_) => warn!(
                env_key,
                value = val.as_str(),
                "failed to parse integer list from env var, ignoring"
            ),
        }
    }
}
