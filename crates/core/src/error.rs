//! 에러 타입 — 시연 대상 장애 분류와 라이브러리 에러 정의
//!
//! [`Fault`]는 시나리오가 의도적으로 일으키는 장애이고,
//! [`FaultDemoError`]는 설정 로딩이나 출력 중에 실제로 발생하는 에러입니다.
//! 두 계층은 섞이지 않습니다: 시나리오 장애는 항상 시나리오 경계에서 잡힙니다.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 장애 종류
///
/// 시나리오 하나가 일으키고 잡는 장애의 이름 붙은 분류입니다.
/// [`FaultKind::label`]은 출력 줄의 접두어로 쓰이는 고정 문자열입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultKind {
    /// 일반 I/O 실패
    Io,
    /// 파일 없음 (I/O 실패의 특수화)
    FileNotFound,
    /// 스트림 끝 (I/O 실패의 특수화)
    EndOfFile,
    /// 외부 연결(데이터베이스) 실패
    Connection,
    /// 이름으로 타입을 찾지 못함
    TypeNotFound,
    /// 산술 정의역 위반
    Arithmetic,
    /// 비어 있는 참조 접근
    NullReference,
    /// 배열 범위 위반
    OutOfBounds,
    /// 잘못된 타입 변환
    InvalidCast,
    /// 잘못된 인자
    IllegalArgument,
    /// 대기 중 인터럽트
    Interrupted,
    /// 숫자 형식 오류
    NumberFormat,
}

impl FaultKind {
    /// 전체 장애 종류 (시나리오 순서)
    ///
    /// `Interrupted`는 10번 시나리오에서 `IllegalArgument`와 같은 절로 잡힙니다.
    pub const ALL: [FaultKind; 12] = [
        FaultKind::Io,
        FaultKind::FileNotFound,
        FaultKind::EndOfFile,
        FaultKind::Connection,
        FaultKind::TypeNotFound,
        FaultKind::Arithmetic,
        FaultKind::NullReference,
        FaultKind::OutOfBounds,
        FaultKind::InvalidCast,
        FaultKind::IllegalArgument,
        FaultKind::Interrupted,
        FaultKind::NumberFormat,
    ];

    /// `self`가 `family`에 속하는지 확인합니다.
    ///
    /// 파일 없음과 스트림 끝은 일반 I/O 실패의 특수화입니다.
    pub fn is_a(self, family: FaultKind) -> bool {
        self == family
            || (family == FaultKind::Io
                && matches!(self, FaultKind::FileNotFound | FaultKind::EndOfFile))
    }

    /// 출력 줄에 쓰이는 레이블
    pub fn label(self) -> &'static str {
        match self {
            Self::Io => "IOException",
            Self::FileNotFound => "FileNotFoundException",
            Self::EndOfFile => "EOFException",
            Self::Connection => "SQLException",
            Self::TypeNotFound => "ClassNotFoundException",
            Self::Arithmetic => "ArithmeticException",
            Self::NullReference => "NullPointerException",
            Self::OutOfBounds => "ArrayIndexOutOfBoundsException",
            Self::InvalidCast => "ClassCastException",
            Self::IllegalArgument => "IllegalArgumentException",
            Self::Interrupted => "InterruptedException",
            Self::NumberFormat => "NumberFormatException",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 시나리오가 일으키는 장애
///
/// 변형마다 [`FaultKind`] 하나에 대응합니다.
#[derive(Debug, thiserror::Error)]
pub enum Fault {
    /// 일반 I/O 실패
    #[error("{path} ({detail})", detail = os_detail(.source))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 파일 없음
    #[error("{path} ({detail})", detail = os_detail(.source))]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// 읽을 데이터가 더 이상 없음
    #[error("end of stream after {records} record(s)")]
    EndOfFile { records: usize },

    /// 연결 실패
    #[error("{0}")]
    Connection(String),

    /// 등록되지 않은 타입 이름
    #[error("{0}")]
    TypeNotFound(String),

    /// 산술 실패
    #[error("{0}")]
    Arithmetic(String),

    /// 비어 있는 참조
    #[error("cannot invoke \"{operation}\" because \"{binding}\" is null")]
    NullReference {
        binding: &'static str,
        operation: &'static str,
    },

    /// 범위를 벗어난 인덱스
    #[error("index {index} out of bounds for length {len}")]
    OutOfBounds { index: usize, len: usize },

    /// 호환되지 않는 타입으로의 변환
    #[error("{from} cannot be cast to {to}")]
    InvalidCast {
        from: &'static str,
        to: &'static str,
    },

    /// 정의역 밖의 인자
    #[error("{0}")]
    IllegalArgument(String),

    /// 대기 중 인터럽트
    #[error("sleep interrupted")]
    Interrupted,

    /// 숫자 파싱 실패
    #[error("for input string: \"{input}\" ({source})")]
    NumberFormat {
        input: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

impl Fault {
    /// 장애 종류를 반환합니다.
    pub fn kind(&self) -> FaultKind {
        match self {
            Self::Io { .. } => FaultKind::Io,
            Self::FileNotFound { .. } => FaultKind::FileNotFound,
            Self::EndOfFile { .. } => FaultKind::EndOfFile,
            Self::Connection(_) => FaultKind::Connection,
            Self::TypeNotFound(_) => FaultKind::TypeNotFound,
            Self::Arithmetic(_) => FaultKind::Arithmetic,
            Self::NullReference { .. } => FaultKind::NullReference,
            Self::OutOfBounds { .. } => FaultKind::OutOfBounds,
            Self::InvalidCast { .. } => FaultKind::InvalidCast,
            Self::IllegalArgument(_) => FaultKind::IllegalArgument,
            Self::Interrupted => FaultKind::Interrupted,
            Self::NumberFormat { .. } => FaultKind::NumberFormat,
        }
    }

    /// 경로와 I/O 에러로부터 장애를 만듭니다.
    ///
    /// `NotFound`는 [`Fault::FileNotFound`]로, 나머지는 [`Fault::Io`]로 분류합니다.
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path, source }
        } else {
            Self::Io { path, source }
        }
    }
}

/// 플랫폼 에러 설명에서 ` (os error N)` 접미어를 뗀 문구
fn os_detail(source: &std::io::Error) -> String {
    let text = source.to_string();
    match (source.raw_os_error(), text.rfind(" (os error ")) {
        (Some(_), Some(at)) => text[..at].to_owned(),
        _ => text,
    }
}

/// faultdemo 최상위 에러 타입
#[derive(Debug, thiserror::Error)]
pub enum FaultDemoError {
    /// 설정 관련 에러
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// I/O 에러
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// 설정 관련 에러
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// 설정 파일을 찾을 수 없음
    #[error("config file not found: {path}")]
    FileNotFound { path: String },

    /// 설정 파싱 실패
    #[error("failed to parse config: {reason}")]
    ParseFailed { reason: String },

    /// 유효하지 않은 설정 값
    #[error("invalid config value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<_> = FaultKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), FaultKind::ALL.len());
    }

    #[test]
    fn io_family_contains_specializations() {
        assert!(FaultKind::FileNotFound.is_a(FaultKind::Io));
        assert!(FaultKind::EndOfFile.is_a(FaultKind::Io));
        assert!(FaultKind::Io.is_a(FaultKind::Io));
        assert!(!FaultKind::Io.is_a(FaultKind::EndOfFile));
        assert!(!FaultKind::Arithmetic.is_a(FaultKind::Io));
    }

    #[test]
    fn interrupted_has_its_own_kind() {
        assert_eq!(Fault::Interrupted.kind(), FaultKind::Interrupted);
        assert!(!FaultKind::Interrupted.is_a(FaultKind::IllegalArgument));
        assert_eq!(
            Fault::IllegalArgument("negative".to_owned()).kind(),
            FaultKind::IllegalArgument
        );
    }

    #[test]
    fn from_io_distinguishes_not_found() {
        let not_found = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let fault = Fault::from_io("a.txt", not_found);
        assert_eq!(fault.kind(), FaultKind::FileNotFound);

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let fault = Fault::from_io("b.txt", denied);
        assert_eq!(fault.kind(), FaultKind::Io);
        assert_eq!(fault.to_string(), "b.txt (denied)");
    }

    #[cfg(unix)]
    #[test]
    fn os_error_code_is_not_nested_in_message() {
        // ENOENT
        let fault = Fault::from_io(
            "nonexistentfile.txt",
            std::io::Error::from_raw_os_error(2),
        );
        assert_eq!(
            fault.to_string(),
            "nonexistentfile.txt (No such file or directory)"
        );
    }

    #[test]
    fn fault_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FaultKind::OutOfBounds).unwrap();
        assert_eq!(json, "\"out_of_bounds\"");
    }

    #[test]
    fn config_error_display() {
        let err = FaultDemoError::from(ConfigError::InvalidValue {
            field: "general.log_level".to_owned(),
            reason: "bad".to_owned(),
        });
        assert!(err.to_string().contains("general.log_level"));
    }
}
