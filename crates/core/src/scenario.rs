//! 시나리오 trait — 장애 하나를 일으키고 경계에서 잡는 단위
//!
//! 각 시나리오는 [`Scenario::attempt`]에서 실패가 예정된 연산을 수행하고,
//! 제공 메서드 [`Scenario::run`]이 그 결과를 [`Outcome`]으로 바꿉니다.
//! `run`은 절대 실패하지 않으며 장애를 호출자에게 전파하지 않습니다.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{Fault, FaultKind};

/// catch 절 하나
///
/// `label` 종류에 속하는 장애와 `also`에 나열된 종류를 함께 잡으며,
/// 잡힌 장애는 모두 `label`의 레이블로 보고됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Catch {
    pub label: FaultKind,
    pub also: &'static [FaultKind],
}

impl Catch {
    /// `kind`가 이 절에 잡히는지 확인합니다 ([`FaultKind::is_a`]).
    pub fn matches(&self, kind: FaultKind) -> bool {
        kind.is_a(self.label) || self.also.iter().any(|k| kind.is_a(*k))
    }
}

/// 장애 시연 시나리오
pub trait Scenario {
    /// 시나리오 이름
    fn name(&self) -> &str;

    /// 이 시나리오의 catch 절
    ///
    /// 앞선 절이 먼저 검사되며, 장애는 자신을 잡는 첫 번째 절의 레이블로 보고됩니다.
    fn expected(&self) -> &[Catch];

    /// 실패가 예정된 연산을 수행합니다.
    fn attempt(&self) -> Result<(), Fault>;

    /// 잡힌 장애에 대한 설명 문구
    ///
    /// 기본 구현은 플랫폼이 제공한 에러 메시지를 그대로 사용합니다.
    fn describe(&self, fault: &Fault) -> String {
        fault.to_string()
    }

    /// 연산을 시도하고 결과를 경계 안에서 처리합니다.
    fn run(&self) -> Outcome {
        debug!(scenario = self.name(), "attempting fault-inducing operation");

        let fault = match self.attempt() {
            Ok(()) => {
                let expected = self
                    .expected()
                    .first()
                    .map_or(FaultKind::Io, |clause| clause.label);
                warn!(
                    scenario = self.name(),
                    expected = %expected,
                    "operation completed without raising a fault"
                );
                return Outcome::Completed { expected };
            }
            Err(fault) => fault,
        };

        let kind = fault.kind();
        match self.expected().iter().find(|clause| clause.matches(kind)) {
            Some(clause) => {
                info!(
                    scenario = self.name(),
                    kind = %clause.label,
                    raised = %kind,
                    error = %fault,
                    "fault caught"
                );
                Outcome::Caught {
                    kind: clause.label,
                    raised: kind,
                    message: self.describe(&fault),
                }
            }
            None => {
                warn!(
                    scenario = self.name(),
                    kind = %kind,
                    error = %fault,
                    "unexpected fault suppressed at scenario boundary"
                );
                Outcome::Unexpected {
                    kind,
                    message: fault.to_string(),
                }
            }
        }
    }
}

/// 시나리오 실행 결과
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// 예정된 장애가 잡힘
    ///
    /// `kind`는 잡은 절의 레이블, `raised`는 실제로 발생한 종류입니다.
    Caught {
        kind: FaultKind,
        raised: FaultKind,
        message: String,
    },
    /// 허용 목록 밖의 장애가 잡힘
    Unexpected { kind: FaultKind, message: String },
    /// 연산이 성공함 (유효한 입력이 설정된 경우)
    Completed { expected: FaultKind },
}

/// 시나리오 하나의 보고
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// 1부터 시작하는 실행 순번
    pub index: usize,
    /// 시나리오 이름
    pub name: String,
    /// 실행 결과
    pub outcome: Outcome,
}

impl ScenarioReport {
    /// 표준 출력에 쓰이는 한 줄
    pub fn line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            Outcome::Caught { kind, message, .. } | Outcome::Unexpected { kind, message } => {
                write!(f, "{} caught: {}", kind.label(), message)
            }
            Outcome::Completed { expected } => write!(
                f,
                "{} not raised: {} completed normally.",
                expected.label(),
                self.name
            ),
        }
    }
}
