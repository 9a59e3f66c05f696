//! 장애 시연기 — 시나리오를 순서대로 실행하고 보고합니다.
//!
//! [`Demonstrator::run`]은 어떤 장애가 일어나도 실패하지 않습니다.
//! 각 시나리오의 장애는 [`Scenario::run`] 경계 안에서 잡히기 때문입니다.

use std::io::Write;

use serde::Serialize;
use tracing::{error, info};

use crate::config::ScenarioConfig;
use crate::error::FaultDemoError;
use crate::scenario::{Outcome, Scenario, ScenarioReport};
use crate::scenarios;

/// 고정 순서의 시나리오 실행기
pub struct Demonstrator {
    scenarios: Vec<Box<dyn Scenario>>,
}

impl Demonstrator {
    /// 설정으로부터 11개 시나리오를 구성합니다.
    pub fn new(config: &ScenarioConfig) -> Self {
        Self::from_scenarios(scenarios::build_all(config))
    }

    /// 임의의 시나리오 목록으로 구성합니다.
    pub fn from_scenarios(scenarios: Vec<Box<dyn Scenario>>) -> Self {
        Self { scenarios }
    }

    /// 시나리오 수
    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// 모든 시나리오를 실행합니다.
    pub fn run(&self) -> DemoReport {
        let scenarios = self
            .scenarios
            .iter()
            .enumerate()
            .map(|(i, scenario)| ScenarioReport {
                index: i + 1,
                name: scenario.name().to_owned(),
                outcome: scenario.run(),
            })
            .collect();
        let report = DemoReport { scenarios };
        info!(
            total = report.scenarios.len(),
            caught = report.caught_count(),
            "demonstration finished"
        );
        report
    }

    /// 모든 시나리오를 실행하고 시나리오마다 한 줄씩 씁니다.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<DemoReport, FaultDemoError> {
        let report = self.run();
        report.write_lines(writer)?;
        Ok(report)
    }
}

impl Default for Demonstrator {
    fn default() -> Self {
        Self::new(&ScenarioConfig::default())
    }
}

/// 기본 입력으로 시연을 실행하고 결과를 표준 출력에 씁니다.
///
/// 이 함수는 실패하지 않습니다. 표준 출력 쓰기 실패는 로그로만 남깁니다.
pub fn run_default() {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if let Err(e) = Demonstrator::default().write_to(&mut handle) {
        error!(error = %e, "failed to write demonstration report");
    }
}

/// 전체 실행 보고
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    /// 실행 순서대로의 시나리오 보고
    pub scenarios: Vec<ScenarioReport>,
}

impl DemoReport {
    /// 시나리오별 출력 줄
    pub fn lines(&self) -> Vec<String> {
        self.scenarios.iter().map(ScenarioReport::line).collect()
    }

    /// 예정된 장애가 잡힌 시나리오 수
    pub fn caught_count(&self) -> usize {
        self.scenarios
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Caught { .. }))
            .count()
    }

    /// 모든 시나리오가 예정된 장애를 잡았는지 여부
    pub fn all_caught(&self) -> bool {
        self.caught_count() == self.scenarios.len()
    }

    /// 시나리오마다 한 줄씩 씁니다.
    pub fn write_lines(&self, writer: &mut dyn Write) -> std::io::Result<()> {
        for scenario in &self.scenarios {
            writeln!(writer, "{scenario}")?;
        }
        writer.flush()
    }
}
