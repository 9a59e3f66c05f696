//! 장애 시연 시나리오 — 실행 순서대로 11개
//!
//! | # | 시나리오 | 잡는 장애 |
//! |---|----------|-----------|
//! | 1 | [`ReadLineScenario`] | 일반 I/O |
//! | 2 | [`OpenFileScenario`] | 파일 없음 |
//! | 3 | [`ReadPastEndScenario`] | 스트림 끝, 그 외 I/O |
//! | 4 | [`ConnectScenario`] | 연결 실패 |
//! | 5 | [`TypeLookupScenario`] | 타입 없음 |
//! | 6 | [`DivideScenario`] | 산술 |
//! | 7 | [`NullReferenceScenario`] | 비어 있는 참조 |
//! | 8 | [`IndexScenario`] | 범위 위반 |
//! | 9 | [`CastScenario`] | 잘못된 변환 |
//! | 10 | [`WaitScenario`] | 잘못된 인자, 인터럽트 |
//! | 11 | [`ParseScenario`] | 숫자 형식 |

mod external;
mod io;
mod runtime;

pub use external::{ConnectScenario, TypeLookupScenario};
pub use io::{OpenFileScenario, ReadLineScenario, ReadPastEndScenario};
pub use runtime::{
    CastScenario, DivideScenario, IndexScenario, NullReferenceScenario, ParseScenario,
    WaitScenario,
};

use crate::config::ScenarioConfig;
use crate::scenario::Scenario;

/// 설정으로부터 11개 시나리오를 실행 순서대로 만듭니다.
pub fn build_all(config: &ScenarioConfig) -> Vec<Box<dyn Scenario>> {
    vec![
        Box::new(ReadLineScenario::new(&config.read_line_path)),
        Box::new(OpenFileScenario::new(&config.open_path)),
        Box::new(ReadPastEndScenario::new(config.eof_source.clone())),
        Box::new(ConnectScenario::new(
            &config.database_url,
            &config.database_user,
            &config.database_password,
        )),
        Box::new(TypeLookupScenario::new(&config.type_name)),
        Box::new(DivideScenario::new(config.dividend, config.divisor)),
        Box::new(NullReferenceScenario::new(config.text_reference.clone())),
        Box::new(IndexScenario::new(config.array.clone(), config.index)),
        Box::new(CastScenario::new(config.boxed_value)),
        Box::new(WaitScenario::new(config.wait_millis)),
        Box::new(ParseScenario::new(&config.numeric_text)),
    ]
}
