#![doc = include_str!("../README.md")]

pub mod config;
pub mod demonstrator;
pub mod driver;
pub mod error;
pub mod records;
pub mod registry;
pub mod scenario;
pub mod scenarios;
pub mod wait;

// --- 주요 타입 re-export ---
// 각 모듈의 핵심 타입을 크레이트 루트에서 바로 사용할 수 있도록 합니다.

// 에러
pub use error::{ConfigError, Fault, FaultDemoError, FaultKind};

// 설정
pub use config::{FaultDemoConfig, ScenarioConfig};

// 시연기
pub use demonstrator::{DemoReport, Demonstrator, run_default};

// 시나리오 trait
pub use scenario::{Catch, Outcome, Scenario, ScenarioReport};

// 레지스트리
pub use driver::{Connection, Credentials, Driver, DriverRegistry, TcpProbeDriver};
pub use registry::TypeRegistry;
