//! 외부 자원 시나리오 (4–5) — 데이터베이스 연결, 이름으로 타입 조회

use tracing::debug;

use crate::driver::DriverRegistry;
use crate::error::{Fault, FaultKind};
use crate::registry::TypeRegistry;
use crate::scenario::{Catch, Scenario};

/// 처리할 드라이버가 없는 URL로 연결을 요청합니다.
pub struct ConnectScenario {
    url: String,
    user: String,
    password: String,
    drivers: DriverRegistry,
}

impl ConnectScenario {
    /// 기본 드라이버 레지스트리를 사용합니다.
    pub fn new(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_registry(url, user, password, DriverRegistry::with_defaults())
    }

    pub fn with_registry(
        url: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
        drivers: DriverRegistry,
    ) -> Self {
        Self {
            url: url.into(),
            user: user.into(),
            password: password.into(),
            drivers,
        }
    }
}

impl Scenario for ConnectScenario {
    fn name(&self) -> &str {
        "connect-invalid-database"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::Connection,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let conn = self.drivers.connect(&self.url, &self.user, &self.password)?;
        debug!(peer = conn.target(), user = conn.user(), "connection opened");
        Ok(())
    }
}

/// 등록되지 않은 타입 이름을 조회합니다.
pub struct TypeLookupScenario {
    type_name: String,
    registry: TypeRegistry,
}

impl TypeLookupScenario {
    /// 기본 타입이 등록된 레지스트리를 사용합니다.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self::with_registry(type_name, TypeRegistry::with_builtins())
    }

    pub fn with_registry(type_name: impl Into<String>, registry: TypeRegistry) -> Self {
        Self {
            type_name: type_name.into(),
            registry,
        }
    }
}

impl Scenario for TypeLookupScenario {
    fn name(&self) -> &str {
        "lookup-unknown-type"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::TypeNotFound,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let _instance = self.registry.instantiate(&self.type_name)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::Outcome;

    #[test]
    fn mysql_url_has_no_suitable_driver() {
        let outcome =
            ConnectScenario::new("jdbc:mysql://localhost:3306/invalidDB", "user", "password")
                .run();
        assert_eq!(
            outcome,
            Outcome::Caught {
                kind: FaultKind::Connection,
                raised: FaultKind::Connection,
                message: "No suitable driver found for jdbc:mysql://localhost:3306/invalidDB"
                    .to_owned(),
            }
        );
    }

    #[test]
    fn refused_tcp_target_is_connection_fault() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };
        let outcome = ConnectScenario::new(format!("tcp://{addr}/db"), "user", "password").run();
        assert!(matches!(
            outcome,
            Outcome::Caught {
                kind: FaultKind::Connection,
                ..
            }
        ));
    }

    #[test]
    fn unknown_type_name_is_reported_verbatim() {
        let outcome = TypeLookupScenario::new("com.unknown.NonExistentClass").run();
        assert_eq!(
            outcome,
            Outcome::Caught {
                kind: FaultKind::TypeNotFound,
                raised: FaultKind::TypeNotFound,
                message: "com.unknown.NonExistentClass".to_owned(),
            }
        );
    }

    #[test]
    fn registered_type_name_completes() {
        let mut registry = TypeRegistry::new();
        registry.register_with("demo.Widget", || Box::new(()));
        let outcome = TypeLookupScenario::with_registry("demo.Widget", registry).run();
        assert!(matches!(outcome, Outcome::Completed { .. }));
    }
}
