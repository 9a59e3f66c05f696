//! 데이터베이스 드라이버 레지스트리
//!
//! URL을 받아들이는 [`Driver`]를 차례로 찾아 연결을 시도합니다.
//! 받아들이는 드라이버가 없으면 `No suitable driver found for <url>` 장애가 됩니다.
//! 기본 레지스트리에는 TCP 도달성만 확인하는 [`TcpProbeDriver`]가 등록됩니다.

use std::fmt;
use std::net::{TcpStream, ToSocketAddrs};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::Fault;

/// 접속 자격 증명
///
/// `Debug` 출력에서 비밀번호는 가려집니다.
#[derive(Clone)]
pub struct Credentials {
    user: String,
    password: String,
}

impl Credentials {
    pub fn new(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: password.into(),
        }
    }

    /// 사용자 이름
    pub fn user(&self) -> &str {
        &self.user
    }

    /// 비밀번호가 주어졌는지 여부
    pub fn has_password(&self) -> bool {
        !self.password.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &"***REDACTED***")
            .finish()
    }
}

/// 열린 연결
///
/// 드롭되면 연결이 닫힙니다.
pub trait Connection {
    /// 연결된 대상 주소
    fn target(&self) -> &str;

    /// 연결을 연 사용자
    fn user(&self) -> &str;
}

/// 연결 URL을 처리하는 드라이버
pub trait Driver {
    /// 드라이버 이름
    fn name(&self) -> &str;

    /// 이 드라이버가 URL을 처리할 수 있는지 확인
    fn accepts(&self, url: &str) -> bool;

    /// 연결을 엽니다.
    fn connect(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, Fault>;
}

/// 등록된 드라이버 목록
#[derive(Default)]
pub struct DriverRegistry {
    drivers: Vec<Box<dyn Driver>>,
}

impl DriverRegistry {
    /// 빈 레지스트리
    pub fn new() -> Self {
        Self::default()
    }

    /// [`TcpProbeDriver`]만 등록된 레지스트리
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(TcpProbeDriver::default()));
        registry
    }

    /// 드라이버를 등록합니다.
    pub fn register(&mut self, driver: Box<dyn Driver>) {
        debug!(driver = driver.name(), "registering driver");
        self.drivers.push(driver);
    }

    /// URL을 받아들이는 드라이버로 연결합니다.
    ///
    /// 받아들이는 드라이버가 여럿이면 등록 순서대로 시도하고 첫 성공을 반환합니다.
    /// 모두 실패하면 첫 번째 실패를 반환합니다.
    pub fn connect(
        &self,
        url: &str,
        user: &str,
        password: &str,
    ) -> Result<Box<dyn Connection>, Fault> {
        let credentials = Credentials::new(user, password);
        let mut first_failure = None;

        for driver in self.drivers.iter().filter(|d| d.accepts(url)) {
            match driver.connect(url, &credentials) {
                Ok(conn) => return Ok(conn),
                Err(e) => {
                    warn!(driver = driver.name(), error = %e, "driver failed to connect");
                    first_failure.get_or_insert(e);
                }
            }
        }

        Err(first_failure
            .unwrap_or_else(|| Fault::Connection(format!("No suitable driver found for {url}"))))
    }
}

/// `tcp://host:port[/...]` URL에 대해 TCP 연결만 확인하는 드라이버
#[derive(Debug, Clone)]
pub struct TcpProbeDriver {
    timeout: Duration,
}

impl TcpProbeDriver {
    const SCHEME: &'static str = "tcp://";

    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn authority(url: &str) -> Option<&str> {
        let rest = url.strip_prefix(Self::SCHEME)?;
        let authority = rest.split('/').next().unwrap_or(rest);
        // user:password@host:port 형식의 자격 증명 부분은 무시
        let authority = authority.rsplit('@').next().unwrap_or(authority);
        (!authority.is_empty()).then_some(authority)
    }
}

impl Default for TcpProbeDriver {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

impl Driver for TcpProbeDriver {
    fn name(&self) -> &str {
        "tcp-probe"
    }

    fn accepts(&self, url: &str) -> bool {
        url.starts_with(Self::SCHEME)
    }

    fn connect(
        &self,
        url: &str,
        credentials: &Credentials,
    ) -> Result<Box<dyn Connection>, Fault> {
        let authority = Self::authority(url)
            .ok_or_else(|| Fault::Connection(format!("invalid connection url: {url}")))?;

        let addrs = authority
            .to_socket_addrs()
            .map_err(|e| Fault::Connection(format!("cannot resolve {authority}: {e}")))?;

        let mut last_error = None;
        for addr in addrs {
            match TcpStream::connect_timeout(&addr, self.timeout) {
                Ok(stream) => {
                    debug!(
                        %addr,
                        user = credentials.user(),
                        password_supplied = credentials.has_password(),
                        "tcp probe connected"
                    );
                    return Ok(Box::new(TcpConnection {
                        target: authority.to_owned(),
                        user: credentials.user().to_owned(),
                        _stream: stream,
                    }));
                }
                Err(e) => last_error = Some(e),
            }
        }

        Err(Fault::Connection(match last_error {
            Some(e) => format!("could not connect to {authority}: {e}"),
            None => format!("no addresses for {authority}"),
        }))
    }
}

struct TcpConnection {
    target: String,
    user: String,
    _stream: TcpStream,
}

impl Connection for TcpConnection {
    fn target(&self) -> &str {
        &self.target
    }

    fn user(&self) -> &str {
        &self.user
    }
}
