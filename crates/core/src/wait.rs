//! 대기 프리미티브 — 인자 검증과 인터럽트를 지원하는 sleep

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::debug;

use crate::error::Fault;

/// 대기 중인 작업을 깨우기 위한 인터럽트 플래그
///
/// 복제본끼리 같은 플래그를 공유합니다.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// 새 플래그 (인터럽트되지 않은 상태)
    pub fn new() -> Self {
        Self::default()
    }

    /// 인터럽트를 요청합니다.
    pub fn interrupt(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// 인터럽트 상태를 읽고 초기화합니다.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// 지정한 밀리초 동안 현재 스레드를 멈춥니다.
///
/// 음수 시간은 대기 전에 [`Fault::IllegalArgument`]로 거부됩니다.
/// 대기 전후에 인터럽트가 요청되어 있으면 [`Fault::Interrupted`]를 반환하고
/// 플래그를 초기화합니다.
pub fn sleep_millis(millis: i64, interrupt: &InterruptFlag) -> Result<(), Fault> {
    let millis = u64::try_from(millis)
        .map_err(|_| Fault::IllegalArgument("timeout value is negative".to_owned()))?;

    if interrupt.take() {
        return Err(Fault::Interrupted);
    }

    debug!(millis, "sleeping");
    std::thread::sleep(Duration::from_millis(millis));

    if interrupt.take() {
        return Err(Fault::Interrupted);
    }
    Ok(())
}
