//! 런타임 장애 시나리오 (6–11)
//!
//! 이 시나리오들은 플랫폼 메시지 대신 고정된 설명 문구를 출력합니다.

use std::any::{Any, type_name};

use tracing::debug;

use crate::error::{Fault, FaultKind};
use crate::scenario::{Catch, Scenario};
use crate::wait::{InterruptFlag, sleep_millis};

/// 정수 나눗셈
#[derive(Debug, Clone)]
pub struct DivideScenario {
    dividend: i32,
    divisor: i32,
}

impl DivideScenario {
    pub fn new(dividend: i32, divisor: i32) -> Self {
        Self { dividend, divisor }
    }
}

impl Scenario for DivideScenario {
    fn name(&self) -> &str {
        "divide-by-zero"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::Arithmetic,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let quotient = self.dividend.checked_div(self.divisor).ok_or_else(|| {
            Fault::Arithmetic(if self.divisor == 0 {
                "/ by zero".to_owned()
            } else {
                "integer overflow".to_owned()
            })
        })?;
        debug!(quotient, "divided");
        Ok(())
    }

    fn describe(&self, fault: &Fault) -> String {
        if self.divisor == 0 {
            "Division by zero.".to_owned()
        } else {
            fault.to_string()
        }
    }
}

/// 비어 있는 문자열 참조의 길이를 구합니다.
#[derive(Debug, Clone)]
pub struct NullReferenceScenario {
    text: Option<String>,
}

impl NullReferenceScenario {
    pub fn new(text: Option<String>) -> Self {
        Self { text }
    }
}

impl Scenario for NullReferenceScenario {
    fn name(&self) -> &str {
        "dereference-null"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::NullReference,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let text = self.text.as_deref().ok_or(Fault::NullReference {
            binding: "text",
            operation: "len()",
        })?;
        debug!(len = text.len(), "measured text");
        Ok(())
    }

    fn describe(&self, _fault: &Fault) -> String {
        "Attempted to access a null reference.".to_owned()
    }
}

/// 배열 길이 이상의 인덱스를 읽습니다.
#[derive(Debug, Clone)]
pub struct IndexScenario {
    values: Vec<i32>,
    index: usize,
}

impl IndexScenario {
    pub fn new(values: Vec<i32>, index: usize) -> Self {
        Self { values, index }
    }
}

impl Scenario for IndexScenario {
    fn name(&self) -> &str {
        "index-out-of-bounds"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::OutOfBounds,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let value = self.values.get(self.index).ok_or(Fault::OutOfBounds {
            index: self.index,
            len: self.values.len(),
        })?;
        debug!(value, "read element");
        Ok(())
    }

    fn describe(&self, _fault: &Fault) -> String {
        "Invalid array index accessed.".to_owned()
    }
}

/// 박싱된 정수를 문자열로 다운캐스트합니다.
#[derive(Debug, Clone)]
pub struct CastScenario {
    value: i32,
}

impl CastScenario {
    pub fn new(value: i32) -> Self {
        Self { value }
    }
}

impl Scenario for CastScenario {
    fn name(&self) -> &str {
        "invalid-cast"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::InvalidCast,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let boxed: Box<dyn Any> = Box::new(self.value);
        let text = boxed.downcast::<String>().map_err(|_| Fault::InvalidCast {
            from: type_name::<i32>(),
            to: type_name::<String>(),
        })?;
        debug!(text = %text, "cast succeeded");
        Ok(())
    }

    fn describe(&self, _fault: &Fault) -> String {
        "Invalid type casting.".to_owned()
    }
}

/// 음수 시간으로 대기합니다.
///
/// 잘못된 인자와 인터럽트는 같은 방식으로 잡힙니다.
#[derive(Debug, Clone)]
pub struct WaitScenario {
    millis: i64,
    interrupt: InterruptFlag,
}

impl WaitScenario {
    pub fn new(millis: i64) -> Self {
        Self::with_interrupt(millis, InterruptFlag::new())
    }

    pub fn with_interrupt(millis: i64, interrupt: InterruptFlag) -> Self {
        Self { millis, interrupt }
    }
}

impl Scenario for WaitScenario {
    fn name(&self) -> &str {
        "wait-invalid-argument"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::IllegalArgument,
            also: &[FaultKind::Interrupted],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        sleep_millis(self.millis, &self.interrupt)
    }

    fn describe(&self, _fault: &Fault) -> String {
        "Invalid argument passed.".to_owned()
    }
}

/// 숫자가 아닌 문자열을 `i32`로 파싱합니다.
#[derive(Debug, Clone)]
pub struct ParseScenario {
    text: String,
}

impl ParseScenario {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl Scenario for ParseScenario {
    fn name(&self) -> &str {
        "parse-malformed-number"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::NumberFormat,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let number = self
            .text
            .parse::<i32>()
            .map_err(|source| Fault::NumberFormat {
                input: self.text.clone(),
                source,
            })?;
        debug!(number, "parsed");
        Ok(())
    }

    fn describe(&self, _fault: &Fault) -> String {
        "Invalid number format.".to_owned()
    }
}
