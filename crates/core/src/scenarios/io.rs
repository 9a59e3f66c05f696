//! 파일 I/O 시나리오 (1–3)

use std::fs::File;
use std::io::{BufRead, BufReader, Read};

use tracing::debug;

use crate::error::{Fault, FaultKind};
use crate::records::RecordReader;
use crate::scenario::{Catch, Scenario};

/// 존재하지 않는 파일에서 한 줄을 읽습니다. 일반 I/O 실패로 잡습니다.
#[derive(Debug, Clone)]
pub struct ReadLineScenario {
    path: String,
}

impl ReadLineScenario {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Scenario for ReadLineScenario {
    fn name(&self) -> &str {
        "read-line-missing-file"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::Io,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let file = File::open(&self.path).map_err(|e| Fault::from_io(&self.path, e))?;
        let mut line = String::new();
        BufReader::new(file)
            .read_line(&mut line)
            .map_err(|e| Fault::from_io(&self.path, e))?;
        debug!(bytes = line.len(), "read line");
        Ok(())
    }
}

/// 존재하지 않는 파일을 바이트 입력으로 엽니다. 파일 없음으로만 잡습니다.
#[derive(Debug, Clone)]
pub struct OpenFileScenario {
    path: String,
}

impl OpenFileScenario {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Scenario for OpenFileScenario {
    fn name(&self) -> &str {
        "open-missing-file"
    }

    fn expected(&self) -> &[Catch] {
        &[Catch {
            label: FaultKind::FileNotFound,
            also: &[],
        }]
    }

    fn attempt(&self) -> Result<(), Fault> {
        let _file = File::open(&self.path).map_err(|e| Fault::from_io(&self.path, e))?;
        Ok(())
    }
}

/// 빈 소스에서 레코드를 실패할 때까지 읽습니다.
///
/// 스트림 끝을 먼저 잡고, 그 밖의 I/O 실패(예: 설정된 파일이 없음)는
/// 일반 I/O로 잡습니다.
#[derive(Debug, Clone)]
pub struct ReadPastEndScenario {
    source: Option<String>,
}

impl ReadPastEndScenario {
    const END_OF_FILE_MESSAGE: &'static str = "End of file reached.";

    /// `source`가 `None`이면 길이 0인 메모리 스트림을 읽습니다.
    pub fn new(source: Option<String>) -> Self {
        Self { source }
    }

    fn drain<R: Read>(reader: R, source: &str) -> Result<(), Fault> {
        let mut records = RecordReader::new(reader, source);
        loop {
            let value = records.read_i32()?;
            debug!(value, read = records.records(), "read record");
        }
    }
}

impl Scenario for ReadPastEndScenario {
    fn name(&self) -> &str {
        "read-past-end"
    }

    fn expected(&self) -> &[Catch] {
        &[
            Catch {
                label: FaultKind::EndOfFile,
                also: &[],
            },
            Catch {
                label: FaultKind::Io,
                also: &[],
            },
        ]
    }

    fn attempt(&self) -> Result<(), Fault> {
        match &self.source {
            Some(path) => {
                let file = File::open(path).map_err(|e| Fault::from_io(path, e))?;
                Self::drain(BufReader::new(file), path)
            }
            None => Self::drain(std::io::empty(), "<empty>"),
        }
    }

    fn describe(&self, fault: &Fault) -> String {
        match fault {
            Fault::EndOfFile { .. } => Self::END_OF_FILE_MESSAGE.to_owned(),
            other => other.to_string(),
        }
    }
}
