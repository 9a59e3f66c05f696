//! 고정 크기 레코드 읽기 — 빅엔디안 `i32` 스트림

use std::io::{ErrorKind, Read};

use crate::error::Fault;

/// 레코드 하나의 크기 (바이트)
pub const RECORD_SIZE: usize = 4;

/// 바이트 스트림에서 빅엔디안 `i32` 레코드를 차례로 읽습니다.
///
/// 레코드 도중에 스트림이 끝나면 [`Fault::EndOfFile`]을,
/// 그 밖의 읽기 실패는 [`Fault::Io`]를 반환합니다.
pub struct RecordReader<R> {
    inner: R,
    source: String,
    records: usize,
}

impl<R: Read> RecordReader<R> {
    /// 새 리더를 만듭니다. `source`는 에러 메시지에 쓰이는 이름입니다.
    pub fn new(inner: R, source: impl Into<String>) -> Self {
        Self {
            inner,
            source: source.into(),
            records: 0,
        }
    }

    /// 다음 레코드를 읽습니다.
    pub fn read_i32(&mut self) -> Result<i32, Fault> {
        let mut buf = [0u8; RECORD_SIZE];
        match self.inner.read_exact(&mut buf) {
            Ok(()) => {
                self.records += 1;
                Ok(i32::from_be_bytes(buf))
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Err(Fault::EndOfFile {
                records: self.records,
            }),
            Err(e) => Err(Fault::Io {
                path: self.source.clone(),
                source: e,
            }),
        }
    }

    /// 지금까지 읽은 레코드 수
    pub fn records(&self) -> usize {
        self.records
    }
}
