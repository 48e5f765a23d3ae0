//! 콘솔 출력 sink 어댑터.

use std::io;

use crossterm::execute;
use crossterm::style::Print;

use crate::application::ports::Sink;

/// 완성된 메시지를 stdout에 한 줄로 출력하는 기본 sink.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl Sink for ConsoleSink {
    fn write(&self, message: &str) {
        let mut out = io::stdout().lock();
        // 출력 실패(닫힌 파이프 등)는 sink 계약상 호출자에게 전달하지 않는다.
        if let Err(err) = execute!(out, Print(message), Print("\n")) {
            tracing::warn!(%err, "failed to write diagnostic to stdout");
        }
    }
}
