//! 프로세스 종료 포트 구현 어댑터.

use crate::application::ports::ExitHandler;

/// `std::process::exit`로 즉시 종료한다. 되돌아오지 않는다.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessExit;

impl ExitHandler for ProcessExit {
    fn exit(&self, code: i32) {
        tracing::debug!(code, "terminating process");
        std::process::exit(code)
    }
}
