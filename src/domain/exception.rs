//! 처리 대상 예외(오류) 레코드.
//!
//! 호출 측의 오류 경계에서 직접 만들어 전달한다. 코어는 실행 환경의
//! "현재 예외" 상태를 직접 조회하지 않는다.

use std::any::type_name;
use std::error::Error;
use std::fmt::Write as _;
use std::io;
use std::panic::{Location, PanicHookInfo};

/// 한 번의 호출 동안만 유지되는 예외 정보.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionRecord {
    /// 예외 타입 식별자(예: `ZeroDivisionError`, `ParseIntError`)
    pub type_identity: String,
    /// 발생 위치 줄 번호
    pub line: Option<u32>,
    /// 전체 trace 텍스트
    pub trace: Option<String>,
}

impl ExceptionRecord {
    pub fn new(type_identity: impl Into<String>) -> Self {
        Self {
            type_identity: type_identity.into(),
            line: None,
            trace: None,
        }
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }

    /// Rust 오류 값에서 레코드를 만든다.
    /// - 식별자: 타입 이름의 마지막 경로 조각 (`io::Error`는 `<Kind>Error`)
    /// - 줄 번호: 이 함수를 호출한 위치
    /// - trace: 오류 메시지와 `source()` 체인
    #[track_caller]
    pub fn from_error<E>(err: &E) -> Self
    where
        E: Error + 'static,
    {
        let location = Location::caller();
        let identity = match (err as &(dyn Error + 'static)).downcast_ref::<io::Error>() {
            Some(io_err) => format!("{:?}Error", io_err.kind()),
            None => short_type_name(type_name::<E>()).to_string(),
        };

        Self {
            type_identity: identity,
            line: Some(location.line()),
            trace: Some(render_error_chain(err, location)),
        }
    }

    /// panic hook 정보에서 레코드를 만든다.
    pub fn from_panic(info: &PanicHookInfo<'_>) -> Self {
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Box<dyn Any>".to_string());

        let mut record = Self::new("Panic");
        let mut trace = String::from("panic");
        if let Some(location) = info.location() {
            record.line = Some(location.line());
            let _ = write!(
                trace,
                " at {}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            );
        }
        let _ = write!(trace, "\n{payload}");
        record.trace = Some(trace);
        record
    }
}

/// 안쪽 오류 타입을 그대로 드러내는 포인터 래퍼.
const TRANSPARENT_WRAPPERS: &[&str] = &["Box", "Arc", "Rc"];

/// `core::num::error::ParseIntError` -> `ParseIntError`
/// 제네릭 인자는 제거하고, `Box<E>`/`Arc<E>`/`Rc<E>`는 안쪽 타입 이름을 쓴다.
pub fn short_type_name(full: &str) -> &str {
    let full = full.trim();
    let full = full.strip_prefix("dyn ").unwrap_or(full);
    let (head, generics) = match full.split_once('<') {
        Some((head, rest)) => (head, rest.strip_suffix('>')),
        None => (full, None),
    };
    let name = head.rsplit("::").next().unwrap_or(head);

    if let Some(inner) = generics
        && TRANSPARENT_WRAPPERS.contains(&name)
    {
        // 할당자 인자나 `+ Send` 같은 추가 bound는 무시한다.
        let inner = inner.split([',', '+']).next().unwrap_or(inner);
        return short_type_name(inner);
    }
    name
}

fn render_error_chain(err: &dyn Error, location: &Location<'_>) -> String {
    let mut out = format!(
        "error at {}:{}:{}\n{err}",
        location.file(),
        location.line(),
        location.column()
    );

    let mut source = err.source();
    if source.is_some() {
        out.push_str("\n\nCaused by:");
    }
    let mut idx = 0;
    while let Some(cause) = source {
        let _ = write!(out, "\n    {idx}: {cause}");
        source = cause.source();
        idx += 1;
    }
    out
}
