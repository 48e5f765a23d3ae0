//! 애플리케이션 계층이 의존하는 포트(추상 인터페이스) 모음.

use anyhow::Result;

use crate::application::config::Settings;

/// 완성된 진단 문자열을 받아 출력/보관하는 외부 협력자.
/// 반환값은 검사하지 않는다.
pub trait Sink: Send + Sync {
    fn write(&self, message: &str);
}

impl<F> Sink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn write(&self, message: &str) {
        self(message)
    }
}

/// 프로세스 종료 능력. 실제 구현은 되돌아오지 않는다.
pub trait ExitHandler: Send + Sync {
    fn exit(&self, code: i32);
}

/// 설정 파일 로딩/점검을 담당하는 저장소 포트.
pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> Result<Settings>;
    fn inspect_pretty_json(&self) -> Result<String>;
}
