//! exhandler library root.
//! 예외를 스타일이 적용된 진단 메시지로 바꾸는 설정 해석/메시지 조립 엔진.
//! Clean Architecture 계층(domain/application/infrastructure/interface)을 외부에 노출한다.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interface;

pub use application::config::{
    CallOverride, EffectiveConfig, FormatterUpdate, GlobalConfig, Settings, StyleConfig, resolve,
};
pub use application::compose::{compose, compose_at};
pub use application::error::ConfigError;
pub use application::ports::{ExitHandler, Sink};
pub use application::usecases::handle_exception::{Handler, install_panic_hook};
pub use domain::classify::classify;
pub use domain::exception::ExceptionRecord;
pub use domain::policy::Outcome;
pub use domain::style::{Color, Format, RESET};
pub use infrastructure::adapters::{ConsoleSink, LevelPrinter, ProcessExit};

/// 콘솔 출력과 실제 프로세스 종료를 쓰는 기본 핸들러.
pub fn console_handler(config: GlobalConfig) -> Handler {
    Handler::new(config, Box::new(ConsoleSink), Box::new(ProcessExit))
}
