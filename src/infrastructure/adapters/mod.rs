//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod console_sink;
mod level_printer;
mod process_exit;
mod settings_repository;

pub use console_sink::ConsoleSink;
pub use level_printer::{Level, LevelPrinter, separator};
pub use process_exit::ProcessExit;
pub use settings_repository::JsonSettingsRepository;
