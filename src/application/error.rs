//! 재설정(reconfiguration) 입력 오류.

use thiserror::Error;

/// 잘못된 재설정 입력. 호출자에게 동기적으로 반환되며 무시되지 않는다.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown formatter field: {0}")]
    UnknownField(String),

    #[error("unknown color: {0}")]
    UnknownColor(String),

    #[error("unknown format: {0}")]
    UnknownFormat(String),

    #[error("unknown keys in color scheme: {}", .0.join(", "))]
    UnknownLevel(Vec<String>),

    #[error("invalid datetime format: {0:?}")]
    InvalidDatetimeFormat(String),
}
