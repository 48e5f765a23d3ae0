//! 유스케이스 모음.

pub mod handle_exception;
pub mod inspect_config;
pub mod load_config;
