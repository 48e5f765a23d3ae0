//! Infrastructure layer
//! 콘솔/프로세스/파일시스템과 직접 통신하는 구현체 집합.

pub mod adapters;
pub mod config;
