//! Domain layer
//! 스타일 토큰, 예외 레코드/분류, 결과 분기 정책을 외부 의존성 없이 표현한다.

pub mod classify;
pub mod exception;
pub mod policy;
pub mod style;
