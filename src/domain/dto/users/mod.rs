//! 사용자 관련 DTO 모듈
//!
//! 요청 DTO는 `validator` 기반 필드 검증을 포함하며,
//! 핸들러에서 `validate()`가 비즈니스 로직보다 먼저 호출됩니다.

pub mod request;
pub mod response;
