//! HTTP 핸들러 모듈
//!
//! 요청 역직렬화, 필드 검증, 서비스 호출, 응답 직렬화를 담당합니다.

pub mod users;
