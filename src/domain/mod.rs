//! 도메인 모듈
//!
//! 영속 엔티티와 요청/응답 DTO를 정의합니다.
//! 엔티티는 저장소 구현에 독립적이며, DTO는 HTTP 경계에서만 사용됩니다.

pub mod dto;
pub mod entities;
