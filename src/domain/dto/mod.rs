//! DTO(Data Transfer Object) 모듈
//!
//! HTTP 경계에서 사용되는 요청/응답 데이터 구조를 정의합니다.

pub mod users;
