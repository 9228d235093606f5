//! 서비스 모듈
//!
//! 비즈니스 로직 계층입니다.

pub mod users;
