//! 애플리케이션 공통 코어 모듈
//!
//! 계층 전반에서 사용되는 에러 타입 등 공통 기반을 제공합니다.

pub mod errors;
