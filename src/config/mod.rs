//! 애플리케이션 설정 모듈
//!
//! 환경 변수 기반의 서버 설정을 관리합니다.

pub mod server_config;

pub use server_config::{RateLimitConfig, ServerConfig};
