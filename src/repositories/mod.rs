//! 리포지토리 모듈
//!
//! 데이터 액세스 계층입니다. 서비스 계층은 trait으로 추상화된
//! 리포지토리에만 의존하며, 저장 엔진별 타입은 이 계층을 벗어나지 않습니다.

pub mod users;
