//! # 사용자 생성 요청 DTO
//!
//! 새로운 사용자 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
//! 클라이언트 입력 데이터의 검증과 타입 안전성을 보장합니다.
//!
//! ## 검증 규칙
//!
//! ### 이름 (`name`)
//! - 필수 입력, 공백만으로 구성 불가
//!
//! ### 이메일 (`email`)
//! - 필수 입력, 유효한 이메일 형식
//! - 중복 여부는 서비스 계층에서 별도 검증
//!
//! ## 검증 순서
//!
//! 필드 검증(`validate()`)은 핸들러에서 서비스 호출보다 먼저 수행되므로,
//! 형식이 잘못된 입력은 이메일 중복 검사에 도달하지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_not_blank;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// 식별자(`id`) 필드는 없습니다 — 식별자는 저장소가 할당합니다.
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "John Doe",
///   "email": "john@example.com"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    /// 사용자 이름
    ///
    /// - 필수 입력, 공백만으로는 불가
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 사용자 이메일 주소
    ///
    /// - 유효한 이메일 형식 필수
    /// - 시스템 내 유일성 보장 (서비스 계층에서 검증)
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}
