//! # 사용자 수정 요청 DTO
//!
//! 기존 사용자의 `name`/`email`을 전체 덮어쓰기하는 요청 구조입니다.
//! 검증 규칙은 생성 요청과 동일하며, 대상 식별자는 경로 파라미터로 전달되므로
//! 본문에는 포함되지 않습니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::validate_not_blank;

/// 기존 사용자 수정을 위한 요청 DTO
///
/// # JSON 예제
///
/// ```json
/// {
///   "name": "Updated User",
///   "email": "updated@example.com"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    /// 사용자 이름 (기존 값을 덮어씀)
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    /// 사용자 이메일 주소 (기존 값을 덮어씀)
    ///
    /// 기존 이메일과 동일한 값은 항상 허용되며,
    /// 다른 사용자가 사용 중인 값이면 서비스 계층에서 거부됩니다.
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = UpdateUserRequest {
            name: "Updated User".to_string(),
            email: "updated@example.com".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_fail() {
        let request = UpdateUserRequest {
            name: " ".to_string(),
            email: "invalid".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
        assert!(errors.field_errors().contains_key("email"));
    }
}
