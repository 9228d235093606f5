//! 사용자 요청 DTO 모듈
//!
//! 생성/수정 커맨드 객체와 공용 필드 검증 함수를 제공합니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserRequest;
pub use update_user::UpdateUserRequest;

use validator::ValidationError;

/// 공백 문자열을 거부하는 공용 검증 함수
///
/// `@NotBlank` 계약: 값이 비어 있거나 공백 문자만으로 구성된 경우 실패합니다.
/// 이름 필드처럼 "존재하지만 의미 없는" 입력을 걸러내는 데 사용됩니다.
///
/// # 에러 코드
///
/// - `blank`: 값이 비어 있거나 공백뿐인 경우
pub(crate) fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("필수 입력 항목입니다".into()));
    }
    Ok(())
}
