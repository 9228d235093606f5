//! # 사용자 엔티티
//!
//! 영속 저장되는 사용자 레코드를 표현하는 도메인 엔티티입니다.
//! 저장 엔진(MongoDB) 타입에 의존하지 않으며, 문서 매핑은
//! 리포지토리 경계에서 명시적으로 수행됩니다.
//!
//! ## 생명주기
//!
//! - `create_user` 성공 시 생성 (식별자는 저장소가 할당)
//! - `update_user`로 `name`/`email`이 제자리 덮어쓰기됨
//! - `delete_user`로 제거 (소프트 삭제 없음, 버저닝 없음)
//!
//! ## 불변식
//!
//! - `id`: 저장소가 할당한 고유 식별자, 할당 이후 불변
//! - `email`: 영속된 모든 사용자에 대해 서로 달라야 함

/// 사용자 엔티티
///
/// `id`는 최초 영속화 전에는 `None`이며, 저장소가 24자리 16진수
/// 식별자를 할당한 이후에는 항상 `Some`입니다.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// 저장소가 할당하는 고유 식별자 (할당 후 불변)
    pub id: Option<String>,
    /// 사용자 이름 (공백만으로 구성될 수 없음)
    pub name: String,
    /// 이메일 주소 (형식 검증됨, 시스템 전체에서 유일)
    pub email: String,
}

impl User {
    /// 아직 영속되지 않은 새 사용자를 생성합니다.
    ///
    /// 식별자는 저장소의 `save` 호출 시점에 할당됩니다.
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: None,
            name,
            email,
        }
    }

    /// 사용자 식별자 형식이 유효한지 확인합니다.
    ///
    /// 식별자는 저장소가 할당하는 24자리 16진수 문자열입니다.
    /// HTTP 경계에서 경로 파라미터를 서비스 호출 전에 거르는 데 사용됩니다.
    ///
    /// # 예제
    ///
    /// ```rust,ignore
    /// assert!(User::is_valid_id("507f1f77bcf86cd799439011"));
    /// assert!(!User::is_valid_id("abc"));
    /// assert!(!User::is_valid_id("not-a-hex-identifier-xyz"));
    /// ```
    pub fn is_valid_id(id: &str) -> bool {
        id.len() == 24 && id.chars().all(|c| c.is_ascii_hexdigit())
    }

    /// 식별자를 문자열 슬라이스로 반환합니다.
    ///
    /// 아직 영속되지 않은 사용자는 빈 문자열을 반환합니다.
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }
}
