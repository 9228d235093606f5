//! # 사용자 응답 DTO
//!
//! 사용자 엔티티의 읽기 전용 프로젝션입니다.
//! 응답 생성 시점에 엔티티로부터 복사되며 이후 변경되지 않습니다.

use serde::{Deserialize, Serialize};

use crate::domain::entities::user::User;

/// 사용자 응답 DTO
///
/// 와이어 계약은 `{id, name, email}` 세 필드로 고정됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, name, email } = user;

        Self {
            // 영속된 엔티티는 항상 id를 가진다
            id: id.unwrap_or_default(),
            name,
            email,
        }
    }
}
