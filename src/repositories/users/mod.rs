//! 사용자 리포지토리 모듈
//!
//! 사용자 엔티티에 대한 키 기반 저장소 추상화를 정의합니다.
//! 프로덕션 구현은 [`user_repo::MongoUserRepository`]이며,
//! 테스트에서는 인메모리 구현([`memory`])을 사용합니다.

pub mod user_repo;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::user::User;

/// 사용자 영속화 추상 인터페이스
///
/// 서비스 계층이 의존하는 유일한 데이터 액세스 계약입니다.
/// 구현체는 생성자 주입으로 서비스에 전달됩니다.
///
/// # 계약
///
/// - `find_all`: 저장 순서(삽입 순서)대로 전체 사용자 반환
/// - `save`: 식별자가 없으면 삽입 후 식별자를 채워 반환,
///   있으면 해당 레코드를 덮어쓰기
/// - `delete_by_id`: 존재 여부는 확인하지 않음 (서비스 계층 책임)
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 모든 사용자를 저장 순서대로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// 식별자로 사용자를 조회합니다.
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 해당 식별자의 사용자가 존재하는지 확인합니다.
    async fn exists_by_id(&self, id: &str) -> AppResult<bool>;

    /// 해당 이메일을 사용하는 사용자가 존재하는지 확인합니다.
    async fn exists_by_email(&self, email: &str) -> AppResult<bool>;

    /// 사용자를 저장합니다 (삽입 또는 덮어쓰기).
    ///
    /// 식별자가 채워진 영속 형태를 반환합니다.
    async fn save(&self, user: User) -> AppResult<User>;

    /// 식별자로 사용자를 삭제합니다.
    async fn delete_by_id(&self, id: &str) -> AppResult<()>;
}
