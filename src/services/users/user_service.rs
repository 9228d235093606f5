//! # 사용자 관리 서비스 구현
//!
//! 사용자 레코드의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 계층 구조상 핸들러와 리포지토리 사이에 위치하며, 다음 비즈니스 규칙을
//! 이 계층에서 강제합니다:
//!
//! - **이메일 유니크성**: 생성 시 이미 사용 중인 이메일이면 거부.
//!   수정 시에는 이메일이 실제로 변경되는 경우에만 중복 검사
//!   (자기 자신의 이메일 유지는 항상 허용).
//! - **존재 검증**: 조회/수정/삭제는 대상이 존재하지 않으면 `NotFound`.
//!   삭제는 멱등이 아니며, 이미 삭제된 식별자에 대한 재호출도 `NotFound`.
//!
//! ## 검증 순서
//!
//! 필드 검증(빈 값, 이메일 형식)은 핸들러에서 먼저 수행되므로,
//! 이 계층에 도달한 요청은 형식상 유효함이 보장됩니다.
//! 여기서는 비즈니스 규칙(중복, 존재 여부)만 검사합니다.
//!
//! ## 의존성 주입
//!
//! 서비스는 [`UserRepository`] trait 객체를 생성자에서 주입받아 소유합니다.
//! 런타임 컨테이너 없이 `main`에서 명시적으로 조립됩니다:
//!
//! ```rust,ignore
//! let repo = Arc::new(MongoUserRepository::new(database));
//! let user_service = UserService::new(repo);
//! ```

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::user::User;
use crate::repositories::users::UserRepository;

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 연산은 `Result<T, AppError>`를 반환하며, 에러는 핸들러 계층에서
/// HTTP 상태 코드로 변환됩니다:
///
/// - `NotFound`: 대상 사용자 없음 → 404
/// - `ConflictError`: 이메일 중복 → 400
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    ///
    /// 생성자 주입으로 전달되는 trait 객체입니다.
    /// 프로덕션에서는 MongoDB 구현, 테스트에서는 인메모리 구현이 주입됩니다.
    user_repo: Arc<dyn UserRepository>,
}

impl UserService {
    /// 주어진 리포지토리 핸들로 서비스를 생성합니다.
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 모든 사용자 목록 조회
    ///
    /// 저장 순서(삽입 순서)대로 전체 사용자의 스냅샷을 반환합니다.
    /// 부수 효과가 없습니다.
    pub async fn list_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 식별자로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO
    /// * `Err(AppError::NotFound)` - 해당 식별자의 사용자가 존재하지 않음
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 생성
    ///
    /// 이메일 중복 검사 후 새 사용자를 영속화하고 뷰를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 식별자가 채워진 생성 사용자 정보
    /// * `Err(AppError::ConflictError)` - 이메일이 이미 사용 중
    ///
    /// # 비즈니스 규칙
    ///
    /// - 이메일은 시스템 전체에서 고유해야 함
    /// - 식별자는 저장소가 할당하며 요청에 포함되지 않음
    pub async fn create_user(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        // 중복 확인
        if self.user_repo.exists_by_email(&request.email).await? {
            return Err(email_in_use(&request.email));
        }

        let user = User::new(request.name, request.email);
        let created = self.user_repo.save(user).await?;

        log::info!("사용자 생성됨: {}", created.id_str());

        Ok(UserResponse::from(created))
    }

    /// 기존 사용자 수정
    ///
    /// `name`/`email`을 요청 값으로 제자리 덮어쓰기합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 수정된 사용자 정보
    /// * `Err(AppError::NotFound)` - 해당 식별자의 사용자가 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 변경하려는 이메일이 다른 사용자에 의해 사용 중
    ///
    /// # 비즈니스 규칙
    ///
    /// 이메일이 실제로 변경되는 경우에만 중복 검사를 수행합니다.
    /// 자기 자신의 현재 이메일을 그대로 보내는 요청은 항상 허용됩니다.
    pub async fn update_user(
        &self,
        id: &str,
        request: UpdateUserRequest,
    ) -> AppResult<UserResponse> {
        let mut user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        // 이메일이 변경되는 경우에만 중복 검사 (자기 자신과의 충돌 없음)
        if user.email != request.email && self.user_repo.exists_by_email(&request.email).await? {
            return Err(email_in_use(&request.email));
        }

        user.name = request.name;
        user.email = request.email;

        let updated = self.user_repo.save(user).await?;

        log::info!("사용자 수정됨: {}", updated.id_str());

        Ok(UserResponse::from(updated))
    }

    /// 사용자 삭제
    ///
    /// # 반환값
    ///
    /// * `Ok(())` - 삭제 성공
    /// * `Err(AppError::NotFound)` - 해당 식별자의 사용자가 존재하지 않음
    ///
    /// # 삭제 정책
    ///
    /// 물리적 삭제이며 복구할 수 없습니다. 멱등이 아니므로
    /// 이미 삭제된 식별자에 대한 두 번째 호출은 `NotFound`로 실패합니다.
    pub async fn delete_user(&self, id: &str) -> AppResult<()> {
        if !self.user_repo.exists_by_id(id).await? {
            return Err(not_found(id));
        }

        self.user_repo.delete_by_id(id).await?;

        log::info!("사용자 삭제됨: {}", id);

        Ok(())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id))
}

fn email_in_use(email: &str) -> AppError {
    AppError::ConflictError(format!("이미 사용 중인 이메일입니다: {}", email))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::users::memory::InMemoryUserRepository;

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::new()))
    }

    fn create_request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    fn update_request(name: &str, email: &str) -> UpdateUserRequest {
        UpdateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    const MISSING_ID: &str = "ffffffffffffffffffffffff";

    #[actix_web::test]
    async fn test_create_then_get_returns_same_user() {
        let service = service();

        let created = service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();

        assert!(!created.id.is_empty());

        let fetched = service.get_user(&created.id).await.unwrap();

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, "John Doe");
        assert_eq!(fetched.email, "john@example.com");
    }

    #[actix_web::test]
    async fn test_create_with_duplicate_email_conflicts() {
        let service = service();

        service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();

        let result = service
            .create_user(create_request("Someone Else", "john@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));

        // 실패한 생성은 아무것도 영속화하지 않는다
        let users = service.list_users().await.unwrap();
        assert_eq!(users.len(), 1);
    }

    #[actix_web::test]
    async fn test_get_unknown_user_is_not_found() {
        let service = service();

        let result = service.get_user(MISSING_ID).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_list_users_returns_all_in_insertion_order() {
        let service = service();

        service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();
        service
            .create_user(create_request("Jane Doe", "jane@example.com"))
            .await
            .unwrap();

        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "John Doe");
        assert_eq!(users[1].name, "Jane Doe");
    }

    #[actix_web::test]
    async fn test_update_overwrites_name_and_email() {
        let service = service();

        let created = service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();

        let updated = service
            .update_user(&created.id, update_request("Updated User", "updated@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Updated User");
        assert_eq!(updated.email, "updated@example.com");

        let fetched = service.get_user(&created.id).await.unwrap();
        assert_eq!(fetched.email, "updated@example.com");
    }

    #[actix_web::test]
    async fn test_update_with_own_email_never_conflicts() {
        let service = service();

        let created = service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();

        // 자신의 현재 이메일을 그대로 보내는 수정은 충돌이 아니다
        let updated = service
            .update_user(&created.id, update_request("Renamed", "john@example.com"))
            .await
            .unwrap();

        assert_eq!(updated.name, "Renamed");
        assert_eq!(updated.email, "john@example.com");
    }

    #[actix_web::test]
    async fn test_update_to_another_users_email_conflicts() {
        let service = service();

        service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();
        let jane = service
            .create_user(create_request("Jane Doe", "jane@example.com"))
            .await
            .unwrap();

        let result = service
            .update_user(&jane.id, update_request("Jane Doe", "john@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
    }

    #[actix_web::test]
    async fn test_update_unknown_user_is_not_found() {
        let service = service();

        let result = service
            .update_user(MISSING_ID, update_request("Ghost", "ghost@example.com"))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_then_get_is_not_found() {
        let service = service();

        let created = service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();

        service.delete_user(&created.id).await.unwrap();

        let result = service.get_user(&created.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_is_not_idempotent() {
        let service = service();

        let created = service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();

        service.delete_user(&created.id).await.unwrap();

        // 이미 삭제된 식별자에 대한 재호출은 NotFound
        let result = service.delete_user(&created.id).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_delete_unknown_user_is_not_found() {
        let service = service();

        let result = service.delete_user(MISSING_ID).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_deleted_email_becomes_available_again() {
        let service = service();

        let created = service
            .create_user(create_request("John Doe", "john@example.com"))
            .await
            .unwrap();
        service.delete_user(&created.id).await.unwrap();

        let recreated = service
            .create_user(create_request("John Again", "john@example.com"))
            .await
            .unwrap();

        assert_ne!(recreated.id, created.id);
    }
}
