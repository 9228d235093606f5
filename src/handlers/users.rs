//! # User Management HTTP Handlers
//!
//! 사용자 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! CRUD(Create, Read, Update, Delete) 작업을 지원하며,
//! RESTful API 설계 원칙을 따릅니다.
//!
//! ## 구현된 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 성공 상태 코드 |
//! |--------|------|------|----------------|
//! | `GET` | `/api/users` | 사용자 목록 조회 | 200 OK |
//! | `GET` | `/api/users/{id}` | 사용자 단건 조회 | 200 OK |
//! | `POST` | `/api/users` | 새 사용자 생성 | 201 Created |
//! | `PUT` | `/api/users/{id}` | 사용자 수정 | 200 OK |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 | 204 No Content |
//!
//! ## 에러 응답
//!
//! | 상황 | 상태 코드 |
//! |------|-----------|
//! | 필드 검증 실패 (빈 이름, 잘못된 이메일 형식) | 400 |
//! | 잘못된 경로 식별자 형식 | 400 |
//! | 이메일 중복 | 400 |
//! | 대상 사용자 없음 | 404 |
//!
//! ## 검증 순서
//!
//! 본문 필드 검증(`payload.validate()`)과 경로 식별자 형식 검증은
//! 서비스 호출보다 먼저 수행됩니다. 형식이 잘못된 입력은
//! 비즈니스 규칙 검사(이메일 중복 등)에 도달하지 않습니다.

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::core::errors::AppError;
use crate::domain::dto::users::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::entities::user::User;
use crate::services::users::user_service::UserService;

/// 경로 식별자 형식을 서비스 호출 전에 검증합니다.
///
/// 형식이 잘못된 식별자는 400으로 거부되며 서비스 계층에 도달하지 않습니다.
fn validate_user_id(id: &str) -> Result<(), AppError> {
    if !User::is_valid_id(id) {
        return Err(AppError::ValidationError(
            "유효하지 않은 사용자 ID 형식입니다".to_string(),
        ));
    }
    Ok(())
}

/// 사용자 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/users`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// [
///   { "id": "507f1f77bcf86cd799439011", "name": "John Doe", "email": "john@example.com" }
/// ]
/// ```
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/users/{user_id}`
///
/// # 응답
///
/// ## 성공 (200 OK)
/// ```json
/// { "id": "507f1f77bcf86cd799439011", "name": "John Doe", "email": "john@example.com" }
/// ```
///
/// ## 실패 사례
///
/// - 사용자 없음 (404 Not Found)
/// - 잘못된 ID 형식 (400 Bad Request)
#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    validate_user_id(&user_id)?;

    let user = service.get_user(&user_id).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 생성 핸들러
///
/// 새로운 사용자를 생성합니다. 이메일의 고유성은 서비스 계층에서 검증됩니다.
///
/// # 엔드포인트
///
/// `POST /api/users`
///
/// # 요청 본문
///
/// ```json
/// { "name": "John Doe", "email": "john@example.com" }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// { "id": "507f1f77bcf86cd799439011", "name": "John Doe", "email": "john@example.com" }
/// ```
///
/// ## 실패 사례 (400 Bad Request)
///
/// - 빈 이름 또는 잘못된 이메일 형식
/// - 이미 사용 중인 이메일
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    // 필드 검증은 비즈니스 규칙 검증보다 먼저 수행된다
    payload.validate()?;

    let response = service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 수정 핸들러
///
/// 지정된 사용자의 `name`/`email`을 요청 본문 값으로 덮어씁니다.
///
/// # 엔드포인트
///
/// `PUT /api/users/{user_id}`
///
/// # 요청 본문
///
/// ```json
/// { "name": "Updated User", "email": "updated@example.com" }
/// ```
///
/// # 응답
///
/// ## 성공 (200 OK)
/// 수정된 사용자 객체를 반환합니다.
///
/// ## 실패 사례
///
/// - 필드 검증 실패 또는 이메일 중복 (400 Bad Request)
/// - 대상 사용자 없음 (404 Not Found)
///
/// 자기 자신의 현재 이메일을 그대로 보내는 요청은 충돌로 처리되지 않습니다.
#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    validate_user_id(&user_id)?;
    payload.validate()?;

    let response = service.update_user(&user_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// 지정된 사용자를 영구적으로 삭제합니다. 복구할 수 없습니다.
///
/// # 엔드포인트
///
/// `DELETE /api/users/{user_id}`
///
/// # 응답
///
/// - 성공: 204 No Content (본문 없음)
/// - 대상 사용자 없음: 404 Not Found
///
/// 삭제는 멱등이 아니므로 같은 식별자에 대한 두 번째 호출은 404입니다.
#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    validate_user_id(&user_id)?;

    service.delete_user(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
