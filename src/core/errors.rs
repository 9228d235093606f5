//! # Application Error Handling System
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror` 기반의 에러 열거형을 `actix_web::ResponseError`와 결합하여
//! 서비스 계층의 결과가 일관된 HTTP 응답으로 변환되도록 보장합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필드 검증 실패, 잘못된 ID 형식 |
//! | `ConflictError` | 400 Bad Request | 중복 이메일 (API 계약상 400으로 응답) |
//! | `NotFound` | 404 Not Found | 리소스 없음 |
//! | `DatabaseError` | 500 Internal Server Error | 데이터베이스 오류 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 모든 에러는 해당 요청에 대해 종결적(terminal)이며 내부 재시도는 없습니다.
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::AppError;
//!
//! async fn create_user(&self, request: CreateUserRequest) -> Result<UserResponse, AppError> {
//!     if self.user_repo.exists_by_email(&request.email).await? {
//!         return Err(AppError::ConflictError(
//!             format!("이미 사용 중인 이메일입니다: {}", request.email)
//!         ));
//!     }
//!     // ...
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// `thiserror`로 `Error` trait을 구현하고, `actix_web::ResponseError`를
/// 구현하여 핸들러에서 `?` 연산자만으로 HTTP 응답 변환이 완료됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 연산 중 발생하는 오류를 나타냅니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러
    ///
    /// 필수 필드 누락, 이메일 형식 오류, 잘못된 ID 형식 등
    /// 클라이언트 입력이 형식 요구사항을 만족하지 않을 때 발생합니다.
    /// 400 Bad Request로 응답됩니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러
    ///
    /// 존재하지 않는 사용자 ID로 조회/수정/삭제를 시도할 때 발생합니다.
    /// 404 Not Found로 응답됩니다.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러
    ///
    /// 이미 사용 중인 이메일로 생성 또는 수정을 시도할 때 발생합니다.
    /// API 계약에 따라 400 Bad Request로 응답됩니다
    /// (잘못된 입력과 동일한 분류로 취급).
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러
    ///
    /// 예상하지 못한 시스템 오류 시 발생합니다.
    /// 500 Internal Server Error로 응답됩니다.
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 `AppError` 변형을 적절한 HTTP 상태 코드와 표준 JSON 응답으로
    /// 변환합니다. 모든 에러 응답은 `{"error": "메시지"}` 형식을 따릅니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        use actix_web::http::StatusCode;

        let status = match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

impl From<validator::ValidationErrors> for AppError {
    /// `validator`의 필드 검증 실패를 필드별 메시지로 펼쳐 변환합니다.
    ///
    /// 핸들러에서 `payload.validate()?` 한 줄로 검증과 400 응답 변환이
    /// 모두 처리되도록 합니다. 필드 이름순으로 정렬하여 응답을 결정적으로
    /// 유지합니다.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, field_errors)| {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            })
            .collect();
        fields.sort();

        AppError::ValidationError(fields.join("; "))
    }
}

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// 다양한 외부 에러 타입에 컨텍스트 메시지를 붙여 `AppError::InternalError`로
/// 변환할 수 있도록 도와줍니다.
///
/// # 예제
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let options = ClientOptions::parse(&uri).await
///     .context("MongoDB URI 파싱 실패")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
