//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 CRUD 라우트와 인사/헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트 (`/api/users`)
//! - 루트 인사 엔드포인트 (`/`)
//! - 헬스체크 엔드포인트 (`/health`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Root & health check endpoints
    cfg.service(index);
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// 사용자 생성, 조회, 수정, 삭제 API 엔드포인트를 등록합니다.
///
/// # Available Routes
///
/// - `GET /api/users` - 사용자 목록 조회
/// - `GET /api/users/{id}` - 사용자 단건 조회
/// - `POST /api/users` - 사용자 생성
/// - `PUT /api/users/{id}` - 사용자 수정
/// - `DELETE /api/users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"John Doe","email":"john@example.com"}'
/// ```
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 루트 인사 엔드포인트
///
/// 서비스가 살아있는지 간단히 확인할 수 있는 텍스트 응답을 반환합니다.
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/
/// # Hello from User Service!
/// ```
#[actix_web::get("/")]
async fn index() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Hello from User Service!")
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "framework": "Actix-web"
        }
    }))
}
