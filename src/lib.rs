//! 사용자 디렉토리 서비스 백엔드
//!
//! Rust 기반의 사용자 관리 REST 서비스입니다.
//! 사용자 레코드의 생성/조회/수정/삭제(CRUD)와
//! 이메일 유니크 제약, 존재 여부 검증 등의 비즈니스 규칙을 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 생성, 단건/목록 조회, 수정, 삭제
//! - **입력 검증**: validator 기반 필드 검증 (비즈니스 검증 전에 수행)
//! - **이메일 유니크**: 서비스 계층 검사 + MongoDB 유니크 인덱스 이중 방어
//! - **MongoDB**: 사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 필드 검증
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (유니크/존재 검증)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait 추상화)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_service_backend::repositories::users::user_repo::MongoUserRepository;
//! use user_service_backend::services::users::user_service::UserService;
//!
//! // 생성자 주입: 서비스는 리포지토리 핸들을 소유한다
//! let repo = Arc::new(MongoUserRepository::new(database));
//! let user_service = UserService::new(repo);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
