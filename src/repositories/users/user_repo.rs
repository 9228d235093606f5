//! # 사용자 리포지토리 (MongoDB 구현)
//!
//! [`UserRepository`] trait의 MongoDB 구현입니다.
//! 도메인 엔티티와 저장 문서 간의 매핑을 이 파일 안에서 명시적으로 수행하여,
//! `bson`/`mongodb` 타입이 리포지토리 경계 밖으로 새어나가지 않도록 합니다.
//!
//! ## 이메일 유니크 제약
//!
//! 이메일 중복은 서비스 계층의 check-then-act 검사와 별개로,
//! `ensure_indexes`가 생성하는 유니크 인덱스가 최종적으로 보장합니다.
//! 인덱스 위반(E11000)으로 실패한 쓰기는 `ConflictError`로 변환됩니다 —
//! 서비스 계층 검사는 빠른 경로의 친절한 에러일 뿐입니다.
//!
//! ## 컬렉션 스키마
//!
//! ```text
//! users {
//!     _id:   ObjectId   // 저장소 할당, 불변
//!     name:  String
//!     email: String     // 유니크 인덱스
//! }
//! ```

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::user::User;
use crate::repositories::users::UserRepository;

/// 사용자 컬렉션 이름
const COLLECTION_NAME: &str = "users";

/// 사용자 저장 문서 (행 표현)
///
/// MongoDB에 영속되는 형태이며, 도메인 엔티티와는
/// [`document_to_entity`]/[`entity_to_document`]로만 오갑니다.
#[derive(Debug, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    email: String,
}

/// 저장 문서 → 도메인 엔티티 변환
fn document_to_entity(document: UserDocument) -> User {
    User {
        id: document.id.map(|oid| oid.to_hex()),
        name: document.name,
        email: document.email,
    }
}

/// 도메인 엔티티 → 저장 문서 변환
///
/// 엔티티가 식별자를 갖고 있다면 ObjectId로 파싱합니다.
fn entity_to_document(user: &User) -> AppResult<UserDocument> {
    let id = match user.id.as_deref() {
        Some(raw) => Some(parse_object_id(raw)?),
        None => None,
    };

    Ok(UserDocument {
        id,
        name: user.name.clone(),
        email: user.email.clone(),
    })
}

/// 식별자 문자열을 ObjectId로 파싱합니다.
fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 사용자 ID 형식입니다".to_string()))
}

/// MongoDB 쓰기 에러를 애플리케이션 에러로 변환합니다.
///
/// 유니크 인덱스 위반(E11000)은 중복 이메일로 해석합니다.
fn map_write_error(err: mongodb::error::Error) -> AppError {
    if let mongodb::error::ErrorKind::Write(mongodb::error::WriteFailure::WriteError(write_error)) =
        &*err.kind
    {
        if write_error.code == 11000 {
            return AppError::ConflictError("이미 사용 중인 이메일입니다".to_string());
        }
    }

    AppError::DatabaseError(err.to_string())
}

/// 사용자 데이터 액세스 리포지토리 (MongoDB)
///
/// 모든 연산은 단일 문서에 대한 원자적 MongoDB 연산으로 수행됩니다.
pub struct MongoUserRepository {
    db: Database,
}

impl MongoUserRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// 사용자 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<UserDocument> {
        self.db.get_database().collection(COLLECTION_NAME)
    }

    /// 필요한 인덱스를 생성합니다.
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스**
    ///    - 필드: `email` (오름차순)
    ///    - 속성: UNIQUE
    ///    - 목적: check-then-act 경쟁 상황에서도 이메일 유일성을 최종 보장
    pub async fn ensure_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_index(email_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("사용자 컬렉션 인덱스 생성 완료");

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    /// 모든 사용자를 `_id` 오름차순(삽입 순서)으로 반환합니다.
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let documents: Vec<UserDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(documents.into_iter().map(document_to_entity).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;

        let document = self
            .collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(document.map(document_to_entity))
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let document = self
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(document.is_some())
    }

    /// 사용자를 저장합니다.
    ///
    /// 식별자가 없으면 새 문서를 삽입하고 할당된 식별자를 채워 반환합니다.
    /// 식별자가 있으면 해당 문서를 통째로 덮어씁니다.
    async fn save(&self, mut user: User) -> AppResult<User> {
        let document = entity_to_document(&user)?;

        match document.id {
            Some(object_id) => {
                self.collection()
                    .replace_one(doc! { "_id": object_id }, &document)
                    .await
                    .map_err(map_write_error)?;
            }
            None => {
                let result = self
                    .collection()
                    .insert_one(&document)
                    .await
                    .map_err(map_write_error)?;

                let object_id = result.inserted_id.as_object_id().ok_or_else(|| {
                    AppError::InternalError("삽입된 문서의 ID를 확인할 수 없습니다".to_string())
                })?;

                user.id = Some(object_id.to_hex());
            }
        }

        Ok(user)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?;

        self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
