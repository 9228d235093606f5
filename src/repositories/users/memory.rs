//! # 인메모리 사용자 리포지토리 (테스트 전용)
//!
//! [`UserRepository`] trait의 인메모리 구현입니다.
//! 서비스/핸들러 테스트에서 MongoDB 없이 저장소 계약을 재현하는 데 사용됩니다.
//!
//! 식별자는 프로덕션과 동일하게 24자리 16진수 문자열로 할당되며,
//! `BTreeMap` 키 순서가 곧 삽입 순서가 되도록 단조 증가 시퀀스를 사용합니다.

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;

use crate::core::errors::AppResult;
use crate::domain::entities::user::User;
use crate::repositories::users::UserRepository;

/// 테스트용 인메모리 사용자 저장소
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<BTreeMap<String, User>>,
    sequence: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다음 식별자를 할당합니다 (24자리 16진수).
    fn next_id(&self) -> String {
        let n = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        format!("{:024x}", n)
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let users = self.users.lock().unwrap();
        Ok(users.get(id).cloned())
    }

    async fn exists_by_id(&self, id: &str) -> AppResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.contains_key(id))
    }

    async fn exists_by_email(&self, email: &str) -> AppResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.values().any(|user| user.email == email))
    }

    async fn save(&self, mut user: User) -> AppResult<User> {
        let mut users = self.users.lock().unwrap();

        let id = match &user.id {
            Some(id) => id.clone(),
            None => {
                let id = self.next_id();
                user.id = Some(id.clone());
                id
            }
        };

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: &str) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        users.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_save_assigns_sequential_hex_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo
            .save(User::new("A".to_string(), "a@example.com".to_string()))
            .await
            .unwrap();
        let second = repo
            .save(User::new("B".to_string(), "b@example.com".to_string()))
            .await
            .unwrap();

        let first_id = first.id.unwrap();
        let second_id = second.id.unwrap();

        assert!(User::is_valid_id(&first_id));
        assert!(User::is_valid_id(&second_id));
        assert!(first_id < second_id);
    }

    #[actix_web::test]
    async fn test_find_all_preserves_insertion_order() {
        let repo = InMemoryUserRepository::new();

        for (name, email) in [("A", "a@example.com"), ("B", "b@example.com")] {
            repo.save(User::new(name.to_string(), email.to_string()))
                .await
                .unwrap();
        }

        let users = repo.find_all().await.unwrap();

        assert_eq!(users.len(), 2);
        assert_eq!(users[0].name, "A");
        assert_eq!(users[1].name, "B");
    }
}
