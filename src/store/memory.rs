//! In-process stores for exercising handlers without Postgres.

use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Item, ItemStore, NewItem, NewUser, StoreError, User, UserStore};

#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<Vec<User>>,
    items: Mutex<Vec<Item>>,
}

impl MemoryStore {
    pub fn remove_user(&self, id: Uuid) {
        self.users.lock().unwrap().retain(|u| u.id != id);
    }

    pub fn item_count(&self) -> usize {
        self.items.lock().unwrap().len()
    }
}

// Newest first; among equal timestamps the later insert wins.
fn newest_first<'a>(items: impl DoubleEndedIterator<Item = &'a Item>) -> Vec<Item> {
    let mut out: Vec<Item> = items.rev().cloned().collect();
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    out
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }

    async fn create(&self, user: NewUser<'_>) -> Result<User, StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        let created = User {
            id: Uuid::new_v4(),
            name: user.name.map(str::to_owned),
            email: user.email.to_owned(),
            password_hash: user.password_hash.to_owned(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ItemStore for MemoryStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let created = Item {
            id: Uuid::new_v4(),
            title: item.title,
            category: item.category,
            location: item.location,
            description: item.description,
            email: item.email,
            created_at: OffsetDateTime::now_utc(),
            owner: item.owner,
        };
        self.items.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let items = self.items.lock().unwrap();
        Ok(newest_first(items.iter()))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, StoreError> {
        let items = self.items.lock().unwrap();
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Item>, StoreError> {
        let items = self.items.lock().unwrap();
        Ok(newest_first(items.iter().filter(|i| i.owner == owner)))
    }
}
