use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{Item, ItemStore, NewItem, NewUser, StoreError, User, UserStore};

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

fn map_insert_error(e: sqlx::Error) -> StoreError {
    match e.as_database_error() {
        Some(db) if db.is_unique_violation() => StoreError::DuplicateEmail,
        _ => StoreError::Database(e),
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn create(&self, user: NewUser<'_>) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.name)
        .bind(user.email)
        .bind(user.password_hash)
        .fetch_one(&self.db)
        .await
        .map_err(map_insert_error)
    }
}

#[async_trait]
impl ItemStore for PgStore {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            INSERT INTO items (id, title, category, location, description, email, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, category, location, description, email, created_at, user_id
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(item.title)
        .bind(item.category)
        .bind(item.location)
        .bind(item.description)
        .bind(item.email)
        .bind(item.owner)
        .fetch_one(&self.db)
        .await?;
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, category, location, description, email, created_at, user_id
            FROM items
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, StoreError> {
        let item = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, category, location, description, email, created_at, user_id
            FROM items
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(item)
    }

    async fn list_by_owner(&self, owner: Uuid) -> Result<Vec<Item>, StoreError> {
        let rows = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, title, category, location, description, email, created_at, user_id
            FROM items
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(owner)
        .fetch_all(&self.db)
        .await?;
        Ok(rows)
    }
}
