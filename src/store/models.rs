use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // argon2 PHC string, never exposed
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

pub struct NewUser<'a> {
    pub name: Option<&'a str>,
    pub email: &'a str,
    pub password_hash: &'a str,
}

/// A lost or found posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: Uuid,
    pub title: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub email: String, // contact address, independent of the owner's account email
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[sqlx(rename = "user_id")]
    pub owner: Uuid,
}

pub struct NewItem {
    pub title: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub email: String,
    pub owner: Uuid,
}
