//! Assignment row and insert types.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A persisted assignment, as returned by the database.
///
/// Field names match the `assignments` table columns; `length` collides with
/// a SQL reserved word and is quoted in every statement that touches it.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Assignment {
    pub id: i32,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub length: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub status: String,
}

/// Column values for one insert, fully resolved by the handler: defaults
/// applied, timestamps stamped, user id assigned.
#[derive(Debug, Clone)]
pub struct NewAssignment {
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub length: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub published_at: DateTime<Utc>,
    pub status: String,
}
