//! Postgres-backed assignment store.
//!
//! The `assignments` table is an external collaborator — this service never
//! creates or migrates it. Expected shape:
//!
//! ```sql
//! CREATE TABLE assignments (
//!     id           serial PRIMARY KEY,
//!     user_id      integer NOT NULL,
//!     title        text NOT NULL,
//!     content      text NOT NULL,
//!     category     text,
//!     "length"     integer,
//!     created_at   timestamptz NOT NULL,
//!     updated_at   timestamptz NOT NULL,
//!     published_at timestamptz NOT NULL,
//!     status       text NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use super::{AssignmentStore, StoreError};
use crate::config::DatabaseConfig;
use crate::model::{Assignment, NewAssignment};

/// Single parameterized insert returning the full persisted row.
///
/// `length` must stay quoted: unquoted it is a reserved word in Postgres.
const INSERT_ASSIGNMENT: &str = r#"
INSERT INTO assignments
    (user_id, title, content, category, "length", created_at, updated_at, published_at, status)
VALUES
    ($1, $2, $3, $4, $5, $6, $7, $8, $9)
RETURNING id, user_id, title, content, category, "length",
          created_at, updated_at, published_at, status
"#;

/// Assignment store backed by an `sqlx` Postgres pool.
///
/// The pool is process-wide, built once at startup and shared by all request
/// handlers; connection acquire/release and queueing under saturation are the
/// pool's business, not ours.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Build the connection pool from configuration.
    ///
    /// Connections are established lazily, on first use: the server comes up
    /// even when the database is down, and inserts fail with a 500 until it
    /// recovers.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_seconds))
            .connect_lazy(&config.url)?;

        Ok(Self { pool })
    }

    /// Wrap an existing pool (used by tooling that builds its own).
    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentStore for PgStore {
    async fn insert(&self, new: NewAssignment) -> Result<Assignment, StoreError> {
        let row = sqlx::query_as::<_, Assignment>(INSERT_ASSIGNMENT)
            .bind(new.user_id)
            .bind(&new.title)
            .bind(&new.content)
            .bind(&new.category)
            .bind(new.length)
            .bind(new.created_at)
            .bind(new.updated_at)
            .bind(new.published_at)
            .bind(&new.status)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }
}
