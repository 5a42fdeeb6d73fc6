//! Persistence port for assignments.
//!
//! Handlers never see the connection pool directly: they talk to the narrow
//! [`AssignmentStore`] trait, so the HTTP layer can be exercised against an
//! in-memory fake while production wires in Postgres.

pub mod memory;
pub mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;

use crate::model::{Assignment, NewAssignment};

/// Error from the persistence layer.
///
/// Subtypes are deliberately not distinguished further: connectivity
/// failures, constraint violations and driver errors all surface to the
/// client as the same generic 500.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Port for assignment persistence.
///
/// One operation only — assignments are created exactly once and never
/// updated or deleted through this service.
#[async_trait]
pub trait AssignmentStore: Send + Sync {
    /// Insert one assignment and return the persisted row, id assigned.
    async fn insert(&self, new: NewAssignment) -> Result<Assignment, StoreError>;
}
