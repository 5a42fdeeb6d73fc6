//! In-memory assignment store for tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::{AssignmentStore, StoreError};
use crate::model::{Assignment, NewAssignment};

/// In-memory implementation of [`AssignmentStore`].
///
/// Thread-safe via an internal [`RwLock`]; ids are assigned sequentially the
/// way a serial column would. A failure flag lets tests drive the 500 path
/// without a database.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    rows: Arc<RwLock<Vec<Assignment>>>,
    failing: Arc<AtomicBool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent insert fail, as if the database were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of stored rows.
    pub fn len(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Snapshot of all stored rows, in insertion order.
    pub fn rows(&self) -> Vec<Assignment> {
        self.rows.read().map(|rows| rows.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AssignmentStore for MemoryStore {
    async fn insert(&self, new: NewAssignment) -> Result<Assignment, StoreError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Unavailable("injected store failure".to_string()));
        }

        let mut rows = self
            .rows
            .write()
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        let row = Assignment {
            id: rows.len() as i32 + 1,
            user_id: new.user_id,
            title: new.title,
            content: new.content,
            category: new.category,
            length: new.length,
            created_at: new.created_at,
            updated_at: new.updated_at,
            published_at: new.published_at,
            status: new.status,
        };
        rows.push(row.clone());

        Ok(row)
    }
}
