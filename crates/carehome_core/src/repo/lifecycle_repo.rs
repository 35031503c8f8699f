//! Repository contract for records with an acknowledgement lifecycle.

use crate::model::lifecycle::{replace_by_id, LifecycleRecord, RecordId};
use crate::repo::{ensure_unique_ids, RepoError, RepoResult};

/// Query and replacement access for handovers or notifications.
pub trait LifecycleRepository<R: LifecycleRecord> {
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<R>>;
    fn list_all(&self) -> RepoResult<Vec<R>>;
    /// Substitutes the stored record that has the same id.
    ///
    /// Must return `RepoError::NotFound` for unknown ids and keep the
    /// position of every record unchanged.
    fn replace(&mut self, record: R) -> RepoResult<()>;
}

/// Records held in memory, in insertion order.
#[derive(Debug, Clone)]
pub struct InMemoryLifecycleRepository<R> {
    records: Vec<R>,
}

impl<R: LifecycleRecord> InMemoryLifecycleRepository<R> {
    /// # Errors
    /// - `RepoError::DuplicateId` when two records share an id.
    pub fn new(records: Vec<R>) -> RepoResult<Self> {
        ensure_unique_ids(records.iter().map(|record| record.id()))?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R: LifecycleRecord> Default for InMemoryLifecycleRepository<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
        }
    }
}

impl<R: LifecycleRecord> LifecycleRepository<R> for InMemoryLifecycleRepository<R> {
    fn get_by_id(&self, id: RecordId) -> RepoResult<Option<R>> {
        Ok(self.records.iter().find(|record| record.id() == id).cloned())
    }

    fn list_all(&self) -> RepoResult<Vec<R>> {
        Ok(self.records.clone())
    }

    fn replace(&mut self, record: R) -> RepoResult<()> {
        let id = record.id();
        if replace_by_id(&mut self.records, record) {
            Ok(())
        } else {
            Err(RepoError::NotFound(id))
        }
    }
}
