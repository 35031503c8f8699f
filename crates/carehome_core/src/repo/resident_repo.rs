//! Resident repository contract and in-memory implementation.

use crate::model::resident::{Resident, ResidentId};
use crate::repo::{ensure_unique_ids, RepoResult};

/// Read-only access to the resident roster.
pub trait ResidentRepository {
    fn get_by_id(&self, id: ResidentId) -> RepoResult<Option<Resident>>;
    fn list_all(&self) -> RepoResult<Vec<Resident>>;
}

/// Roster held in memory, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryResidentRepository {
    residents: Vec<Resident>,
}

impl InMemoryResidentRepository {
    /// Builds a repository from roster records.
    ///
    /// # Errors
    /// - `RepoError::DuplicateId` when two residents share an id.
    pub fn new(residents: Vec<Resident>) -> RepoResult<Self> {
        ensure_unique_ids(residents.iter().map(|resident| resident.id))?;
        Ok(Self { residents })
    }

    pub fn len(&self) -> usize {
        self.residents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residents.is_empty()
    }
}

impl ResidentRepository for InMemoryResidentRepository {
    fn get_by_id(&self, id: ResidentId) -> RepoResult<Option<Resident>> {
        Ok(self
            .residents
            .iter()
            .find(|resident| resident.id == id)
            .cloned())
    }

    fn list_all(&self) -> RepoResult<Vec<Resident>> {
        Ok(self.residents.clone())
    }
}
