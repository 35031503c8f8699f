//! Data-access contracts and in-memory implementations.
//!
//! # Responsibility
//! - Define the query interface the services depend on (`get_by_id`, `list_all`).
//! - Keep the origin of data (fixtures today, a real store later) out of services.
//!
//! # Invariants
//! - Ids are unique within one repository.
//! - Listing order is insertion order and survives record replacement.

use crate::model::lifecycle::RecordId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod lifecycle_repo;
pub mod resident_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for lookups and record replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    NotFound(RecordId),
    DuplicateId(RecordId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate record id: {id}"),
        }
    }
}

impl Error for RepoError {}

pub(crate) fn ensure_unique_ids(ids: impl IntoIterator<Item = RecordId>) -> RepoResult<()> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(RepoError::DuplicateId(id));
        }
    }
    Ok(())
}
