//! Use-case services consumed by the view layer.
//!
//! # Responsibility
//! - Combine repository lookups with status derivation and lifecycle updates.
//! - Keep views decoupled from where records come from.
//!
//! # Invariants
//! - Resident status is re-derived on every call.
//! - Lifecycle updates go through `apply_status*` and are written back by id.

use crate::model::lifecycle::{LifecycleError, RecordId};
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod lifecycle_service;
pub mod resident_service;

/// Service error shared by resident and lifecycle use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Target record does not exist.
    NotFound(RecordId),
    /// Strict update rejected the transition.
    Lifecycle(LifecycleError),
    /// Data-access failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "record not found: {id}"),
            Self::Lifecycle(err) => write!(f, "{err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Lifecycle(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(id) => Self::NotFound(id),
            other => Self::Repo(other),
        }
    }
}

impl From<LifecycleError> for ServiceError {
    fn from(value: LifecycleError) -> Self {
        Self::Lifecycle(value)
    }
}
