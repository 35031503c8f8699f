//! Bundled mock datasets for demo and development builds.
//!
//! # Responsibility
//! - Decode the embedded JSON datasets into domain records.
//! - Hand them out behind the repository contracts, so callers never
//!   depend on the data being static.
//!
//! # Invariants
//! - Loading never panics; malformed datasets surface as `FixtureError`.
//! - Ids are unique per dataset.

use crate::model::handover::Handover;
use crate::model::notification::Notification;
use crate::model::resident::Resident;
use crate::repo::lifecycle_repo::InMemoryLifecycleRepository;
use crate::repo::resident_repo::InMemoryResidentRepository;
use crate::repo::RepoError;
use log::debug;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

const RESIDENTS_JSON: &str = include_str!("../fixtures/residents.json");
const HANDOVERS_JSON: &str = include_str!("../fixtures/handovers.json");
const NOTIFICATIONS_JSON: &str = include_str!("../fixtures/notifications.json");

/// Fixture loading error.
#[derive(Debug)]
pub enum FixtureError {
    Decode {
        dataset: &'static str,
        source: serde_json::Error,
    },
    Repo {
        dataset: &'static str,
        source: RepoError,
    },
}

impl Display for FixtureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decode { dataset, source } => {
                write!(f, "fixture `{dataset}` could not be decoded: {source}")
            }
            Self::Repo { dataset, source } => write!(f, "fixture `{dataset}` rejected: {source}"),
        }
    }
}

impl Error for FixtureError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Decode { source, .. } => Some(source),
            Self::Repo { source, .. } => Some(source),
        }
    }
}

/// Repositories seeded from the bundled datasets.
#[derive(Debug, Clone)]
pub struct FixtureRepositories {
    pub residents: InMemoryResidentRepository,
    pub handovers: InMemoryLifecycleRepository<Handover>,
    pub notifications: InMemoryLifecycleRepository<Notification>,
}

/// Decodes all bundled datasets into in-memory repositories.
///
/// # Errors
/// - `FixtureError::Decode` when a dataset does not match the record shape.
/// - `FixtureError::Repo` when a dataset contains duplicate ids.
pub fn load_fixtures() -> Result<FixtureRepositories, FixtureError> {
    let residents = decode::<Resident>("residents", RESIDENTS_JSON)?;
    let handovers = decode::<Handover>("handovers", HANDOVERS_JSON)?;
    let notifications = decode::<Notification>("notifications", NOTIFICATIONS_JSON)?;

    debug!(
        "event=fixtures_load module=fixtures status=ok residents={} handovers={} notifications={}",
        residents.len(),
        handovers.len(),
        notifications.len()
    );

    Ok(FixtureRepositories {
        residents: InMemoryResidentRepository::new(residents).map_err(|source| {
            FixtureError::Repo {
                dataset: "residents",
                source,
            }
        })?,
        handovers: InMemoryLifecycleRepository::new(handovers).map_err(|source| {
            FixtureError::Repo {
                dataset: "handovers",
                source,
            }
        })?,
        notifications: InMemoryLifecycleRepository::new(notifications).map_err(|source| {
            FixtureError::Repo {
                dataset: "notifications",
                source,
            }
        })?,
    })
}

fn decode<T: DeserializeOwned>(dataset: &'static str, json: &str) -> Result<Vec<T>, FixtureError> {
    serde_json::from_str(json).map_err(|source| FixtureError::Decode { dataset, source })
}
