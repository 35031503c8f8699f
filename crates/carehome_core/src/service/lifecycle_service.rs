//! Read/complete use-cases for handovers and notifications.
//!
//! # Invariants
//! - Updates replace the stored record by id; list order is unchanged.
//! - Each applied update emits one `event=lifecycle_update` log line.

use crate::model::handover::Handover;
use crate::model::lifecycle::{
    apply_status, apply_status_strict, AckStatus, LifecycleRecord, LifecycleStatus, RecordId,
    Timestamp,
};
use crate::model::notification::Notification;
use crate::repo::lifecycle_repo::LifecycleRepository;
use crate::repo::RepoResult;
use crate::service::ServiceError;
use log::{info, warn};
use std::marker::PhantomData;

/// List filter used by the handover and notification pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    /// Anything not completed yet.
    Open,
    Only(LifecycleStatus),
}

impl StatusFilter {
    fn matches(self, status: LifecycleStatus) -> bool {
        match self {
            Self::All => true,
            Self::Open => status != LifecycleStatus::Completed,
            Self::Only(expected) => status == expected,
        }
    }
}

/// Lifecycle use-cases over any acknowledgeable record type.
pub struct LifecycleService<R, Repo> {
    repo: Repo,
    _record: PhantomData<R>,
}

pub type HandoverService<Repo> = LifecycleService<Handover, Repo>;
pub type NotificationService<Repo> = LifecycleService<Notification, Repo>;

impl<R: LifecycleRecord, Repo: LifecycleRepository<R>> LifecycleService<R, Repo> {
    pub fn new(repo: Repo) -> Self {
        Self {
            repo,
            _record: PhantomData,
        }
    }

    pub fn repository(&self) -> &Repo {
        &self.repo
    }

    /// Marks a record as read at `now`.
    pub fn mark_read(&mut self, id: RecordId, now: Timestamp) -> Result<R, ServiceError> {
        let record = self.load(id)?;
        self.store(&record, apply_status(&record, AckStatus::Read, now))
    }

    /// Marks a record as completed at `now`.
    pub fn mark_completed(&mut self, id: RecordId, now: Timestamp) -> Result<R, ServiceError> {
        let record = self.load(id)?;
        self.store(&record, apply_status(&record, AckStatus::Completed, now))
    }

    /// Applies `status` with forward-only rules.
    ///
    /// # Errors
    /// - `ServiceError::Lifecycle` when the record would move backwards; the
    ///   stored record is left unchanged.
    pub fn mark_strict(
        &mut self,
        id: RecordId,
        status: AckStatus,
        now: Timestamp,
    ) -> Result<R, ServiceError> {
        let record = self.load(id)?;
        let updated = apply_status_strict(&record, status, now).map_err(|err| {
            warn!(
                "event=lifecycle_update module=service status=error record_id={} from={} reason=regression",
                id,
                record.status()
            );
            err
        })?;
        self.store(&record, updated)
    }

    /// Gets one record by id.
    pub fn get(&self, id: RecordId) -> RepoResult<Option<R>> {
        self.repo.get_by_id(id)
    }

    /// Lists records matching `filter` in repository order.
    pub fn list(&self, filter: StatusFilter) -> RepoResult<Vec<R>> {
        Ok(self
            .repo
            .list_all()?
            .into_iter()
            .filter(|record| filter.matches(record.status()))
            .collect())
    }

    /// Number of records nobody has opened yet.
    pub fn pending_count(&self) -> RepoResult<usize> {
        Ok(self
            .list(StatusFilter::Only(LifecycleStatus::Pending))?
            .len())
    }

    fn load(&self, id: RecordId) -> Result<R, ServiceError> {
        self.repo.get_by_id(id)?.ok_or(ServiceError::NotFound(id))
    }

    fn store(&mut self, before: &R, updated: R) -> Result<R, ServiceError> {
        self.repo.replace(updated.clone())?;
        info!(
            "event=lifecycle_update module=service status=ok record_id={} from={} to={}",
            updated.id(),
            before.status(),
            updated.status()
        );
        Ok(updated)
    }
}
