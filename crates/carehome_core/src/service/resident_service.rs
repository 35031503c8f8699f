//! Resident roster use-cases.

use crate::model::resident::{Resident, ResidentId, ResidentStatus};
use crate::repo::resident_repo::ResidentRepository;
use crate::repo::RepoResult;
use crate::service::ServiceError;
use chrono::NaiveDate;

/// Resident paired with the status derived for a given day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResidentView {
    pub resident: Resident,
    /// `None` when the admission date is unknown; views leave the badge out.
    pub status: Option<ResidentStatus>,
}

/// Per-status head count for the roster summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub pre_admission: usize,
    pub admitted: usize,
    pub discharged: usize,
    pub unknown: usize,
}

impl StatusCounts {
    fn record(&mut self, status: Option<ResidentStatus>) {
        match status {
            Some(ResidentStatus::PreAdmission) => self.pre_admission += 1,
            Some(ResidentStatus::Admitted) => self.admitted += 1,
            Some(ResidentStatus::Discharged) => self.discharged += 1,
            None => self.unknown += 1,
        }
    }
}

pub struct ResidentService<R: ResidentRepository> {
    repo: R,
}

impl<R: ResidentRepository> ResidentService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Gets one resident with status derived for `today`.
    ///
    /// # Errors
    /// - `ServiceError::NotFound` for an unknown id.
    pub fn get_resident_view(
        &self,
        id: ResidentId,
        today: NaiveDate,
    ) -> Result<ResidentView, ServiceError> {
        let resident = self
            .repo
            .get_by_id(id)?
            .ok_or(ServiceError::NotFound(id))?;
        Ok(view(resident, today))
    }

    /// Lists the roster in repository order with statuses for `today`.
    pub fn list_roster(&self, today: NaiveDate) -> RepoResult<Vec<ResidentView>> {
        Ok(self
            .repo
            .list_all()?
            .into_iter()
            .map(|resident| view(resident, today))
            .collect())
    }

    /// Counts residents per derived status.
    pub fn count_by_status(&self, today: NaiveDate) -> RepoResult<StatusCounts> {
        let mut counts = StatusCounts::default();
        for resident in self.repo.list_all()? {
            counts.record(resident.status_on(today));
        }
        Ok(counts)
    }
}

fn view(resident: Resident, today: NaiveDate) -> ResidentView {
    let status = resident.status_on(today);
    ResidentView { resident, status }
}
