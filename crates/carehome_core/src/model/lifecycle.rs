//! Read/completed lifecycle shared by handovers and notifications.
//!
//! # Responsibility
//! - Define the acknowledgement lifecycle fields carried by list records.
//! - Apply status updates as value replacement, never in place on shared data.
//!
//! # Invariants
//! - `read_at` is stamped whenever `Read` is applied, `completed_at` whenever
//!   `Completed` is applied; the other stamp is left untouched.
//! - `updated_at` is refreshed on every applied update.
//! - Record identity never changes across updates.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Instant used for lifecycle stamps.
pub type Timestamp = DateTime<Utc>;

/// Stable identifier for handovers and notifications.
pub type RecordId = Uuid;

/// Acknowledgement state of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    /// Not yet opened by staff.
    Pending,
    /// Opened by staff.
    Read,
    /// Acted upon and closed.
    Completed,
}

impl LifecycleStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Read => "read",
            Self::Completed => "completed",
        }
    }

    /// Whether `next` is allowed under forward-only rules.
    ///
    /// Staying in the same state is allowed; moving backwards is not.
    pub fn can_transition_to(self, next: LifecycleStatus) -> bool {
        next.rank() >= self.rank()
    }

    fn rank(self) -> u8 {
        match self {
            Self::Pending => 0,
            Self::Read => 1,
            Self::Completed => 2,
        }
    }
}

impl Display for LifecycleStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status values a caller may apply to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AckStatus {
    Read,
    Completed,
}

impl From<AckStatus> for LifecycleStatus {
    fn from(value: AckStatus) -> Self {
        match value {
            AckStatus::Read => Self::Read,
            AckStatus::Completed => Self::Completed,
        }
    }
}

/// Lifecycle fields embedded in every acknowledgeable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifecycleState {
    pub status: LifecycleStatus,
    #[serde(default)]
    pub read_at: Option<Timestamp>,
    #[serde(default)]
    pub completed_at: Option<Timestamp>,
    pub updated_at: Timestamp,
}

impl LifecycleState {
    /// Fresh state for a record created at `now`.
    pub fn pending(now: Timestamp) -> Self {
        Self {
            status: LifecycleStatus::Pending,
            read_at: None,
            completed_at: None,
            updated_at: now,
        }
    }

    fn stamp(&mut self, status: AckStatus, now: Timestamp) {
        self.status = status.into();
        match status {
            AckStatus::Read => self.read_at = Some(now),
            AckStatus::Completed => self.completed_at = Some(now),
        }
        self.updated_at = now;
    }
}

/// Record that carries an acknowledgement lifecycle.
pub trait LifecycleRecord: Clone {
    fn id(&self) -> RecordId;
    fn lifecycle(&self) -> &LifecycleState;
    fn lifecycle_mut(&mut self) -> &mut LifecycleState;

    fn status(&self) -> LifecycleStatus {
        self.lifecycle().status
    }
}

/// Lifecycle update errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// Strict update tried to move the record backwards.
    Regression {
        id: RecordId,
        from: LifecycleStatus,
        to: LifecycleStatus,
    },
}

impl Display for LifecycleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regression { id, from, to } => {
                write!(f, "record {id} cannot move from `{from}` back to `{to}`")
            }
        }
    }
}

impl Error for LifecycleError {}

/// Returns a copy of `record` with `new_status` applied at `now`.
///
/// # Contract
/// - `status` becomes `new_status` and `updated_at` becomes `now`.
/// - The `*_at` stamp matching `new_status` becomes `now`; the other is kept.
/// - Re-applying the same status re-stamps; it is not a no-op.
/// - No transition legality check. See [`apply_status_strict`].
pub fn apply_status<R: LifecycleRecord>(record: &R, new_status: AckStatus, now: Timestamp) -> R {
    let mut next = record.clone();
    next.lifecycle_mut().stamp(new_status, now);
    next
}

/// Forward-only variant of [`apply_status`].
///
/// # Errors
/// - Returns `LifecycleError::Regression` for `Completed -> Read`.
pub fn apply_status_strict<R: LifecycleRecord>(
    record: &R,
    new_status: AckStatus,
    now: Timestamp,
) -> Result<R, LifecycleError> {
    let from = record.status();
    let to = LifecycleStatus::from(new_status);
    if !from.can_transition_to(to) {
        return Err(LifecycleError::Regression {
            id: record.id(),
            from,
            to,
        });
    }
    Ok(apply_status(record, new_status, now))
}

/// Substitutes the element with the same id as `updated`.
///
/// Returns `false` when no element matches. Other elements keep their order.
pub fn replace_by_id<R: LifecycleRecord>(items: &mut [R], updated: R) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}
