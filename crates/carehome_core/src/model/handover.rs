//! Shift handover records.
//!
//! A handover is a note passed from one shift to the next. Staff on the
//! receiving shift acknowledge it (`read`) and close it once acted upon
//! (`completed`).

use crate::model::lifecycle::{LifecycleRecord, LifecycleState, RecordId, Timestamp};
use crate::model::resident::ResidentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shift that authored a handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shift {
    Day,
    Evening,
    Night,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandoverPriority {
    Normal,
    High,
    Urgent,
}

/// Handover record shown on the handover list page.
///
/// Lifecycle fields are flattened, so the wire shape is
/// `{ id, ..., status, read_at, completed_at, updated_at }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Handover {
    pub id: RecordId,
    /// Resident the handover is about; `None` for floor-wide notes.
    #[serde(default)]
    pub resident_id: Option<ResidentId>,
    pub title: String,
    pub body: String,
    pub author: String,
    pub shift: Shift,
    pub priority: HandoverPriority,
    #[serde(flatten)]
    pub lifecycle: LifecycleState,
}

impl Handover {
    /// Creates a pending handover with a generated ID.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author: impl Into<String>,
        shift: Shift,
        now: Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            resident_id: None,
            title: title.into(),
            body: body.into(),
            author: author.into(),
            shift,
            priority: HandoverPriority::Normal,
            lifecycle: LifecycleState::pending(now),
        }
    }
}

impl LifecycleRecord for Handover {
    fn id(&self) -> RecordId {
        self.id
    }

    fn lifecycle(&self) -> &LifecycleState {
        &self.lifecycle
    }

    fn lifecycle_mut(&mut self) -> &mut LifecycleState {
        &mut self.lifecycle
    }
}
