//! Staff notification records.

use crate::model::lifecycle::{LifecycleRecord, LifecycleState, RecordId, Timestamp};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationCategory {
    /// Application or account notices.
    System,
    /// Care record and care plan events.
    Care,
    /// Visits, appointments and shift changes.
    Schedule,
    /// Documents awaiting review or signature.
    Document,
}

/// Notification shown in the staff inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    pub category: NotificationCategory,
    /// Staff member the notice targets; `None` for facility-wide notices.
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(flatten)]
    pub lifecycle: LifecycleState,
}

impl Notification {
    /// Creates a pending notification with a generated ID.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        category: NotificationCategory,
        now: Timestamp,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            category,
            recipient: None,
            lifecycle: LifecycleState::pending(now),
        }
    }
}

impl LifecycleRecord for Notification {
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
