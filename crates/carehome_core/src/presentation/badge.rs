//! Static badge metadata keyed by status enums.
//!
//! Views look a badge up once per render; nothing here carries logic beyond
//! the table itself.

use crate::model::lifecycle::LifecycleStatus;
use crate::model::resident::ResidentStatus;
use serde::Serialize;

/// Color family a badge is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Neutral,
    Info,
    Success,
    Warning,
    Muted,
}

/// Label, tone and icon key for one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub label: &'static str,
    pub tone: BadgeTone,
    /// Key into the view layer's icon registry.
    pub icon: &'static str,
}

const PRE_ADMISSION_BADGE: Badge = Badge {
    label: "入所前",
    tone: BadgeTone::Info,
    icon: "calendar-clock",
};
const ADMITTED_BADGE: Badge = Badge {
    label: "入所中",
    tone: BadgeTone::Success,
    icon: "home",
};
const DISCHARGED_BADGE: Badge = Badge {
    label: "退所",
    tone: BadgeTone::Muted,
    icon: "log-out",
};

const PENDING_BADGE: Badge = Badge {
    label: "未読",
    tone: BadgeTone::Warning,
    icon: "mail",
};
const READ_BADGE: Badge = Badge {
    label: "既読",
    tone: BadgeTone::Neutral,
    icon: "mail-open",
};
const COMPLETED_BADGE: Badge = Badge {
    label: "完了",
    tone: BadgeTone::Success,
    icon: "check-circle",
};

/// Badge for a derived resident status.
///
/// Returns `None` for an unknown status; the roster shows no badge then.
pub fn resident_badge(status: Option<ResidentStatus>) -> Option<Badge> {
    status.map(|status| match status {
        ResidentStatus::PreAdmission => PRE_ADMISSION_BADGE,
        ResidentStatus::Admitted => ADMITTED_BADGE,
        ResidentStatus::Discharged => DISCHARGED_BADGE,
    })
}

/// Badge for a handover/notification status.
pub fn lifecycle_badge(status: LifecycleStatus) -> Badge {
    match status {
        LifecycleStatus::Pending => PENDING_BADGE,
        LifecycleStatus::Read => READ_BADGE,
        LifecycleStatus::Completed => COMPLETED_BADGE,
    }
}
