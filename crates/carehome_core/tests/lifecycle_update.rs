use carehome_core::{
    apply_status, apply_status_strict, replace_by_id, AckStatus, Handover, LifecycleError,
    LifecycleState, LifecycleStatus, Notification, NotificationCategory, Shift, Timestamp,
};
use chrono::{TimeZone, Utc};
use uuid::Uuid;

fn at(hour: u32) -> Timestamp {
    Utc.with_ymd_and_hms(2024, 3, 15, hour, 0, 0).unwrap()
}

fn pending_handover() -> Handover {
    Handover::new("申し送り", "夕食時の様子", "中村", Shift::Evening, at(0))
}

#[test]
fn read_stamps_read_at_and_updated_at() {
    let original = pending_handover();
    let updated = apply_status(&original, AckStatus::Read, at(1));

    assert_eq!(updated.id, original.id);
    assert_eq!(updated.lifecycle.status, LifecycleStatus::Read);
    assert_eq!(updated.lifecycle.read_at, Some(at(1)));
    assert_eq!(updated.lifecycle.completed_at, None);
    assert_eq!(updated.lifecycle.updated_at, at(1));
    assert_eq!(updated.title, original.title);
}

#[test]
fn input_record_is_left_untouched() {
    let original = pending_handover();
    let snapshot = original.clone();
    let _ = apply_status(&original, AckStatus::Completed, at(3));
    assert_eq!(original, snapshot);
}

#[test]
fn completing_after_read_preserves_read_at() {
    let read = apply_status(&pending_handover(), AckStatus::Read, at(1));
    let completed = apply_status(&read, AckStatus::Completed, at(2));

    assert_eq!(completed.lifecycle.status, LifecycleStatus::Completed);
    assert_eq!(completed.lifecycle.read_at, Some(at(1)));
    assert_eq!(completed.lifecycle.completed_at, Some(at(2)));
    assert_eq!(completed.lifecycle.updated_at, at(2));
}

#[test]
fn reapplying_the_same_status_restamps() {
    let first = apply_status(&pending_handover(), AckStatus::Read, at(1));
    let second = apply_status(&first, AckStatus::Read, at(5));

    assert_eq!(second.lifecycle.status, LifecycleStatus::Read);
    assert_eq!(second.lifecycle.read_at, Some(at(5)));
    assert_eq!(second.lifecycle.updated_at, at(5));
}

#[test]
fn free_setter_allows_regression_but_keeps_completed_at() {
    let completed = apply_status(&pending_handover(), AckStatus::Completed, at(2));
    let reread = apply_status(&completed, AckStatus::Read, at(4));

    assert_eq!(reread.lifecycle.status, LifecycleStatus::Read);
    assert_eq!(reread.lifecycle.completed_at, Some(at(2)));
    assert_eq!(reread.lifecycle.read_at, Some(at(4)));
}

#[test]
fn strict_update_rejects_regression() {
    let completed = apply_status(&pending_handover(), AckStatus::Completed, at(2));
    let err = apply_status_strict(&completed, AckStatus::Read, at(4)).unwrap_err();

    assert_eq!(
        err,
        LifecycleError::Regression {
            id: completed.id,
            from: LifecycleStatus::Completed,
            to: LifecycleStatus::Read,
        }
    );
}

#[test]
fn strict_update_matches_free_setter_on_forward_moves() {
    let pending = pending_handover();
    assert_eq!(
        apply_status_strict(&pending, AckStatus::Read, at(1)).unwrap(),
        apply_status(&pending, AckStatus::Read, at(1))
    );
    assert_eq!(
        apply_status_strict(&pending, AckStatus::Completed, at(1)).unwrap(),
        apply_status(&pending, AckStatus::Completed, at(1))
    );
}

#[test]
fn notifications_share_the_same_lifecycle() {
    let notice = Notification::new("面会予約", "14:00", NotificationCategory::Schedule, at(0));
    let read = apply_status(&notice, AckStatus::Read, at(1));
    assert_eq!(read.lifecycle.status, LifecycleStatus::Read);
    assert_eq!(read.category, NotificationCategory::Schedule);
}

#[test]
fn replace_by_id_keeps_order() {
    let mut items = vec![pending_handover(), pending_handover(), pending_handover()];
    let ids: Vec<Uuid> = items.iter().map(|item| item.id).collect();

    let updated = apply_status(&items[1], AckStatus::Read, at(1));
    assert!(replace_by_id(&mut items, updated));

    assert_eq!(items.iter().map(|item| item.id).collect::<Vec<_>>(), ids);
    assert_eq!(items[0].lifecycle.status, LifecycleStatus::Pending);
    assert_eq!(items[1].lifecycle.status, LifecycleStatus::Read);
    assert_eq!(items[2].lifecycle.status, LifecycleStatus::Pending);
}

#[test]
fn replace_by_id_reports_missing_record() {
    let mut items = vec![pending_handover()];
    assert!(!replace_by_id(&mut items, pending_handover()));
    assert_eq!(items[0].lifecycle.status, LifecycleStatus::Pending);
}

#[test]
fn handover_wire_shape_flattens_lifecycle() {
    let handover = apply_status(&pending_handover(), AckStatus::Read, at(1));
    let json = serde_json::to_value(&handover).unwrap();

    assert_eq!(json["status"], "read");
    assert_eq!(json["shift"], "evening");
    assert_eq!(json["read_at"], "2024-03-15T01:00:00Z");
    assert!(json["completed_at"].is_null());

    let decoded: Handover = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, handover);
}

#[test]
fn pending_state_has_no_stamps() {
    let state = LifecycleState::pending(at(0));
    assert_eq!(state.status, LifecycleStatus::Pending);
    assert_eq!(state.read_at, None);
    assert_eq!(state.completed_at, None);
}
